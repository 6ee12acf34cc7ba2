/// Web front-end constants: element ids, the pointer stand-in person and
/// limits for the keyboard tunable steps.
///
/// Simulation defaults live in `ocean_core::constants`.
// Element ids
pub const CANVAS_ID: &str = "ocean-canvas";
pub const TIMELINE_ID: &str = "timeline";
pub const TIMELINE_DATA_SELECTOR: &str = "#timeline g"; // plotted area inside the svg
pub const DEBUG_PANEL_ID: &str = "debug-panel";

// The timeline's x-axis sits this far down its bounding box
pub const TIMELINE_AXIS_FRACTION: f32 = 0.6;

// Pointer stand-in for the tracking feed
pub const STAND_IN_PERSON: u32 = 99;

// Debug panel refresh (ms); the panel is text-only so it does not need every frame
pub const DEBUG_REFRESH_MS: f64 = 250.0;

// Keyboard steps
pub const RING_COUNT_STEP: i32 = 1;
pub const RING_COUNT_MIN: usize = 1;
pub const RING_COUNT_MAX: usize = 24;
pub const SPEED_STEP: f32 = 1.0;
pub const SPEED_MIN: f32 = 1.0;
pub const SPEED_MAX: f32 = 40.0;
pub const INTENSITY_STEP: f32 = 5.0;
pub const INTENSITY_MIN: f32 = 0.0;
pub const INTENSITY_MAX: f32 = 120.0;
