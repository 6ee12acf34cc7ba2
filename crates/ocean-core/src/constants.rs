// Shared tuning constants for the ripple ocean. These are the defaults behind
// `Tunables`; front ends may override them at runtime.

// Ring geometry
pub const RING_COUNT: usize = 10;
pub const RING_SPACING_PX: f32 = 80.0; // gap between concentric rings
pub const RING_THICKNESS_PX: f32 = 40.0; // half-width of a ring band
pub const RING_STRENGTH_FALLOFF: f32 = 0.08; // per-ring strength loss
pub const RING_BASE_FREQ: f32 = 0.15;
pub const RING_FREQ_STEP: f32 = 0.05;
pub const RING_PHASE_STEP: f32 = 0.6;
pub const RING_EDGE_FRACTION: f32 = 0.95; // rings fade out by this share of max radius
pub const WAVE_INTENSITY: f32 = 35.0;

// Emitter lifecycle (units: ticks)
pub const EXPANSION_SPEED_PX: f32 = 8.0;
pub const DISSIPATION_RATE: f32 = 0.001;
pub const LIVE_STRENGTH_FLOOR: f32 = 0.01;
pub const LIFE_BUFFER_QUIET: f32 = 1.8; // extra life for low-magnitude emitters
pub const LIFE_BUFFER_LOUD: f32 = 1.3;

// Magnitude -> radius
pub const BASE_RADIUS_FRACTION: f32 = 0.25; // of canvas height
pub const MIN_RADIUS_SCALE: f32 = 0.5;
pub const MAX_RADIUS_SCALE: f32 = 5.0;
pub const MAGNITUDE_EXPONENT: f32 = 2.0;
pub const DEGENERATE_MAGNITUDE: f32 = 0.5; // normalized value when min == max

// Pool and timers (units: milliseconds unless noted)
pub const MOVEMENT_THRESHOLD: f32 = 5.0; // raw input units
pub const SETTLE_DELAY_MS: f64 = 400.0;
pub const PULSE_LEAD: f64 = 1.2; // pulse interval = lifetime * lead
pub const MAX_EMITTERS: usize = 10;
pub const COMMIT_DELAY_MS: f64 = 200.0;
pub const IDLE_STARTUP_DELAY_MS: f64 = 2000.0;
pub const IDLE_INTERVAL_MS: f64 = 10_000.0;
pub const SAMPLE_MARGIN_PX: f32 = 100.0;

// Input mapping
pub const INPUT_RANGE: [f32; 2] = [0.0, 200.0]; // pose feed horizontal range

// Layout
pub const HORIZON_DEFAULT_FRACTION: f32 = 0.4;
pub const HORIZON_MIN_FRACTION: f32 = 0.2;
pub const HORIZON_BOTTOM_MARGIN_PX: f32 = 100.0;
pub const WAVE_TOP_OFFSET_PX: f32 = 150.0; // emitters sit this far above the horizon
pub const WAVE_LIFT_PX: f32 = 180.0;
pub const OCEAN_DEPTH_PX: f32 = 250.0;

// Wave boundary terms: (spatial frequency, time speed, amplitude)
pub const BOUNDARY_TERMS: [[f32; 3]; 4] = [
    [0.01, 1.0, 20.0], // main swell
    [0.03, 2.0, 12.0],
    [0.015, 1.5, 8.0],
    [0.06, 2.3, 6.0],
];
pub const BOUNDARY_JITTER_PX: f32 = 0.5;

// Ambient fields
pub const BAND_FREQ: f32 = 0.012;
pub const BAND_SPEED: f32 = 0.7;
pub const BAND_ROTATION: f32 = 0.15; // radians per unit of simulation time

// Frame budget
pub const TARGET_FPS: f32 = 20.0;
pub const CELL_STRIDE_PX: f32 = 12.0;
pub const MIN_CELL_PX: f32 = 4.0;
pub const MAX_CELL_PX: f32 = 12.0;
pub const ANTI_ALIAS_CELLS: f32 = 4.0;
pub const ALPHA_SKIP: f32 = 0.05;
pub const RIPPLE_THRESHOLD: f32 = 0.5; // |displacement| above this reads as rippled
pub const TIME_STEP: f32 = 0.01; // simulation time per accepted frame
pub const WAVE_OFFSET_STEP: f32 = 0.02;

// Palette (0-255 RGB)
pub const DEEP_OCEAN: [f32; 3] = [5.0, 15.0, 35.0];
pub const SKY_TOP: [f32; 3] = [10.0, 20.0, 40.0];
pub const SKY_HORIZON: [f32; 3] = [20.0, 35.0, 60.0];
pub const SEPARATION_BAND: [f32; 3] = [8.0, 18.0, 38.0];
pub const SEPARATION_BAND_PX: f32 = 24.0;
pub const BAND_TINT: [f32; 3] = [1.5, 2.5, 4.0]; // per-channel weight of the traveling bands
pub const RIPPLE_DESATURATION: f32 = 0.2; // max pull toward grey on strong ripples
