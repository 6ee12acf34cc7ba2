//! Runtime tunables. Every field defaults to the matching item in
//! `constants.rs`; front ends read them through `Ocean::tunables` and may swap
//! in a new set for live experimentation.

use crate::constants::*;
use crate::error::{OceanError, Result};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct RippleParams {
    pub ring_count: usize,
    pub ring_spacing: f32,
    pub ring_thickness: f32,
    pub ring_strength_falloff: f32,
    pub ring_base_freq: f32,
    pub ring_freq_step: f32,
    pub ring_phase_step: f32,
    pub ring_edge_fraction: f32,
    pub wave_intensity: f32,
    pub expansion_speed: f32,
    pub dissipation_rate: f32,
    pub live_strength_floor: f32,
    pub life_buffer_quiet: f32,
    pub life_buffer_loud: f32,
    pub base_radius_fraction: f32,
    pub min_radius_scale: f32,
    pub max_radius_scale: f32,
    pub magnitude_exponent: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            ring_count: RING_COUNT,
            ring_spacing: RING_SPACING_PX,
            ring_thickness: RING_THICKNESS_PX,
            ring_strength_falloff: RING_STRENGTH_FALLOFF,
            ring_base_freq: RING_BASE_FREQ,
            ring_freq_step: RING_FREQ_STEP,
            ring_phase_step: RING_PHASE_STEP,
            ring_edge_fraction: RING_EDGE_FRACTION,
            wave_intensity: WAVE_INTENSITY,
            expansion_speed: EXPANSION_SPEED_PX,
            dissipation_rate: DISSIPATION_RATE,
            live_strength_floor: LIVE_STRENGTH_FLOOR,
            life_buffer_quiet: LIFE_BUFFER_QUIET,
            life_buffer_loud: LIFE_BUFFER_LOUD,
            base_radius_fraction: BASE_RADIUS_FRACTION,
            min_radius_scale: MIN_RADIUS_SCALE,
            max_radius_scale: MAX_RADIUS_SCALE,
            magnitude_exponent: MAGNITUDE_EXPONENT,
        }
    }
}

impl RippleParams {
    #[inline]
    pub fn base_radius(&self, canvas_height: f32) -> f32 {
        canvas_height * self.base_radius_fraction
    }

    /// Compress a normalized magnitude toward zero, keeping the top end apart.
    #[inline]
    pub fn curve(&self, normalized: f32) -> f32 {
        normalized.clamp(0.0, 1.0).powf(self.magnitude_exponent)
    }

    #[inline]
    pub fn max_radius(&self, curved: f32, base_radius: f32) -> f32 {
        base_radius
            * (self.min_radius_scale + curved * (self.max_radius_scale - self.min_radius_scale))
    }

    /// Ticks for the leading ring to travel from the origin to `max_radius`.
    #[inline]
    pub fn ticks_to_max(&self, max_radius: f32) -> f32 {
        max_radius / self.expansion_speed
    }

    /// Quiet emitters get the larger buffer so they stay visible longer.
    #[inline]
    pub fn life_buffer(&self, curved: f32) -> f32 {
        self.life_buffer_quiet + (self.life_buffer_loud - self.life_buffer_quiet) * curved
    }

    #[inline]
    pub fn fade_speed(&self, curved: f32, max_radius: f32) -> f32 {
        let ticks = self.ticks_to_max(max_radius).max(1.0);
        1.0 / (ticks * self.life_buffer(curved))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoolParams {
    pub movement_threshold: f32,
    pub settle_delay_ms: f64,
    pub pulse_lead: f64,
    pub max_emitters: usize,
    pub commit_delay_ms: f64,
    pub idle_startup_delay_ms: f64,
    pub idle_interval_ms: f64,
    pub input_range: [f32; 2],
    /// Optional sub-linear exponent applied after normalizing raw positions.
    pub sensitivity: Option<f32>,
    pub wave_top_offset: f32,
}

impl Default for PoolParams {
    fn default() -> Self {
        Self {
            movement_threshold: MOVEMENT_THRESHOLD,
            settle_delay_ms: SETTLE_DELAY_MS,
            pulse_lead: PULSE_LEAD,
            max_emitters: MAX_EMITTERS,
            commit_delay_ms: COMMIT_DELAY_MS,
            idle_startup_delay_ms: IDLE_STARTUP_DELAY_MS,
            idle_interval_ms: IDLE_INTERVAL_MS,
            input_range: INPUT_RANGE,
            sensitivity: None,
            wave_top_offset: WAVE_TOP_OFFSET_PX,
        }
    }
}

/// One summed sine term of the wave boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTerm {
    pub freq: f32,
    pub speed: f32,
    pub amplitude: f32,
}

impl From<[f32; 3]> for WaveTerm {
    fn from(t: [f32; 3]) -> Self {
        Self {
            freq: t[0],
            speed: t[1],
            amplitude: t[2],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub boundary_terms: Vec<WaveTerm>,
    pub boundary_jitter: f32,
    pub wave_lift: f32,
    pub band_freq: f32,
    pub band_speed: f32,
    pub band_rotation: f32,
    pub sample_margin: f32,
    pub ripple_threshold: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            boundary_terms: BOUNDARY_TERMS.iter().copied().map(WaveTerm::from).collect(),
            boundary_jitter: BOUNDARY_JITTER_PX,
            wave_lift: WAVE_LIFT_PX,
            band_freq: BAND_FREQ,
            band_speed: BAND_SPEED,
            band_rotation: BAND_ROTATION,
            sample_margin: SAMPLE_MARGIN_PX,
            ripple_threshold: RIPPLE_THRESHOLD,
        }
    }
}

impl FieldParams {
    /// Highest point the summed boundary terms can reach above their base line.
    pub fn boundary_reach(&self) -> f32 {
        self.boundary_terms.iter().map(|t| t.amplitude.abs()).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams {
    pub target_fps: f32,
    pub cell_stride: f32,
    pub min_cell: f32,
    pub max_cell: f32,
    pub anti_alias_cells: f32,
    pub alpha_skip: f32,
    pub time_step: f32,
    pub wave_offset_step: f32,
    pub ocean_depth: f32,
    pub horizon_default: f32,
    pub horizon_min: f32,
    pub horizon_bottom_margin: f32,
    pub separation_band: f32,
    pub deep_ocean: Vec3,
    pub sky_top: Vec3,
    pub sky_horizon: Vec3,
    pub band_color: Vec3,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            cell_stride: CELL_STRIDE_PX,
            min_cell: MIN_CELL_PX,
            max_cell: MAX_CELL_PX,
            anti_alias_cells: ANTI_ALIAS_CELLS,
            alpha_skip: ALPHA_SKIP,
            time_step: TIME_STEP,
            wave_offset_step: WAVE_OFFSET_STEP,
            ocean_depth: OCEAN_DEPTH_PX,
            horizon_default: HORIZON_DEFAULT_FRACTION,
            horizon_min: HORIZON_MIN_FRACTION,
            horizon_bottom_margin: HORIZON_BOTTOM_MARGIN_PX,
            separation_band: SEPARATION_BAND_PX,
            deep_ocean: Vec3::from(DEEP_OCEAN),
            sky_top: Vec3::from(SKY_TOP),
            sky_horizon: Vec3::from(SKY_HORIZON),
            band_color: Vec3::from(SEPARATION_BAND),
        }
    }
}

impl RenderParams {
    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps as f64
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tunables {
    pub ripple: RippleParams,
    pub pool: PoolParams,
    pub field: FieldParams,
    pub render: RenderParams,
}

impl Tunables {
    pub fn validate(&self) -> Result<()> {
        if !(self.render.target_fps > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "target_fps must be positive, got {}",
                self.render.target_fps
            )));
        }
        if !(self.render.cell_stride >= 1.0) {
            return Err(OceanError::InvalidConfig(format!(
                "cell_stride must be at least 1px, got {}",
                self.render.cell_stride
            )));
        }
        if !(self.ripple.expansion_speed > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "expansion_speed must be positive, got {}",
                self.ripple.expansion_speed
            )));
        }
        let [lo, hi] = self.pool.input_range;
        if !(hi > lo) {
            return Err(OceanError::InvalidConfig(format!(
                "input range is empty: [{lo}, {hi}]"
            )));
        }
        if self.pool.max_emitters == 0 {
            return Err(OceanError::InvalidConfig("max_emitters must be at least 1".into()));
        }
        Ok(())
    }
}

/// Everything needed to build an `Ocean`.
#[derive(Clone, Debug)]
pub struct OceanConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub tunables: Tunables,
}

impl OceanConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: 0x0CEA_1D00,
            tunables: Tunables::default(),
        }
    }
}
