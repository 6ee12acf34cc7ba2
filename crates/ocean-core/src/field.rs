//! Scalar fields sampled by the compositor: emitter displacement plus the
//! ambient boundary, morph and band fields. Everything here is a pure function
//! of position, clock and emitter state; random jitter is passed in.

use crate::emitter::Emitter;
use crate::params::{FieldParams, RippleParams};
use crate::state::SimClock;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldSample {
    pub displacement: f32,
    /// |displacement| crossed the rippled threshold.
    pub has_effect: bool,
}

pub struct FieldSampler<'a> {
    emitters: &'a [Emitter],
    ripple: &'a RippleParams,
    field: &'a FieldParams,
    clock: SimClock,
}

impl<'a> FieldSampler<'a> {
    pub fn new(
        emitters: &'a [Emitter],
        ripple: &'a RippleParams,
        field: &'a FieldParams,
        clock: SimClock,
    ) -> Self {
        Self {
            emitters,
            ripple,
            field,
            clock,
        }
    }

    /// Reach margin for skipping emitters. Never smaller than a ring's half
    /// width, otherwise skipping could drop a contribution.
    #[inline]
    pub fn skip_margin(&self) -> f32 {
        self.field.sample_margin.max(self.ripple.ring_thickness)
    }

    pub fn sample_at(&self, p: Vec2) -> FieldSample {
        let margin = self.skip_margin();
        let mut displacement = 0.0;
        for e in self.emitters {
            if p.distance_squared(e.origin()) > e.reach_sq(margin) {
                continue;
            }
            displacement += e.sample_displacement(p, self.ripple);
        }
        FieldSample {
            displacement,
            has_effect: displacement.abs() > self.field.ripple_threshold,
        }
    }

    /// Jagged sky/ocean boundary at column `x`, relative to the horizon line.
    /// `jitter` is a uniform sample in [-0.5, 0.5].
    pub fn boundary_y(&self, x: f32, horizon_y: f32, jitter: f32) -> f32 {
        boundary_y(self.field, x, self.clock.wave_offset, horizon_y, jitter)
    }

    pub fn morph(&self, p: Vec2) -> f32 {
        morph(p, self.clock.time)
    }

    pub fn band(&self, p: Vec2) -> f32 {
        band(self.field, p, self.clock.time)
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }
}

pub fn boundary_y(field: &FieldParams, x: f32, wave_offset: f32, horizon_y: f32, jitter: f32) -> f32 {
    let base = horizon_y - field.boundary_reach() - field.wave_lift;
    let swell: f32 = field
        .boundary_terms
        .iter()
        .map(|t| (x * t.freq + wave_offset * t.speed).sin() * t.amplitude)
        .sum();
    base + swell + jitter * field.boundary_jitter
}

/// Slow drift in [-1, 1]: two sine-cosine products blended 1 : 0.6.
pub fn morph(p: Vec2, time: f32) -> f32 {
    let a = (p.x * 0.02 + time * 0.5).sin() * (p.y * 0.015 + time * 0.4).cos() * (time * 0.8).sin();
    let b = (p.x * 0.01 + time * 0.3).sin() * (p.y * 0.012 + time * 0.6).cos() * (time * 0.5).sin();
    (a + b * 0.6) / 1.6
}

/// Traveling diagonal bands: a sinusoid along an axis that turns with time.
pub fn band(field: &FieldParams, p: Vec2, time: f32) -> f32 {
    let axis = Vec2::from_angle(std::f32::consts::FRAC_PI_4 + time * field.band_rotation);
    (p.dot(axis) * field.band_freq - time * field.band_speed).sin()
}
