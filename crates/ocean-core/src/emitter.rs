//! A single expanding, decaying ripple source.
//!
//! Emitters age in ticks (one per accepted frame). Their size and lifetime come
//! from a data magnitude: `max_radius` scales between `min_radius_scale` and
//! `max_radius_scale` of a height-dependent base radius, and `fade_speed` is
//! derived so `life` runs out shortly after the leading ring reaches
//! `max_radius`.

use crate::magnitude::MagnitudeRange;
use crate::params::RippleParams;
use crate::PersonId;
use glam::Vec2;

/// Creation request for one emitter.
#[derive(Clone, Copy, Debug)]
pub struct Spawn {
    pub origin: Vec2,
    /// Ticks to wait before the emitter starts expanding.
    pub activation_delay: u32,
    /// Raw data magnitude (event count); negative values clamp to the range minimum.
    pub magnitude: f64,
    pub owner: PersonId,
}

#[derive(Clone, Debug)]
pub struct Emitter {
    origin: Vec2,
    radius: f32,
    max_radius: f32,
    speed: f32,
    strength: f32,
    life: f32,
    fade_speed: f32,
    dissipation_rate: f32,
    strength_floor: f32,
    activation_delay: u32,
    age: u32,
    owner: PersonId,
    magnitude: f32,
    total_strength: f32,
    retired: bool,
}

impl Emitter {
    pub fn new(
        spawn: Spawn,
        range: &MagnitudeRange,
        base_radius: f32,
        params: &RippleParams,
    ) -> Self {
        let normalized = range.normalize(spawn.magnitude.max(range.min));
        let curved = params.curve(normalized);
        let max_radius = params.max_radius(curved, base_radius);
        Self {
            origin: spawn.origin,
            radius: 0.0,
            max_radius,
            speed: params.expansion_speed,
            strength: 1.0,
            life: 1.0,
            fade_speed: params.fade_speed(curved, max_radius),
            dissipation_rate: params.dissipation_rate,
            strength_floor: params.live_strength_floor,
            activation_delay: spawn.activation_delay,
            age: 0,
            owner: spawn.owner,
            magnitude: curved,
            total_strength: 0.0,
            retired: false,
        }
    }

    /// Advance one tick. Does nothing once retired or while still delayed.
    pub fn tick(&mut self) {
        if self.retired {
            return;
        }
        self.age = self.age.saturating_add(1);
        if self.age < self.activation_delay {
            return;
        }
        self.radius += self.speed;
        self.life -= self.fade_speed;
        self.strength *= 1.0 - self.dissipation_rate;
        let radius_strength = 1.0 - self.radius / self.max_radius;
        self.total_strength = self.strength * radius_strength * self.life;
        if !self.conditions_hold() {
            self.retired = true;
        }
    }

    #[inline]
    fn conditions_hold(&self) -> bool {
        self.radius < self.max_radius && self.life > 0.0 && self.strength > self.strength_floor
    }

    /// Live until the first failed condition; retirement is permanent.
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.retired && self.conditions_hold()
    }

    /// Ring displacement at `p`. Rings are checked from the leading edge
    /// inward and the first band containing `p` decides the value.
    pub fn sample_displacement(&self, p: Vec2, params: &RippleParams) -> f32 {
        if !(self.total_strength > 0.0) {
            return 0.0;
        }
        let dist = self.origin.distance(p);
        let thickness = params.ring_thickness;
        for ring in 0..params.ring_count {
            let ring_f = ring as f32;
            let ring_radius = self.radius - ring_f * params.ring_spacing;
            if ring_radius <= 0.0 {
                break;
            }
            let from_ring = (dist - ring_radius).abs();
            if from_ring < thickness {
                let ring_strength = self.total_strength
                    * (1.0 - ring_f * params.ring_strength_falloff)
                    * (1.0 - dist / (self.max_radius * params.ring_edge_fraction));
                let local = (1.0 - from_ring / thickness) * ring_strength;
                let freq = params.ring_base_freq + ring_f * params.ring_freq_step;
                let phase = (ring_f + 1.0) * params.ring_phase_step;
                return (from_ring * freq + phase).sin() * local * params.wave_intensity;
            }
        }
        0.0
    }

    /// Squared reach used to skip emitters that cannot touch a point.
    #[inline]
    pub fn reach_sq(&self, margin: f32) -> f32 {
        let r = self.radius + margin;
        r * r
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }
    pub fn strength(&self) -> f32 {
        self.strength
    }
    pub fn life(&self) -> f32 {
        self.life
    }
    pub fn fade_speed(&self) -> f32 {
        self.fade_speed
    }
    pub fn total_strength(&self) -> f32 {
        self.total_strength
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn owner(&self) -> PersonId {
        self.owner
    }
    /// Curved magnitude in [0, 1] this emitter was sized from.
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }
    pub fn is_active(&self) -> bool {
        self.age >= self.activation_delay && self.age > 0
    }
}
