//! Per-cell styling for the ocean grid.
//!
//! Calm cells stay close to the base palette with faint drift. Rippled cells get
//! stronger size wobble, static, brightness and a slight pull toward grey. Both
//! paths end in a clamp whose blue floor is above zero, so no cell is black.

use crate::constants::{BAND_TINT, RIPPLE_DESATURATION};
use crate::field::FieldSample;
use crate::params::RenderParams;
use glam::{Vec2, Vec3};

const CALM_FLOOR: Vec3 = Vec3::new(5.0, 15.0, 35.0);
const CALM_MIN: Vec3 = Vec3::new(8.0, 20.0, 45.0);
const CALM_MAX: Vec3 = Vec3::new(40.0, 60.0, 120.0);
const RIPPLED_MIN: Vec3 = Vec3::new(0.0, 0.0, 20.0);
const RIPPLED_MAX: Vec3 = Vec3::new(60.0, 80.0, 150.0);
const BRIGHT_MAX: Vec3 = Vec3::new(80.0, 100.0, 180.0);
const EDGE_BAND_PX: f32 = 20.0;

/// Uniform [0, 1) samples supplied by the caller's RNG.
#[derive(Clone, Copy, Debug)]
pub struct Grain {
    pub static_unit: f32,
    pub variation_unit: f32,
}

impl Grain {
    pub const NEUTRAL: Grain = Grain {
        static_unit: 0.5,
        variation_unit: 0.5,
    };
}

#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub p: Vec2,
    pub boundary_y: f32,
    pub canvas_height: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPaint {
    pub pos: Vec2,
    pub size: f32,
    pub color: Vec3,
    pub alpha: f32,
}

/// Fade-in for cells above the boundary, over `fade_px`.
pub fn edge_alpha(y: f32, boundary_y: f32, fade_px: f32) -> f32 {
    if y >= boundary_y {
        return 1.0;
    }
    if fade_px <= 0.0 {
        return 0.0;
    }
    let n = (boundary_y - y) / fade_px;
    (1.0 - n.powf(0.7)).clamp(0.0, 1.0)
}

pub fn displaced(p: Vec2, d: f32) -> Vec2 {
    let angle = d * 0.1;
    p + Vec2::new(angle.cos(), angle.sin()) * d * 0.5
}

pub fn cell_size(p: Vec2, time: f32, sample: FieldSample, params: &RenderParams) -> f32 {
    let wobble = if sample.has_effect {
        (p.x * 0.03 + time * 2.0).sin() * 2.0
            + (p.y * 0.02 + time * 1.5).cos() * 1.5
            + (time * 4.0 + p.x * 0.01).sin()
            + sample.displacement.abs() * 0.2
    } else {
        (p.x * 0.015 + time * 0.4).sin() * 0.3 + (p.y * 0.012 + time * 0.3).cos() * 0.2
    };
    (params.cell_stride + wobble).clamp(params.min_cell, params.max_cell)
}

pub fn shade_cell(
    cell: Cell,
    sample: FieldSample,
    morph: f32,
    band: f32,
    time: f32,
    grain: Grain,
    params: &RenderParams,
) -> CellPaint {
    let rippled = sample.has_effect;
    let d = sample.displacement;
    let below = cell.p.y - cell.boundary_y;
    let depth_span = cell.canvas_height - cell.boundary_y;
    let depth = if depth_span > 0.0 { below / depth_span } else { 0.0 };
    let noise = if rippled { morph } else { morph * 0.2 };

    let edge = (1.0 - below / EDGE_BAND_PX).max(0.0);
    let variation = if rippled {
        (grain.variation_unit - 0.5) * (10.0 + edge * 15.0)
    } else {
        0.0
    };

    let mut color = Vec3::new(
        5.0 + depth * 15.0 + noise * 10.0 + variation,
        15.0 + depth * 25.0 + noise * 15.0 + variation * 1.2,
        35.0 + depth * 50.0 + noise * 20.0 + variation * 1.5,
    ) + Vec3::from(BAND_TINT) * band;

    let static_gain = if rippled {
        0.8 + grain.static_unit * 0.4
    } else {
        color = color.max(CALM_FLOOR);
        0.95 + grain.static_unit * 0.1
    };
    color *= static_gain;

    if rippled {
        color = color.clamp(RIPPLED_MIN, RIPPLED_MAX);
        let strength = d.abs() / 20.0;
        color *= 1.0 + strength * 0.3;
        let grey = Vec3::splat((color.x + color.y + color.z) / 3.0);
        color = color.lerp(grey, RIPPLE_DESATURATION * strength.min(1.0));
        color = color.clamp(RIPPLED_MIN, BRIGHT_MAX);
    } else {
        color = color.clamp(CALM_MIN, CALM_MAX);
    }

    CellPaint {
        pos: displaced(cell.p, d),
        size: cell_size(cell.p, time, sample, params),
        color,
        alpha: cell.alpha,
    }
}
