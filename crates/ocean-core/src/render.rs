//! Frame compositor and the simulation context that owns everything.
//!
//! Collaborators push `InputEvent`s at any time; they are queued and applied at
//! the start of the next accepted frame. Within a frame the order is fixed:
//! inputs and timers, emitter aging, then drawing.

use crate::canvas::PixelCanvas;
use crate::emitter::Emitter;
use crate::error::Result;
use crate::field::FieldSampler;
use crate::params::{OceanConfig, Tunables};
use crate::pool::{EmitterPool, PositionChange};
use crate::shade::{edge_alpha, shade_cell, Cell, Grain};
use crate::state::{FrameGate, SimClock};
use crate::wander::{IdleWander, IDLE_PERSON};
use crate::PersonId;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Smoothed position from the tracking feed; `None` while nobody is seen.
    Cursor { person: PersonId, raw: Option<f32> },
    PersonLost { person: PersonId },
    Magnitude { person: PersonId, count: f64 },
    MagnitudeRange { min: f64, max: f64 },
    /// Timeline x-axis level and data span (left, width), each optional.
    Layout {
        horizon_y: Option<f32>,
        timeline_span: Option<(f32, f32)>,
    },
    ClearPerson { person: PersonId },
    ClearAll,
}

pub type PositionListener = Box<dyn FnMut(&PositionChange)>;

pub struct Ocean {
    canvas: PixelCanvas,
    tunables: Tunables,
    pool: EmitterPool,
    wander: IdleWander,
    clock: SimClock,
    gate: FrameGate,
    inbox: VecDeque<InputEvent>,
    rng: StdRng,
    horizon_hint: Option<f32>,
    boundary: Vec<f32>,
    listener: Option<PositionListener>,
}

impl Ocean {
    pub fn new(config: OceanConfig) -> Result<Self> {
        config.tunables.validate()?;
        let canvas = PixelCanvas::new(config.width, config.height)?;
        let (w, h) = (config.width as f32, config.height as f32);
        let pool = EmitterPool::new(w, h, &config.tunables);
        let mut ocean = Self {
            canvas,
            tunables: config.tunables,
            pool,
            wander: IdleWander::default(),
            clock: SimClock::default(),
            gate: FrameGate::default(),
            inbox: VecDeque::new(),
            rng: StdRng::seed_from_u64(config.seed),
            horizon_hint: None,
            boundary: Vec::new(),
            listener: None,
        };
        ocean.refresh_layout();
        log::info!("[ocean] ready {}x{}", config.width, config.height);
        Ok(ocean)
    }

    pub fn push(&mut self, event: InputEvent) {
        self.inbox.push_back(event);
    }

    pub fn set_position_listener(&mut self, listener: PositionListener) {
        self.listener = Some(listener);
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Replace the tunables. Rejected sets leave the current ones in place.
    pub fn set_tunables(&mut self, tunables: Tunables) -> Result<()> {
        tunables.validate()?;
        self.tunables = tunables;
        self.gate.reset();
        self.refresh_layout();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas.resize(width, height)?;
        self.refresh_layout();
        log::info!("[ocean] resized to {width}x{height}");
        Ok(())
    }

    pub fn pool(&self) -> &EmitterPool {
        &self.pool
    }

    pub fn emitters(&self) -> &[Emitter] {
        self.pool.emitters()
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn frames(&self) -> u64 {
        self.gate.accepted()
    }

    pub fn wander(&self) -> &IdleWander {
        &self.wander
    }

    /// Timeline x-axis level, clamped into the visible band.
    pub fn horizon_y(&self) -> f32 {
        let h = self.canvas.height() as f32;
        let r = &self.tunables.render;
        let y = self
            .horizon_hint
            .filter(|y| y.is_finite())
            .unwrap_or(h * r.horizon_default);
        let lo = h * r.horizon_min;
        let hi = (h - r.horizon_bottom_margin).max(lo);
        y.clamp(lo, hi)
    }

    fn refresh_layout(&mut self) {
        let (w, h) = (self.canvas.width() as f32, self.canvas.height() as f32);
        self.pool.set_canvas(w, h, &self.tunables);
        let emit_y = self.horizon_y() - self.tunables.pool.wave_top_offset;
        self.pool.set_emit_y(emit_y);
    }

    /// Produce one frame if the frame interval has elapsed. Returns whether the
    /// canvas was redrawn.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self
            .gate
            .accept(now_ms, self.tunables.render.frame_interval_ms())
        {
            return false;
        }
        self.canvas.fill(self.tunables.render.deep_ocean);
        self.process_inputs(now_ms);
        self.pool.tick_emitters();

        let horizon = self.horizon_y();
        self.compute_boundary(horizon);
        self.draw_sky(horizon);
        self.draw_separation_band();
        self.draw_ocean(horizon);

        self.clock.step(
            self.tunables.render.time_step,
            self.tunables.render.wave_offset_step,
        );
        true
    }

    fn process_inputs(&mut self, now_ms: f64) {
        while let Some(event) = self.inbox.pop_front() {
            self.apply(event, now_ms);
        }
        if let Some(raw) = self.wander.poll(now_ms, &self.tunables.pool, &mut self.rng) {
            log::debug!("[ocean] idle wander to raw={raw:.1}");
            self.pool.place(IDLE_PERSON, raw, now_ms, &self.tunables);
        }
        self.pool.advance(now_ms, &self.tunables);
        let changes = self.pool.drain_changes();
        if let Some(listener) = self.listener.as_mut() {
            for change in &changes {
                listener(change);
            }
        }
    }

    fn apply(&mut self, event: InputEvent, now_ms: f64) {
        match event {
            InputEvent::Cursor { person, .. } if person == IDLE_PERSON => {
                log::warn!("[ocean] ignoring cursor for reserved idle id {person}");
            }
            InputEvent::Cursor { person, raw } => {
                let present = raw.is_some_and(f32::is_finite);
                if present && self.wander.is_active() {
                    self.wander.stop();
                    self.pool.clear_person(IDLE_PERSON);
                }
                self.pool
                    .on_cursor_update(person, raw, now_ms, &self.tunables);
            }
            InputEvent::PersonLost { person } => {
                self.pool.clear_person(person);
                self.resume_wander_if_untracked(now_ms);
            }
            InputEvent::Magnitude { person, count } => {
                self.pool.magnitudes_mut().set(person, count);
            }
            InputEvent::MagnitudeRange { min, max } => {
                self.pool.magnitudes_mut().set_range(min, max);
            }
            InputEvent::Layout {
                horizon_y,
                timeline_span,
            } => {
                self.horizon_hint = horizon_y;
                self.pool.set_timeline_span(timeline_span);
                self.refresh_layout();
            }
            InputEvent::ClearPerson { person } => {
                self.pool.clear_person(person);
            }
            InputEvent::ClearAll => {
                self.pool.clear_all();
                self.resume_wander_if_untracked(now_ms);
            }
        }
    }

    fn resume_wander_if_untracked(&mut self, now_ms: f64) {
        if !self.pool.has_tracked_person(IDLE_PERSON) {
            self.wander.resume(now_ms);
        }
    }

    fn compute_boundary(&mut self, horizon: f32) {
        let stride = self.tunables.render.cell_stride;
        let columns = (self.canvas.width() as f32 / stride).ceil() as usize;
        self.boundary.clear();
        for i in 0..columns {
            let x = i as f32 * stride;
            let jitter = self.rng.gen::<f32>() - 0.5;
            self.boundary.push(crate::field::boundary_y(
                &self.tunables.field,
                x,
                self.clock.wave_offset,
                horizon,
                jitter,
            ));
        }
    }

    fn draw_sky(&mut self, horizon: f32) {
        let r = &self.tunables.render;
        self.canvas
            .fill_vertical_gradient(0.0, horizon, r.sky_top, r.sky_horizon);
    }

    /// Soft strip under the boundary so the sky does not butt straight into
    /// the grid.
    fn draw_separation_band(&mut self) {
        let r = &self.tunables.render;
        let (stride, band, color) = (r.cell_stride, r.separation_band, r.band_color);
        for (i, &y) in self.boundary.iter().enumerate() {
            let x = i as f32 * stride;
            self.canvas.fill_rect(x, y - band * 0.5, stride, band * 1.5, color, 0.6);
            self.canvas.fill_rect(x, y + band, stride, band, color, 0.3);
        }
    }

    fn draw_ocean(&mut self, horizon: f32) {
        let render = &self.tunables.render;
        let height = self.canvas.height() as f32;
        let bottom = height.min(horizon + render.ocean_depth);
        let fade_px = render.cell_stride * render.anti_alias_cells;
        let step = render.cell_stride * 0.5;
        let sampler = FieldSampler::new(
            self.pool.emitters(),
            &self.tunables.ripple,
            &self.tunables.field,
            self.clock,
        );
        for (i, &boundary_y) in self.boundary.iter().enumerate() {
            let x = i as f32 * render.cell_stride;
            let mut y = boundary_y - fade_px;
            while y < bottom {
                let alpha = edge_alpha(y, boundary_y, fade_px);
                if alpha > render.alpha_skip {
                    let p = Vec2::new(x, y);
                    let sample = sampler.sample_at(p);
                    let grain = Grain {
                        static_unit: self.rng.gen(),
                        variation_unit: self.rng.gen(),
                    };
                    let paint = shade_cell(
                        Cell {
                            p,
                            boundary_y,
                            canvas_height: height,
                            alpha,
                        },
                        sample,
                        sampler.morph(p),
                        sampler.band(p),
                        self.clock.time,
                        grain,
                        render,
                    );
                    self.canvas.fill_rect(
                        paint.pos.x,
                        paint.pos.y,
                        paint.size,
                        paint.size,
                        paint.color,
                        paint.alpha,
                    );
                }
                y += step;
            }
        }
    }
}
