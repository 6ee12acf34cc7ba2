//! Emitter pool and per-person emission lifecycle.
//!
//! Each tracked person owns one slot with a small state machine:
//!
//! ```text
//!   Idle --move--> Moving --settle delay--> Pulsing --interval--> Pulsing ...
//!     \                                        ^
//!      \--place--> SettlePending --commit------/
//! ```
//!
//! Any movement re-enters `Moving`, which replaces whatever timer the slot had.
//! Timers are plain deadlines in milliseconds; replacing or dropping the phase
//! cancels them, so cancelling twice is harmless.

use crate::emitter::{Emitter, Spawn};
use crate::magnitude::MagnitudeBook;
use crate::mapping::ScreenMapping;
use crate::params::Tunables;
use crate::PersonId;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    /// Recently moved; settles at `settle_at` unless moved again.
    Moving { settle_at: f64 },
    /// Placed directly; first emission waits for the position to commit upstream.
    SettlePending { emit_at: f64 },
    Pulsing { interval_ms: f64, next_at: f64 },
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Moving { .. } => "moving",
            Phase::SettlePending { .. } => "settle-pending",
            Phase::Pulsing { .. } => "pulsing",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PersonSlot {
    pub last_raw: Option<f32>,
    pub last_emit: Option<Vec2>,
    pub settled: bool,
    pub phase: Phase,
}

impl Default for PersonSlot {
    fn default() -> Self {
        Self {
            last_raw: None,
            last_emit: None,
            settled: false,
            phase: Phase::Idle,
        }
    }
}

/// Reported once per confirmed position change so the timeline can follow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionChange {
    pub person: PersonId,
    pub raw: f32,
    pub screen: Vec2,
}

pub struct EmitterPool {
    emitters: SmallVec<[Emitter; 16]>,
    slots: FnvHashMap<PersonId, PersonSlot>,
    magnitudes: MagnitudeBook,
    mapping: ScreenMapping,
    canvas_width: f32,
    timeline_span: Option<(f32, f32)>,
    emit_y: f32,
    base_radius: f32,
    changes: SmallVec<[PositionChange; 4]>,
}

impl EmitterPool {
    pub fn new(canvas_width: f32, canvas_height: f32, t: &Tunables) -> Self {
        let mut pool = Self {
            emitters: SmallVec::new(),
            slots: FnvHashMap::default(),
            magnitudes: MagnitudeBook::default(),
            mapping: ScreenMapping::new(t.pool.input_range, t.pool.sensitivity, canvas_width),
            canvas_width,
            timeline_span: None,
            emit_y: canvas_height * 0.5,
            base_radius: 0.0,
            changes: SmallVec::new(),
        };
        pool.set_canvas(canvas_width, canvas_height, t);
        pool
    }

    /// Refresh everything derived from canvas size or tunables.
    pub fn set_canvas(&mut self, canvas_width: f32, canvas_height: f32, t: &Tunables) {
        self.canvas_width = canvas_width;
        self.base_radius = t.ripple.base_radius(canvas_height);
        self.mapping.input_min = t.pool.input_range[0];
        self.mapping.input_max = t.pool.input_range[1];
        self.mapping.sensitivity = t.pool.sensitivity;
        self.apply_span();
    }

    /// Timeline data area as (left, width); `None` falls back to the full canvas.
    pub fn set_timeline_span(&mut self, span: Option<(f32, f32)>) {
        self.timeline_span = span.filter(|(x, w)| x.is_finite() && w.is_finite() && *w > 0.0);
        self.apply_span();
    }

    fn apply_span(&mut self) {
        let (origin, width) = self.timeline_span.unwrap_or((0.0, self.canvas_width));
        self.mapping.set_span(origin, width);
    }

    /// Y coordinate new emitters are created on.
    pub fn set_emit_y(&mut self, y: f32) {
        self.emit_y = y;
    }

    pub fn emit_y(&self) -> f32 {
        self.emit_y
    }

    pub fn mapping(&self) -> &ScreenMapping {
        &self.mapping
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn magnitudes(&self) -> &MagnitudeBook {
        &self.magnitudes
    }

    pub fn magnitudes_mut(&mut self) -> &mut MagnitudeBook {
        &mut self.magnitudes
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn slot(&self, person: PersonId) -> Option<&PersonSlot> {
        self.slots.get(&person)
    }

    pub fn phase(&self, person: PersonId) -> Phase {
        self.slots.get(&person).map(|s| s.phase).unwrap_or(Phase::Idle)
    }

    /// Ids of every person with a slot, sorted.
    pub fn persons(&self) -> SmallVec<[PersonId; 4]> {
        let mut ids: SmallVec<[PersonId; 4]> = self.slots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// True if any slot other than `except` holds a position.
    pub fn has_tracked_person(&self, except: PersonId) -> bool {
        self.slots
            .iter()
            .any(|(id, slot)| *id != except && slot.last_raw.is_some())
    }

    pub fn drain_changes(&mut self) -> SmallVec<[PositionChange; 4]> {
        std::mem::take(&mut self.changes)
    }

    /// Feed one smoothed position. Returns true when it counted as movement
    /// and an emitter was created.
    pub fn on_cursor_update(
        &mut self,
        person: PersonId,
        raw: Option<f32>,
        now_ms: f64,
        t: &Tunables,
    ) -> bool {
        let Some(raw) = raw.filter(|r| r.is_finite()) else {
            return false;
        };
        let origin = Vec2::new(self.mapping.to_screen_x(raw), self.emit_y);
        let slot = self.slots.entry(person).or_default();
        let moved = match slot.last_raw {
            None => true,
            Some(prev) => (raw - prev).abs() > t.pool.movement_threshold,
        };
        if !moved {
            return false;
        }
        slot.last_raw = Some(raw);
        slot.last_emit = Some(origin);
        slot.settled = false;
        slot.phase = Phase::Moving {
            settle_at: now_ms + t.pool.settle_delay_ms,
        };
        self.changes.push(PositionChange {
            person,
            raw,
            screen: origin,
        });
        log::debug!("[pool] person {person} moved to raw={raw:.1} x={:.1}", origin.x);
        self.emit_at(person, origin, 0, t);
        true
    }

    /// Jump straight to `raw` without a settle wait. The first emission is
    /// deferred by the commit delay, then the slot pulses.
    pub fn place(&mut self, person: PersonId, raw: f32, now_ms: f64, t: &Tunables) {
        if !raw.is_finite() {
            return;
        }
        let origin = Vec2::new(self.mapping.to_screen_x(raw), self.emit_y);
        let slot = self.slots.entry(person).or_default();
        slot.last_raw = Some(raw);
        slot.last_emit = Some(origin);
        slot.settled = true;
        slot.phase = Phase::SettlePending {
            emit_at: now_ms + t.pool.commit_delay_ms,
        };
        self.changes.push(PositionChange {
            person,
            raw,
            screen: origin,
        });
        log::debug!("[pool] person {person} placed at raw={raw:.1}");
    }

    /// Fire any settle, commit or pulse deadline that has passed.
    pub fn advance(&mut self, now_ms: f64, t: &Tunables) {
        let mut fire: SmallVec<[PersonId; 4]> = SmallVec::new();
        for (id, slot) in self.slots.iter_mut() {
            match slot.phase {
                Phase::Moving { settle_at } if now_ms >= settle_at => {
                    let interval_ms = pulse_interval_ms(
                        self.magnitudes.normalized(*id),
                        self.base_radius,
                        t,
                    );
                    slot.settled = true;
                    slot.phase = Phase::Pulsing {
                        interval_ms,
                        next_at: now_ms + interval_ms,
                    };
                    log::debug!("[pool] person {id} settled, pulsing every {interval_ms:.0}ms");
                }
                Phase::SettlePending { emit_at } if now_ms >= emit_at => {
                    let interval_ms = pulse_interval_ms(
                        self.magnitudes.normalized(*id),
                        self.base_radius,
                        t,
                    );
                    slot.phase = Phase::Pulsing {
                        interval_ms,
                        next_at: now_ms + interval_ms,
                    };
                    fire.push(*id);
                }
                Phase::Pulsing {
                    interval_ms,
                    next_at,
                } if now_ms >= next_at => {
                    slot.phase = Phase::Pulsing {
                        interval_ms,
                        next_at: now_ms + interval_ms,
                    };
                    fire.push(*id);
                }
                _ => {}
            }
        }
        fire.sort_unstable();
        for id in fire {
            self.emit_now(id, t);
        }
    }

    /// Create one emitter at the person's last-used x, on the current emit line.
    pub fn emit_now(&mut self, person: PersonId, t: &Tunables) -> bool {
        let emit_y = self.emit_y;
        let Some(origin) = self
            .slots
            .get_mut(&person)
            .and_then(|s| s.last_emit.as_mut())
            .map(|p| {
                p.y = emit_y;
                *p
            })
        else {
            return false;
        };
        self.emit_at(person, origin, 0, t);
        true
    }

    fn emit_at(&mut self, person: PersonId, origin: Vec2, delay: u32, t: &Tunables) {
        self.spawn(
            Spawn {
                origin,
                activation_delay: delay,
                magnitude: self.magnitudes.get(person),
                owner: person,
            },
            t,
        );
    }

    /// Add an emitter, dropping the oldest ones beyond `max_emitters`.
    pub fn spawn(&mut self, spawn: Spawn, t: &Tunables) {
        let emitter = Emitter::new(
            spawn,
            &self.magnitudes.range(),
            self.base_radius,
            &t.ripple,
        );
        self.emitters.push(emitter);
        let excess = self.emitters.len().saturating_sub(t.pool.max_emitters);
        if excess > 0 {
            self.emitters.drain(..excess);
        }
    }

    /// Cancel the person's settle or pulse timer; emitters keep decaying.
    pub fn stop_pulsing(&mut self, person: PersonId) {
        if let Some(slot) = self.slots.get_mut(&person) {
            slot.phase = Phase::Idle;
        }
    }

    /// Drop the person's slot, magnitude and emitters. Returns how many
    /// emitters were removed; a second call is a no-op returning 0.
    pub fn clear_person(&mut self, person: PersonId) -> usize {
        let had_slot = self.slots.remove(&person).is_some();
        self.magnitudes.forget(person);
        let before = self.emitters.len();
        self.emitters.retain(|e| e.owner() != person);
        let removed = before - self.emitters.len();
        if had_slot || removed > 0 {
            log::info!("[pool] cleared person {person} ({removed} emitters)");
        }
        removed
    }

    pub fn clear_all(&mut self) {
        for id in self.persons() {
            self.clear_person(id);
        }
        self.emitters.clear();
    }

    /// Age every emitter one tick and drop the retired ones.
    pub fn tick_emitters(&mut self) -> usize {
        for e in self.emitters.iter_mut() {
            e.tick();
        }
        let before = self.emitters.len();
        self.emitters.retain(|e| e.is_live());
        before - self.emitters.len()
    }
}

/// Wall-clock lifetime of an emitter at this magnitude, with a small lead so
/// the next pulse starts just after the previous one fades.
pub fn pulse_interval_ms(normalized: f32, base_radius: f32, t: &Tunables) -> f64 {
    let curved = t.ripple.curve(normalized);
    let max_radius = t.ripple.max_radius(curved, base_radius);
    let ticks = t.ripple.ticks_to_max(max_radius).max(1.0) as f64;
    ticks * t.render.frame_interval_ms() * t.pool.pulse_lead
}
