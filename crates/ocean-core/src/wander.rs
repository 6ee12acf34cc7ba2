//! Idle wander: while nobody is tracked, pick a random position every so often
//! so the surface never goes fully still.

use crate::params::PoolParams;
use rand::Rng;

/// Person slot the wander drives. Reserved: the tracking feed never gets it,
/// so any real id, 0 included, counts as a tracked person.
pub const IDLE_PERSON: crate::PersonId = crate::PersonId::MAX;

#[derive(Clone, Debug)]
pub struct IdleWander {
    active: bool,
    due_at: Option<f64>,
}

impl Default for IdleWander {
    fn default() -> Self {
        Self {
            active: true,
            due_at: None,
        }
    }
}

impl IdleWander {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn due_at(&self) -> Option<f64> {
        self.due_at
    }

    /// A real person showed up.
    pub fn stop(&mut self) {
        if self.active {
            log::info!("[wander] stopped, tracking a person");
        }
        self.active = false;
        self.due_at = None;
    }

    /// Everyone left: pick a new position right away.
    pub fn resume(&mut self, now_ms: f64) {
        if !self.active {
            log::info!("[wander] resumed");
            self.active = true;
            self.due_at = Some(now_ms);
        }
    }

    /// Returns a raw position when one is due. The first pick waits out the
    /// startup delay measured from the first poll.
    pub fn poll<R: Rng>(&mut self, now_ms: f64, params: &PoolParams, rng: &mut R) -> Option<f32> {
        if !self.active {
            return None;
        }
        let due = *self
            .due_at
            .get_or_insert(now_ms + params.idle_startup_delay_ms);
        if now_ms < due {
            return None;
        }
        self.due_at = Some(now_ms + params.idle_interval_ms);
        let [lo, hi] = params.input_range;
        Some(if hi > lo { rng.gen_range(lo..hi) } else { lo })
    }
}
