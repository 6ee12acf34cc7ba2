//! Clock and frame pacing shared by the web and native front ends.

/// Simulation time. Both values advance by fixed steps per accepted frame,
/// never by wall-clock delta.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    pub time: f32,
    pub wave_offset: f32,
}

impl SimClock {
    pub fn step(&mut self, time_step: f32, wave_offset_step: f32) {
        self.time += time_step;
        self.wave_offset += wave_offset_step;
    }
}

/// Drops host callbacks that arrive before the frame interval has elapsed.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    last_ms: Option<f64>,
    accepted: u64,
}

impl FrameGate {
    /// True if a frame may be produced at `now_ms`; records it when so.
    pub fn accept(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        self.accepted += 1;
        true
    }

    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
