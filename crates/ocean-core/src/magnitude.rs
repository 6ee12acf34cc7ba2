use crate::constants::DEGENERATE_MAGNITUDE;
use crate::PersonId;
use fnv::FnvHashMap;

/// Observed {min, max} event count across the whole dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnitudeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for MagnitudeRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl MagnitudeRange {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Map `value` into [0, 1]. A collapsed range resolves to the midpoint.
    pub fn normalize(&self, value: f64) -> f32 {
        let span = self.max - self.min;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return DEGENERATE_MAGNITUDE;
        }
        let n = ((value - self.min) / span) as f32;
        if n.is_nan() {
            return 0.0;
        }
        n.clamp(0.0, 1.0)
    }
}

/// Latest magnitude per person plus the global range used to normalize it.
#[derive(Clone, Debug, Default)]
pub struct MagnitudeBook {
    range: MagnitudeRange,
    current: FnvHashMap<PersonId, f64>,
}

impl MagnitudeBook {
    pub fn range(&self) -> MagnitudeRange {
        self.range
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.range = MagnitudeRange::new(min, max);
    }

    pub fn set(&mut self, person: PersonId, count: f64) {
        if count.is_finite() {
            self.current.insert(person, count.max(0.0));
        } else {
            self.current.remove(&person);
        }
    }

    pub fn forget(&mut self, person: PersonId) {
        self.current.remove(&person);
    }

    /// Raw count for `person`. Missing input sits at the range floor, so it
    /// sizes the smallest ripple whatever range the timeline reported.
    pub fn get(&self, person: PersonId) -> f64 {
        self.current
            .get(&person)
            .copied()
            .unwrap_or(self.range.min)
    }

    pub fn normalized(&self, person: PersonId) -> f32 {
        self.range.normalize(self.get(person))
    }
}
