// Seeded stand-in for the bar-chart timeline: one event count per month.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SyntheticTimeline {
    counts: Vec<u32>,
}

impl SyntheticTimeline {
    /// A few busy stretches over a quiet baseline, so both small and large
    /// ripples show up while scrubbing.
    pub fn new(seed: u64, buckets: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let buckets = buckets.max(1);
        let peaks: Vec<(f32, f32)> = (0..3)
            .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(40.0..160.0)))
            .collect();
        let counts = (0..buckets)
            .map(|i| {
                let t = i as f32 / buckets as f32;
                let busy: f32 = peaks
                    .iter()
                    .map(|(at, height)| height * (-((t - at) * 12.0).powi(2)).exp())
                    .sum();
                (busy + rng.gen_range(0.0..8.0)).round() as u32
            })
            .collect();
        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Bucket under a raw tracking position. Larger raw values sit further
    /// left on screen, which is earlier in the timeline.
    pub fn bucket_for(&self, raw: f32, input_range: [f32; 2]) -> usize {
        let [lo, hi] = input_range;
        let u = if hi > lo && raw.is_finite() {
            ((raw - lo) / (hi - lo)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let from_left = 1.0 - u;
        ((from_left * self.counts.len() as f32) as usize).min(self.counts.len() - 1)
    }

    pub fn count_at(&self, raw: f32, input_range: [f32; 2]) -> u32 {
        self.counts[self.bucket_for(raw, input_range)]
    }

    pub fn min_max(&self) -> (u32, u32) {
        let min = self.counts.iter().copied().min().unwrap_or(0);
        let max = self.counts.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}
