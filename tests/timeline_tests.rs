// Host-side tests for the native front end's synthetic timeline.

#![allow(dead_code)]
mod timeline {
    include!("../crates/ocean-native/src/timeline.rs");
}

use timeline::SyntheticTimeline;

const RANGE: [f32; 2] = [0.0, 200.0];

#[test]
fn same_seed_same_counts() {
    let a = SyntheticTimeline::new(11, 48);
    let b = SyntheticTimeline::new(11, 48);
    for i in 0..=200 {
        let raw = i as f32;
        assert_eq!(a.count_at(raw, RANGE), b.count_at(raw, RANGE));
    }
    assert_eq!(a.min_max(), b.min_max());
}

#[test]
fn raw_ends_map_to_outer_buckets() {
    let t = SyntheticTimeline::new(3, 48);
    assert_eq!(t.len(), 48);
    assert_eq!(t.bucket_for(200.0, RANGE), 0);
    assert_eq!(t.bucket_for(0.0, RANGE), 47);
    assert_eq!(t.bucket_for(-20.0, RANGE), 47);
    assert_eq!(t.bucket_for(f32::NAN, RANGE), 24);
}

#[test]
fn counts_vary_across_the_timeline() {
    let t = SyntheticTimeline::new(5, 48);
    let (min, max) = t.min_max();
    assert!(max > min);
}

#[test]
fn zero_buckets_still_has_one() {
    let t = SyntheticTimeline::new(1, 0);
    assert_eq!(t.len(), 1);
    assert_eq!(t.bucket_for(100.0, RANGE), 0);
}
