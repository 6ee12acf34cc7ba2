// Host-side tests for the debug key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod keymap {
    include!("../src/keymap.rs");
}

use constants::*;
use keymap::{action_for_key, apply_step, KeyAction};
use ocean_core::Tunables;

#[test]
fn bracket_keys_step_ring_count() {
    assert_eq!(action_for_key("["), Some(KeyAction::RingCount(-1)));
    assert_eq!(action_for_key("]"), Some(KeyAction::RingCount(1)));
}

#[test]
fn shifted_variants_share_actions() {
    for (a, b) in [("-", "_"), ("=", "+"), (",", "<"), (".", ">"), ("c", "C"), ("d", "D")] {
        assert_eq!(action_for_key(a), action_for_key(b), "{a} vs {b}");
        assert!(action_for_key(a).is_some());
    }
}

#[test]
fn unknown_keys_do_nothing() {
    for key in ["a", "x", "1", "Enter", " ", ""] {
        assert_eq!(action_for_key(key), None, "{key:?}");
    }
}

#[test]
fn ring_count_clamps_at_limits() {
    let mut t = Tunables::default();
    for _ in 0..100 {
        apply_step(&mut t, KeyAction::RingCount(-RING_COUNT_STEP));
    }
    assert_eq!(t.ripple.ring_count, RING_COUNT_MIN);
    for _ in 0..100 {
        apply_step(&mut t, KeyAction::RingCount(RING_COUNT_STEP));
    }
    assert_eq!(t.ripple.ring_count, RING_COUNT_MAX);
}

#[test]
fn speed_and_intensity_clamp() {
    let mut t = Tunables::default();
    let speed = t.ripple.expansion_speed;
    assert!(apply_step(&mut t, KeyAction::Speed(SPEED_STEP)));
    assert_eq!(t.ripple.expansion_speed, speed + SPEED_STEP);
    for _ in 0..200 {
        apply_step(&mut t, KeyAction::Speed(-SPEED_STEP));
        apply_step(&mut t, KeyAction::Intensity(INTENSITY_STEP));
    }
    assert_eq!(t.ripple.expansion_speed, SPEED_MIN);
    assert_eq!(t.ripple.wave_intensity, INTENSITY_MAX);
    assert!(t.validate().is_ok());
}

#[test]
fn non_tunable_actions_leave_tunables_alone() {
    let mut t = Tunables::default();
    assert!(!apply_step(&mut t, KeyAction::ClearAll));
    assert!(!apply_step(&mut t, KeyAction::ToggleDebug));
    assert_eq!(t, Tunables::default());
}
