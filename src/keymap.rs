// Pure key -> action mapping for the debug keys. No web_sys here.

use crate::constants::{
    INTENSITY_MAX, INTENSITY_MIN, INTENSITY_STEP, RING_COUNT_MAX, RING_COUNT_MIN,
    RING_COUNT_STEP, SPEED_MAX, SPEED_MIN, SPEED_STEP,
};
use ocean_core::Tunables;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    RingCount(i32),
    Speed(f32),
    Intensity(f32),
    ClearAll,
    ToggleDebug,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "[" => Some(KeyAction::RingCount(-RING_COUNT_STEP)),
        "]" => Some(KeyAction::RingCount(RING_COUNT_STEP)),
        "-" | "_" => Some(KeyAction::Speed(-SPEED_STEP)),
        "=" | "+" => Some(KeyAction::Speed(SPEED_STEP)),
        "," | "<" => Some(KeyAction::Intensity(-INTENSITY_STEP)),
        "." | ">" => Some(KeyAction::Intensity(INTENSITY_STEP)),
        "c" | "C" => Some(KeyAction::ClearAll),
        "d" | "D" => Some(KeyAction::ToggleDebug),
        _ => None,
    }
}

/// Apply a tunable step, clamped to the allowed range. Returns false for
/// actions that do not touch tunables.
pub fn apply_step(t: &mut Tunables, action: KeyAction) -> bool {
    match action {
        KeyAction::RingCount(delta) => {
            let next = t.ripple.ring_count as i64 + delta as i64;
            t.ripple.ring_count = (next.max(0) as usize).clamp(RING_COUNT_MIN, RING_COUNT_MAX);
            true
        }
        KeyAction::Speed(delta) => {
            t.ripple.expansion_speed = (t.ripple.expansion_speed + delta).clamp(SPEED_MIN, SPEED_MAX);
            true
        }
        KeyAction::Intensity(delta) => {
            t.ripple.wave_intensity =
                (t.ripple.wave_intensity + delta).clamp(INTENSITY_MIN, INTENSITY_MAX);
            true
        }
        KeyAction::ClearAll | KeyAction::ToggleDebug => false,
    }
}
