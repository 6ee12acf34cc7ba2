// Host-side tests for the per-person emission lifecycle and idle wander.

use ocean_core::pool::pulse_interval_ms;
use ocean_core::{EmitterPool, IdleWander, Phase, Tunables, IDLE_PERSON};
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f32 = 1000.0;
const H: f32 = 800.0;

fn pool() -> (EmitterPool, Tunables) {
    let t = Tunables::default();
    (EmitterPool::new(W, H, &t), t)
}

#[test]
fn repeated_position_emits_once() {
    let (mut pool, t) = pool();
    let created: Vec<bool> = [50.0, 50.0, 50.0, 80.0]
        .iter()
        .enumerate()
        .map(|(i, raw)| pool.on_cursor_update(1, Some(*raw), i as f64 * 50.0, &t))
        .collect();
    assert_eq!(created, vec![true, false, false, true]);
    pool.advance(150.0, &t);
    assert_eq!(pool.emitters().len(), 2);
}

#[test]
fn unreported_magnitude_sizes_smallest_ripple() {
    let (mut pool, t) = pool();
    pool.on_cursor_update(1, Some(50.0), 0.0, &t);
    let ratio = pool.emitters()[0].max_radius() / pool.base_radius();
    assert!((ratio - 0.5).abs() < 1e-4, "ratio {ratio}");

    pool.magnitudes_mut().set_range(5.0, 20.0);
    pool.on_cursor_update(2, Some(150.0), 0.0, &t);
    let ratio = pool.emitters()[1].max_radius() / pool.base_radius();
    assert!((ratio - 0.5).abs() < 1e-4, "ratio {ratio}");
}

#[test]
fn small_jitter_is_not_movement() {
    let (mut pool, t) = pool();
    assert!(pool.on_cursor_update(1, Some(100.0), 0.0, &t));
    assert!(!pool.on_cursor_update(1, Some(104.9), 10.0, &t));
    assert!(pool.on_cursor_update(1, Some(105.5), 20.0, &t));
}

#[test]
fn absent_position_is_ignored() {
    let (mut pool, t) = pool();
    assert!(!pool.on_cursor_update(1, None, 0.0, &t));
    assert!(!pool.on_cursor_update(1, Some(f32::NAN), 0.0, &t));
    assert!(pool.emitters().is_empty());
    assert!(pool.slot(1).is_none());
}

#[test]
fn emitter_lands_at_mapped_x_on_emit_line() {
    let (mut pool, t) = pool();
    pool.set_emit_y(123.0);
    pool.on_cursor_update(1, Some(50.0), 0.0, &t);
    let origin = pool.emitters()[0].origin();
    // 50 of 0..200 -> 0.25, inverted -> 750 of 1000
    assert!((origin.x - 750.0).abs() < 1e-3);
    assert_eq!(origin.y, 123.0);
    let changes = pool.drain_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].person, 1);
    assert!((changes[0].screen.x - 750.0).abs() < 1e-3);
    assert!(pool.drain_changes().is_empty());
}

#[test]
fn settles_then_pulses_at_last_position() {
    let (mut pool, t) = pool();
    pool.on_cursor_update(1, Some(100.0), 0.0, &t);
    pool.advance(399.0, &t);
    assert!(matches!(pool.phase(1), Phase::Moving { .. }));

    pool.advance(400.0, &t);
    let interval = match pool.phase(1) {
        Phase::Pulsing { interval_ms, next_at } => {
            assert_eq!(next_at, 400.0 + interval_ms);
            interval_ms
        }
        other => panic!("expected pulsing, got {other:?}"),
    };
    assert!(pool.slot(1).map(|s| s.settled).unwrap_or(false));
    // settling itself does not emit
    assert_eq!(pool.emitters().len(), 1);

    // no magnitude reported -> minimal: 0.5x base (200) = 100px, 12.5 ticks at 20fps, x1.2
    assert!((interval - 750.0).abs() < 1e-6);
    assert!((interval - pulse_interval_ms(0.0, pool.base_radius(), &t)).abs() < 1e-9);

    pool.advance(400.0 + interval - 1.0, &t);
    assert_eq!(pool.emitters().len(), 1);
    pool.advance(400.0 + interval, &t);
    assert_eq!(pool.emitters().len(), 2);
    assert_eq!(pool.emitters()[1].origin(), pool.emitters()[0].origin());
}

#[test]
fn movement_cancels_pulsing() {
    let (mut pool, t) = pool();
    pool.on_cursor_update(1, Some(100.0), 0.0, &t);
    pool.advance(400.0, &t);
    assert!(matches!(pool.phase(1), Phase::Pulsing { .. }));
    pool.on_cursor_update(1, Some(150.0), 500.0, &t);
    assert_eq!(pool.phase(1), Phase::Moving { settle_at: 900.0 });
    // the old pulse deadline is gone
    pool.advance(800.0, &t);
    assert_eq!(pool.emitters().len(), 2);
}

#[test]
fn larger_magnitudes_pulse_less_often() {
    let (mut pool, t) = pool();
    pool.magnitudes_mut().set_range(0.0, 100.0);
    let quiet = pulse_interval_ms(0.0, pool.base_radius(), &t);
    let loud = pulse_interval_ms(1.0, pool.base_radius(), &t);
    assert!(quiet < loud);
}

#[test]
fn pool_keeps_only_the_newest() {
    let (mut pool, t) = pool();
    for i in 0..15 {
        pool.on_cursor_update(1, Some(i as f32 * 10.0), i as f64, &t);
    }
    assert_eq!(pool.emitters().len(), t.pool.max_emitters);
    // oldest five dropped; raw 50 -> x 750
    assert!((pool.emitters()[0].origin().x - 750.0).abs() < 1e-3);
}

#[test]
fn clear_person_is_idempotent() {
    let (mut pool, t) = pool();
    pool.on_cursor_update(1, Some(20.0), 0.0, &t);
    pool.on_cursor_update(1, Some(60.0), 10.0, &t);
    pool.on_cursor_update(2, Some(90.0), 10.0, &t);
    assert_eq!(pool.clear_person(1), 2);
    assert_eq!(pool.clear_person(1), 0);
    assert!(pool.slot(1).is_none());
    assert_eq!(pool.phase(1), Phase::Idle);
    assert_eq!(pool.emitters().len(), 1);
    assert_eq!(pool.emitters()[0].owner(), 2);
}

#[test]
fn stop_pulsing_keeps_emitters() {
    let (mut pool, t) = pool();
    pool.on_cursor_update(1, Some(20.0), 0.0, &t);
    pool.advance(400.0, &t);
    pool.stop_pulsing(1);
    pool.stop_pulsing(1);
    assert_eq!(pool.phase(1), Phase::Idle);
    pool.advance(1e9, &t);
    assert_eq!(pool.emitters().len(), 1);
}

#[test]
fn emit_now_needs_a_known_position() {
    let (mut pool, t) = pool();
    assert!(!pool.emit_now(3, &t));
    pool.on_cursor_update(3, Some(10.0), 0.0, &t);
    assert!(pool.emit_now(3, &t));
    assert_eq!(pool.emitters().len(), 2);
}

#[test]
fn pulses_follow_a_moved_emit_line() {
    let (mut pool, t) = pool();
    pool.set_emit_y(300.0);
    pool.on_cursor_update(1, Some(50.0), 0.0, &t);
    pool.set_emit_y(120.0);
    assert!(pool.emit_now(1, &t));
    let fresh = pool.emitters()[1].origin();
    assert_eq!(fresh.y, 120.0);
    assert_eq!(fresh.x, pool.emitters()[0].origin().x);
    assert_eq!(pool.slot(1).and_then(|s| s.last_emit).map(|p| p.y), Some(120.0));
}

#[test]
fn placement_commits_after_delay_then_pulses() {
    let (mut pool, t) = pool();
    pool.place(IDLE_PERSON, 100.0, 0.0, &t);
    assert!(pool.emitters().is_empty());
    assert_eq!(pool.drain_changes().len(), 1);
    pool.advance(199.0, &t);
    assert!(pool.emitters().is_empty());
    pool.advance(200.0, &t);
    assert_eq!(pool.emitters().len(), 1);
    assert!(matches!(pool.phase(IDLE_PERSON), Phase::Pulsing { .. }));
}

#[test]
fn tick_drops_retired_emitters() {
    let (mut pool, t) = pool();
    pool.on_cursor_update(1, Some(20.0), 0.0, &t);
    let mut dropped = 0;
    for _ in 0..1000 {
        dropped += pool.tick_emitters();
    }
    assert_eq!(dropped, 1);
    assert!(pool.emitters().is_empty());
}

#[test]
fn timeline_span_drives_mapping() {
    let (mut pool, t) = pool();
    pool.set_timeline_span(Some((100.0, 400.0)));
    pool.on_cursor_update(1, Some(200.0), 0.0, &t);
    assert!((pool.emitters()[0].origin().x - 100.0).abs() < 1e-3);
    pool.set_timeline_span(None);
    pool.on_cursor_update(1, Some(0.0), 10.0, &t);
    assert!((pool.emitters()[1].origin().x - W).abs() < 1e-3);
}

#[test]
fn wander_waits_then_repeats() {
    let t = Tunables::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut wander = IdleWander::default();
    assert!(wander.poll(0.0, &t.pool, &mut rng).is_none());
    assert!(wander.poll(1999.0, &t.pool, &mut rng).is_none());
    let raw = wander.poll(2000.0, &t.pool, &mut rng);
    assert!(raw.is_some_and(|r| (0.0..200.0).contains(&r)));
    assert!(wander.poll(2001.0, &t.pool, &mut rng).is_none());
    assert!(wander.poll(12_000.0, &t.pool, &mut rng).is_some());
}

#[test]
fn wander_stops_and_resumes_immediately() {
    let t = Tunables::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut wander = IdleWander::default();
    wander.stop();
    assert!(!wander.is_active());
    assert!(wander.poll(50_000.0, &t.pool, &mut rng).is_none());
    wander.resume(60_000.0);
    assert!(wander.poll(60_000.0, &t.pool, &mut rng).is_some());
}
