// Host-side tests for emitter sizing, aging and ring sampling.

use glam::Vec2;
use ocean_core::{Emitter, MagnitudeBook, MagnitudeRange, RippleParams, Spawn};

fn spawn(magnitude: f64) -> Spawn {
    Spawn {
        origin: Vec2::new(500.0, 100.0),
        activation_delay: 0,
        magnitude,
        owner: 1,
    }
}

fn emitter(magnitude: f64, range: MagnitudeRange, canvas_height: f32) -> Emitter {
    let params = RippleParams::default();
    Emitter::new(
        spawn(magnitude),
        &range,
        params.base_radius(canvas_height),
        &params,
    )
}

#[test]
fn max_radius_spans_half_to_five_times_base() {
    let range = MagnitudeRange::new(0.0, 10.0);
    let base = RippleParams::default().base_radius(800.0);
    let quiet = emitter(0.0, range, 800.0);
    let loud = emitter(10.0, range, 800.0);
    assert!((quiet.max_radius() - base * 0.5).abs() < 1e-3);
    assert!((loud.max_radius() - base * 5.0).abs() < 1e-3);
}

#[test]
fn out_of_range_magnitudes_clamp() {
    let range = MagnitudeRange::new(2.0, 10.0);
    let base = RippleParams::default().base_radius(800.0);
    assert!((emitter(-5.0, range, 800.0).max_radius() - base * 0.5).abs() < 1e-3);
    assert!((emitter(1e6, range, 800.0).max_radius() - base * 5.0).abs() < 1e-3);
}

#[test]
fn collapsed_range_uses_midpoint() {
    let range = MagnitudeRange::new(5.0, 5.0);
    assert_eq!(range.normalize(5.0), 0.5);
    assert_eq!(range.normalize(123.0), 0.5);
    // midpoint squared is 0.25 -> 0.5 + 0.25 * 4.5 = 1.625 of base
    let base = RippleParams::default().base_radius(800.0);
    let e = emitter(5.0, range, 800.0);
    assert!((e.max_radius() - base * 1.625).abs() < 1e-3);
}

#[test]
fn inverted_range_is_swapped() {
    let range = MagnitudeRange::new(10.0, 0.0);
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 10.0);
    assert!((range.normalize(5.0) - 0.5).abs() < 1e-6);
}

#[test]
fn missing_magnitude_sits_at_range_floor() {
    let mut book = MagnitudeBook::default();
    assert_eq!(book.normalized(7), 0.0);
    book.set_range(2.0, 10.0);
    assert_eq!(book.get(7), 2.0);
    book.set(7, 4.0);
    assert_eq!(book.get(7), 4.0);
    book.set(7, f64::NAN);
    assert_eq!(book.get(7), 2.0);
    assert_eq!(book.normalized(7), 0.0);
}

#[test]
fn retires_once_leading_ring_reaches_max_radius() {
    // base 800 at minimum magnitude -> max radius 400, speed 8
    let mut e = emitter(0.0, MagnitudeRange::new(0.0, 1.0), 3200.0);
    assert!((e.max_radius() - 400.0).abs() < 1e-3);
    for _ in 0..49 {
        e.tick();
    }
    assert!(e.is_live());
    assert!((e.radius() - 392.0).abs() < 1e-3);
    e.tick();
    e.tick();
    assert!(!e.is_live());
}

#[test]
fn liveness_never_comes_back() {
    let mut e = emitter(3.0, MagnitudeRange::new(0.0, 10.0), 600.0);
    let mut seen_dead = false;
    for _ in 0..400 {
        e.tick();
        if seen_dead {
            assert!(!e.is_live());
        }
        seen_dead |= !e.is_live();
    }
    assert!(seen_dead);
}

#[test]
fn life_remains_when_radius_reaches_max() {
    let range = MagnitudeRange::new(0.0, 10.0);
    for magnitude in [0.0, 2.5, 5.0, 7.5, 10.0] {
        let mut e = emitter(magnitude, range, 800.0);
        let mut ticks = 0;
        while e.radius() < e.max_radius() && ticks < 10_000 {
            e.tick();
            ticks += 1;
        }
        assert!(e.life() > 0.0, "magnitude {magnitude}: life {}", e.life());
        assert!(e.life() < 0.5, "magnitude {magnitude}: life {}", e.life());
    }
}

#[test]
fn quiet_emitters_fade_slower_per_tick_of_travel() {
    let params = RippleParams::default();
    assert!(params.life_buffer(0.0) > params.life_buffer(1.0));
    let quiet = params.fade_speed(0.0, 400.0);
    let loud = params.fade_speed(1.0, 400.0);
    assert!(quiet < loud);
}

#[test]
fn activation_delay_holds_expansion() {
    let params = RippleParams::default();
    let mut e = Emitter::new(
        Spawn {
            activation_delay: 3,
            ..spawn(1.0)
        },
        &MagnitudeRange::default(),
        200.0,
        &params,
    );
    e.tick();
    e.tick();
    assert_eq!(e.radius(), 0.0);
    assert!(!e.is_active());
    e.tick();
    assert!(e.is_active());
    assert!((e.radius() - params.expansion_speed).abs() < 1e-6);
}

#[test]
fn point_on_first_ring_is_displaced() {
    let params = RippleParams::default();
    let mut e = emitter(0.0, MagnitudeRange::new(0.0, 1.0), 3200.0);
    for _ in 0..10 {
        e.tick();
    }
    assert!(e.total_strength() > 0.0);
    let on_ring = e.origin() + Vec2::new(e.radius(), 0.0);
    assert!(e.sample_displacement(on_ring, &params).abs() > 1e-3);
}

#[test]
fn point_beyond_all_rings_is_zero() {
    let params = RippleParams::default();
    let mut e = emitter(10.0, MagnitudeRange::new(0.0, 10.0), 800.0);
    for _ in 0..20 {
        e.tick();
    }
    let reach = e.radius()
        + params.ring_count as f32 * params.ring_spacing
        + params.ring_thickness
        + 1.0;
    let far = e.origin() + Vec2::new(0.0, reach);
    assert_eq!(e.sample_displacement(far, &params), 0.0);
}

#[test]
fn fresh_emitter_has_no_displacement() {
    let params = RippleParams::default();
    let e = emitter(1.0, MagnitudeRange::default(), 800.0);
    assert_eq!(e.sample_displacement(e.origin(), &params), 0.0);
}

#[test]
fn first_matching_ring_wins() {
    // Overlapping bands: spacing below thickness means a point sits in two
    // bands at once; only the outer ring may contribute.
    let params = RippleParams {
        ring_spacing: 20.0,
        ..RippleParams::default()
    };
    let mut e = Emitter::new(spawn(1.0), &MagnitudeRange::default(), 400.0, &params);
    for _ in 0..20 {
        e.tick();
    }
    let p = e.origin() + Vec2::new(e.radius() - 10.0, 0.0);
    let d = e.sample_displacement(p, &params);

    let dist = e.origin().distance(p);
    let from_ring = (dist - e.radius()).abs();
    let ring_strength = e.total_strength() * (1.0 - dist / (e.max_radius() * params.ring_edge_fraction));
    let local = (1.0 - from_ring / params.ring_thickness) * ring_strength;
    let expected =
        (from_ring * params.ring_base_freq + params.ring_phase_step).sin() * local * params.wave_intensity;
    assert!((d - expected).abs() < 1e-4, "{d} vs {expected}");
}
