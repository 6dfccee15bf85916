//! Pointer history window and spawn velocity estimation

use glam::Vec2;
use gravity_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2};
use gravity_core::{GestureHistory, PointerSample};

#[test]
fn test_history_keeps_fifteen_most_recent() {
    let mut history = GestureHistory::new();
    for i in 0..20 {
        history.record(PointerSample::new(i as f32, 0.0, 16.0));
        assert!(history.len() <= 15);
    }

    let xs: Vec<f32> = history.samples().map(|s| s.pos.x).collect();
    let expected: Vec<f32> = (5..20).map(|i| i as f32).collect();
    assert_eq!(xs, expected);
}

#[test]
fn test_two_sample_estimate() {
    let mut history = GestureHistory::new();
    history.record(PointerSample::new(0.0, 0.0, 100.0));
    history.record(PointerSample::new(10.0, 20.0, 300.0));

    // time scale = 400 / 100000 = 0.004
    let vel = history.estimate_spawn_velocity().unwrap();
    assert!(approx_eq_f32(vel.x, 0.04, 1e-6));
    assert!(approx_eq_f32(vel.y, 0.08, 1e-6));
}

#[test]
fn test_estimate_uses_only_window_endpoints() {
    let mut history = GestureHistory::new();
    history.record(PointerSample::new(0.0, 0.0, 10.0));
    history.record(PointerSample::new(500.0, -500.0, 10.0));
    history.record(PointerSample::new(30.0, 40.0, 10.0));

    let vel = history.estimate_spawn_velocity().unwrap();
    let expected = Vec2::new(30.0, 40.0) * (30.0 / 100_000.0);
    assert!(approx_eq_vec2(vel, expected, 1e-7));
}

#[test]
fn test_estimate_scales_with_accumulated_time() {
    let mut slow = GestureHistory::new();
    let mut fast = GestureHistory::new();
    for i in 0..15 {
        slow.record(PointerSample::new(i as f32, 0.0, 32.0));
        fast.record(PointerSample::new(i as f32, 0.0, 16.0));
    }
    let slow_v = slow.estimate_spawn_velocity().unwrap();
    let fast_v = fast.estimate_spawn_velocity().unwrap();
    // Longer frames make spawned bodies faster, not slower
    assert!(approx_eq_f32(slow_v.x, 2.0 * fast_v.x, 1e-6));
}

#[test]
fn test_evicted_samples_no_longer_affect_estimate() {
    let mut history = GestureHistory::new();
    history.record(PointerSample::new(-1000.0, -1000.0, 1000.0));
    for _ in 0..15 {
        history.record(PointerSample::new(7.0, 7.0, 16.0));
    }
    assert_eq!(history.estimate_spawn_velocity(), Ok(Vec2::ZERO));
}
