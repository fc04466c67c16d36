// Host-side integration tests for the trail engine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod trail {
    include!("../src/core/trail.rs");
}

use trail::*;

fn make_engine() -> TrailEngine {
    TrailEngine::new(42)
}

#[test]
fn burst_spawns_exactly_three_particles() {
    let mut engine = make_engine();
    let burst = engine.spawn_burst(100.0, 100.0, 0.0);
    assert_eq!(burst.len(), BURST_SIZE);
    assert_eq!(engine.active_count(), BURST_SIZE);
    for spec in &burst {
        assert!(engine.is_active(spec.id));
    }
}

#[test]
fn repeated_bursts_accumulate_three_per_call() {
    let mut engine = make_engine();
    for n in 1..=10 {
        engine.spawn_burst(50.0, 60.0, n as f64 * 20.0);
        assert_eq!(engine.active_count(), BURST_SIZE * n);
    }
}

#[test]
fn burst_ids_are_unique() {
    let mut engine = make_engine();
    let mut ids = Vec::new();
    for _ in 0..20 {
        for spec in engine.spawn_burst(0.0, 0.0, 0.0) {
            ids.push(spec.id);
        }
    }
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn particles_scatter_within_offset_range() {
    let mut engine = make_engine();
    for _ in 0..100 {
        for spec in engine.spawn_burst(200.0, 300.0, 0.0) {
            assert!((spec.x - 200.0).abs() <= OFFSET_RANGE_PX);
            assert!((spec.y - 300.0).abs() <= OFFSET_RANGE_PX);
        }
    }
}

#[test]
fn durations_stay_in_lifetime_range() {
    let mut engine = make_engine();
    for _ in 0..100 {
        for spec in engine.spawn_burst(0.0, 0.0, 0.0) {
            assert!(spec.duration_sec >= DURATION_MIN_SEC);
            assert!(spec.duration_sec < DURATION_MAX_SEC);
        }
    }
}

#[test]
fn expire_removes_id_and_is_idempotent() {
    let mut engine = make_engine();
    let burst = engine.spawn_burst(0.0, 0.0, 0.0);
    let id = burst[0].id;

    assert!(engine.expire(id));
    assert!(!engine.is_active(id));
    assert_eq!(engine.active_count(), BURST_SIZE - 1);

    // Second expiry of the same id must be a silent no-op.
    assert!(!engine.expire(id));
    assert_eq!(engine.active_count(), BURST_SIZE - 1);
}

#[test]
fn expire_of_unknown_id_is_a_no_op() {
    let mut engine = make_engine();
    engine.spawn_burst(0.0, 0.0, 0.0);
    assert!(!engine.expire(9999));
    assert_eq!(engine.active_count(), BURST_SIZE);
}

#[test]
fn teardown_drains_every_live_particle() {
    let mut engine = make_engine();
    engine.spawn_burst(10.0, 10.0, 0.0);
    engine.spawn_burst(20.0, 20.0, 20.0);
    let first = engine.spawn_burst(30.0, 30.0, 40.0)[0].id;
    engine.expire(first);

    let removed = engine.teardown();
    assert_eq!(removed.len(), BURST_SIZE * 3 - 1);
    assert_eq!(engine.active_count(), 0);

    // Teardown twice is fine; there is nothing left to report.
    assert!(engine.teardown().is_empty());
}

#[test]
fn expiry_timer_firing_after_teardown_is_harmless() {
    let mut engine = make_engine();
    let burst = engine.spawn_burst(0.0, 0.0, 0.0);
    engine.teardown();
    for spec in &burst {
        assert!(!engine.expire(spec.id));
    }
    assert_eq!(engine.active_count(), 0);
}

#[test]
fn pointer_state_tracks_last_move() {
    let mut engine = make_engine();
    engine.set_pointer(100.0, 100.0);
    engine.set_pointer(110.0, 115.0);
    assert_eq!(engine.pointer(), (110.0, 115.0));
}

#[test]
fn quick_moves_spawn_at_least_six_particles() {
    // Two pointer-move events in quick succession: indicator ends at the
    // second position and each move contributed a full burst.
    let mut engine = make_engine();

    engine.set_pointer(100.0, 100.0);
    engine.spawn_burst(100.0, 100.0, 0.0);
    engine.set_pointer(110.0, 115.0);
    engine.spawn_burst(110.0, 115.0, 5.0);

    assert_eq!(engine.pointer(), (110.0, 115.0));
    assert!(engine.active_count() >= 6);
}

#[test]
fn throttle_accepts_first_call() {
    let mut throttle = SpawnThrottle::default();
    assert!(throttle.ready(1234.5));
}

#[test]
fn throttle_rejects_calls_within_window() {
    let mut throttle = SpawnThrottle::default();
    assert!(throttle.ready(0.0));
    assert!(!throttle.ready(10.0));
    assert!(!throttle.ready(15.9));
}

#[test]
fn throttle_accepts_after_window_elapsed() {
    let mut throttle = SpawnThrottle::default();
    assert!(throttle.ready(0.0));
    assert!(throttle.ready(16.0));
    assert!(throttle.ready(32.0));
}

#[test]
fn throttle_window_restarts_from_accepted_call() {
    let mut throttle = SpawnThrottle::default();
    assert!(throttle.ready(0.0));
    // Rejected calls must not push the window forward.
    assert!(!throttle.ready(15.0));
    assert!(throttle.ready(16.0));
    assert!(!throttle.ready(31.0));
    assert!(throttle.ready(32.0));
}
