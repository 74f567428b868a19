// Bounds and relationships between the tuning constants.

use std::time::Duration;

use ring_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_within_reasonable_bounds() {
    assert!(DEFAULT_SIZE > 0.0);
    assert!(DEFAULT_STROKE_WIDTH >= 0.0);
    assert!(DEFAULT_STROKE_WIDTH < DEFAULT_SIZE);
    assert!(DEFAULT_MAX > 0.0);
    assert!(MAX_EPSILON > 0.0 && MAX_EPSILON < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_MAX > PARTICLE_SIZE_MIN);
    assert!(PARTICLE_FADE_MIN_MS > 0.0);
    assert!(PARTICLE_FADE_MAX_MS > PARTICLE_FADE_MIN_MS);
    assert!(PARTICLE_ANGLE_JITTER > 0.0 && PARTICLE_ANGLE_JITTER < std::f32::consts::PI);
}

#[test]
fn session_window_outlasts_a_frame_but_not_a_second() {
    assert!(PARTICLE_SESSION >= Duration::from_millis(100));
    assert!(PARTICLE_SESSION < Duration::from_secs(1));
}

#[test]
fn anchor_angle_spans_the_full_ring() {
    assert_eq!(anchor_angle(0.0), 0.0);
    assert!((anchor_angle(1.0) - 2.0 * std::f32::consts::PI).abs() < 1e-6);
    assert!((anchor_angle(0.25) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}
