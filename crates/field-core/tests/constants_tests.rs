// Sanity checks on the tuning constants and the relationships the mode
// machine relies on.

use field_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_thresholds_are_ordered() {
    // Settle fills the gap below the return window; wander starts where
    // returning ends.
    assert!(SETTLE_IDLE_MIN < RETURN_IDLE_MIN);
    assert!(RETURN_IDLE_MIN < RETURN_IDLE_MAX);
    assert_eq!(RETURN_IDLE_MAX, WANDER_IDLE_MIN);
    assert!(WANDER_IDLE_MIN < WANDER_RETARGET_TICKS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_and_speeds_are_positive_fractions() {
    assert!(RETURN_RATE > 0.0 && RETURN_RATE < 1.0);
    assert!(SETTLE_RATE > 0.0 && SETTLE_RATE < 1.0);
    assert!(WANDER_SPEED > 0.0);
    assert!(SCATTER_SPEED_MIN > 0.0);
    assert!(SCATTER_SPEED_MIN < SCATTER_SPEED_MAX);
    assert!(HOME_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn move_decay_window_approximates_100ms_at_60hz() {
    let window_ms = MOVE_DECAY_TICKS as f32 * 1000.0 / 60.0;
    assert!((window_ms - 100.0).abs() <= 20.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_consistent() {
    assert!(FIELD_HALF_EXTENT > 0.0);
    assert_eq!(SCATTER_RADIUS, FIELD_HALF_EXTENT);
    assert!(WANDER_OFFSET_MAX > 0.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
    assert!(COLOR_SATURATION > 0.0 && COLOR_SATURATION <= 1.0);
    assert!(LIGHTNESS_FALLOFF_SPAN > 0.0 && LIGHTNESS_FALLOFF_SPAN <= 1.0);
    assert!(BUBBLE_SCALE > 0.0);
}
