// Tests for the cursor signal: clamping, idle bookkeeping, and the
// tick-based decay of the "is moving" flag.

use field_core::constants::MOVE_DECAY_TICKS;
use field_core::CursorSignal;
use glam::Vec2;

#[test]
fn fresh_cursor_is_idle_and_unseen() {
    let mut cursor = CursorSignal::new();
    assert!(!cursor.seen());
    assert!(!cursor.is_moving());
    assert_eq!(cursor.idle_ticks(), 0);

    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.idle_ticks(), 2);
}

#[test]
fn out_of_range_coordinates_are_clamped() {
    let mut cursor = CursorSignal::new();
    cursor.pointer_moved(Vec2::new(5.0, -3.0));
    assert_eq!(cursor.ndc(), Vec2::new(1.0, -1.0));

    cursor.pointer_moved(Vec2::new(-0.25, 0.75));
    assert_eq!(cursor.ndc(), Vec2::new(-0.25, 0.75));
}

#[test]
fn pointer_event_resets_the_idle_timer() {
    let mut cursor = CursorSignal::new();
    for _ in 0..40 {
        cursor.advance();
    }
    assert_eq!(cursor.idle_ticks(), 40);

    cursor.pointer_moved(Vec2::ZERO);
    assert!(cursor.seen());
    assert!(cursor.is_moving());
    assert_eq!(cursor.idle_ticks(), 0);
}

#[test]
fn moving_flag_decays_after_the_fixed_window() {
    let mut cursor = CursorSignal::new();
    cursor.pointer_moved(Vec2::ZERO);

    // The idle timer stays pinned at zero while the window is open.
    for _ in 0..MOVE_DECAY_TICKS - 1 {
        cursor.advance();
        assert!(cursor.is_moving());
        assert_eq!(cursor.idle_ticks(), 0);
    }

    cursor.advance();
    assert!(!cursor.is_moving());
    assert_eq!(cursor.idle_ticks(), 1);
}

#[test]
fn rapid_events_keep_extending_the_window() {
    let mut cursor = CursorSignal::new();
    for _ in 0..20 {
        cursor.pointer_moved(Vec2::ZERO);
        cursor.advance();
        assert!(cursor.is_moving());
        assert_eq!(cursor.idle_ticks(), 0);
    }
}

#[test]
fn idle_timer_saturates_instead_of_wrapping() {
    let mut cursor = CursorSignal::new();
    for _ in 0..10 {
        cursor.advance();
    }
    let before = cursor.idle_ticks();
    cursor.advance();
    assert_eq!(cursor.idle_ticks(), before + 1);
}
