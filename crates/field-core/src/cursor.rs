//! Normalized pointer signal and idle bookkeeping.
//!
//! The "is moving" flag is a plain tick comparison against the last
//! pointer event, so tests drive time by calling `advance` and no
//! timers are involved.

use glam::Vec2;

use crate::constants::MOVE_DECAY_TICKS;

#[derive(Clone, Debug)]
pub struct CursorSignal {
    ndc: Vec2,
    seen: bool,
    ticks_since_move: u32,
    idle_ticks: u32,
}

impl Default for CursorSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorSignal {
    pub fn new() -> Self {
        Self {
            ndc: Vec2::ZERO,
            seen: false,
            // Start outside the decay window so a fresh field is idle.
            ticks_since_move: MOVE_DECAY_TICKS,
            idle_ticks: 0,
        }
    }

    /// Record a pointer event. Coordinates outside [-1, 1] are clamped,
    /// never rejected.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.ndc = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        self.seen = true;
        self.ticks_since_move = 0;
        self.idle_ticks = 0;
    }

    /// Advance one display tick. While the decay window is open the idle
    /// timer stays pinned at zero; afterwards it counts up monotonically.
    pub fn advance(&mut self) {
        self.ticks_since_move = self.ticks_since_move.saturating_add(1);
        if self.is_moving() {
            self.idle_ticks = 0;
        } else {
            self.idle_ticks = self.idle_ticks.saturating_add(1);
        }
    }

    pub fn is_moving(&self) -> bool {
        self.seen && self.ticks_since_move < MOVE_DECAY_TICKS
    }

    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Whether any pointer event has ever been observed.
    pub fn seen(&self) -> bool {
        self.seen
    }
}
