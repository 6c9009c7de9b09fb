//! Edge-proximity autoscroll state.
//!
//! While a drag is active and the pointer sits within the edge band, a
//! repeating timer scrolls the viewport proportionally to how deep into the
//! band the pointer is. The state here is pure math; the controller owns the
//! timer and feeds the post-scroll hit test back into the state machine.

use dndlist_ui_graphics::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutoscrollDirection {
    #[default]
    None,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AutoscrollState {
    pub direction: AutoscrollDirection,
    /// 0.0 at the band boundary, 1.0 at the list edge, clamped.
    pub magnitude: f32,
}

impl AutoscrollState {
    pub const IDLE: AutoscrollState = AutoscrollState {
        direction: AutoscrollDirection::None,
        magnitude: 0.0,
    };

    pub fn is_active(&self) -> bool {
        self.direction != AutoscrollDirection::None
    }

    /// Signed per-tick scroll delta for this state.
    pub fn scroll_delta(&self, max_per_tick: f32) -> f32 {
        match self.direction {
            AutoscrollDirection::None => 0.0,
            AutoscrollDirection::Up => -self.magnitude * max_per_tick,
            AutoscrollDirection::Down => self.magnitude * max_per_tick,
        }
    }
}

/// Computes the autoscroll state for a pointer at `pointer_y` over a list
/// with the given visible bounds. `threshold` is the depth of the edge band.
///
/// Magnitude grows linearly from 0 at the inner band boundary to 1 at the
/// list edge, and is clamped so pointers tracked slightly past the edge
/// still produce 1.
pub fn compute_autoscroll(pointer_y: f32, bounds: Rect, threshold: f32) -> AutoscrollState {
    if threshold <= 0.0 || pointer_y < bounds.y || pointer_y > bounds.bottom() {
        return AutoscrollState::IDLE;
    }
    let from_top = pointer_y - bounds.y;
    let from_bottom = bounds.bottom() - pointer_y;
    if from_top < threshold && from_top <= from_bottom {
        AutoscrollState {
            direction: AutoscrollDirection::Up,
            magnitude: ((threshold - from_top) / threshold).clamp(0.0, 1.0),
        }
    } else if from_bottom < threshold {
        AutoscrollState {
            direction: AutoscrollDirection::Down,
            magnitude: ((threshold - from_bottom) / threshold).clamp(0.0, 1.0),
        }
    } else {
        AutoscrollState::IDLE
    }
}
