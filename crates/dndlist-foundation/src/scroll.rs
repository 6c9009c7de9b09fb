//! Scroll position model for the list viewport.
//!
//! A pure scroll model: it holds the current offset and the scrollable
//! limit, and clamps every delta to the valid range. It does NOT store
//! gesture state; the drag engine feeds it deltas and observes how much was
//! actually consumed, which is how it detects the scroll limits.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

struct ScrollStateInner {
    /// Current scroll offset in pixels, always within `[0, max_value]`.
    value: Cell<f32>,
    /// Maximum scroll value (content height - viewport height).
    max_value: Cell<f32>,
}

impl ScrollState {
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(ScrollStateInner {
                value: Cell::new(initial.max(0.0)),
                max_value: Cell::new(0.0),
            }),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    pub fn max_value(&self) -> f32 {
        self.inner.max_value.get()
    }

    /// Updates the scrollable limit, re-clamping the current offset.
    pub fn set_max_value(&self, max: f32) {
        let max = max.max(0.0);
        self.inner.max_value.set(max);
        let clamped = self.value().clamp(0.0, max);
        self.inner.value.set(clamped);
    }

    /// Scrolls by the given delta, clamping to `[0, max_value]`.
    /// Returns the amount actually scrolled.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let current = self.value();
        let new_value = (current + delta).clamp(0.0, self.max_value());
        let actual = new_value - current;
        if actual.abs() > 0.001 {
            self.inner.value.set(new_value);
            actual
        } else {
            0.0
        }
    }

    /// Scrolls to the given position immediately, clamped to the limits.
    pub fn scroll_to(&self, position: f32) {
        let clamped = position.clamp(0.0, self.max_value());
        self.inner.value.set(clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_clamps_at_both_limits() {
        let state = ScrollState::new(0.0);
        state.set_max_value(100.0);

        assert_eq!(state.dispatch_raw_delta(-10.0), 0.0);
        assert_eq!(state.dispatch_raw_delta(60.0), 60.0);
        assert_eq!(state.dispatch_raw_delta(60.0), 40.0);
        assert_eq!(state.value(), 100.0);
        assert_eq!(state.dispatch_raw_delta(5.0), 0.0);
    }

    #[test]
    fn shrinking_max_reclamps_value() {
        let state = ScrollState::new(0.0);
        state.set_max_value(100.0);
        state.scroll_to(90.0);
        state.set_max_value(50.0);
        assert_eq!(state.value(), 50.0);
    }

    #[test]
    fn clones_share_state() {
        let state = ScrollState::new(0.0);
        state.set_max_value(10.0);
        let alias = state.clone();
        alias.dispatch_raw_delta(4.0);
        assert_eq!(state.value(), 4.0);
    }
}
