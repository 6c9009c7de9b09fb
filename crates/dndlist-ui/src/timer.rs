//! Host clock seam for long-press recognition and autoscroll ticking.
//!
//! The engine never owns a thread or an OS timer; the host (an event loop,
//! a frame clock, or the manual driver in dndlist-testing) implements
//! [`TimerDriver`] and invokes callbacks on the single UI thread. Dropping a
//! [`TimerRegistration`] cancels the underlying timer, so a registration
//! stored in session state can never outlive the session.

use std::rc::Rc;

pub type TimerId = u64;

pub trait TimerDriver {
    /// Schedules `callback` to fire once after `delay_ms`, passing the
    /// driver's current time in milliseconds.
    fn schedule_once(&self, delay_ms: u64, callback: Rc<dyn Fn(u64)>) -> TimerId;

    /// Schedules `callback` to fire every `interval_ms` until cancelled.
    fn schedule_repeating(&self, interval_ms: u64, callback: Rc<dyn Fn(u64)>) -> TimerId;

    /// Cancels a scheduled timer. Cancelling an already-fired or unknown id
    /// is a no-op.
    fn cancel(&self, id: TimerId);
}

/// Keeps a scheduled timer alive; cancels it on drop.
pub struct TimerRegistration {
    driver: Rc<dyn TimerDriver>,
    id: Option<TimerId>,
}

impl TimerRegistration {
    pub fn new(driver: Rc<dyn TimerDriver>, id: TimerId) -> Self {
        Self {
            driver,
            id: Some(id),
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.driver.cancel(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.driver.cancel(id);
        }
    }
}
