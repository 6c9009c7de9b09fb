//! Manually advanced timer driver.
//!
//! Tests control time explicitly: `advance` fires every timer due within
//! the window, in due order, releasing the internal borrow around each
//! callback so callbacks may schedule and cancel timers freely.

use dndlist_ui::{TimerDriver, TimerId};
use std::cell::RefCell;
use std::rc::Rc;

struct Entry {
    id: TimerId,
    due: u64,
    interval: Option<u64>,
    callback: Rc<dyn Fn(u64)>,
}

struct DriverInner {
    now: u64,
    next_id: TimerId,
    entries: Vec<Entry>,
}

#[derive(Clone)]
pub struct ManualTimerDriver {
    inner: Rc<RefCell<DriverInner>>,
}

impl Default for ManualTimerDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimerDriver {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DriverInner {
                now: 0,
                next_id: 1,
                entries: Vec::new(),
            })),
        }
    }

    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Advances the clock by `ms`, firing due timers in due order. A
    /// repeating timer is rescheduled before its callback runs, so a
    /// callback that cancels it wins.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let fired = {
                let mut inner = self.inner.borrow_mut();
                let index = inner
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => {
                        let due = inner.entries[index].due;
                        inner.now = due;
                        let callback = inner.entries[index].callback.clone();
                        match inner.entries[index].interval {
                            Some(interval) => inner.entries[index].due = due + interval.max(1),
                            None => {
                                inner.entries.remove(index);
                            }
                        }
                        Some((due, callback))
                    }
                    None => None,
                }
            };
            match fired {
                Some((due, callback)) => callback(due),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn insert(&self, due: u64, interval: Option<u64>, callback: Rc<dyn Fn(u64)>) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            due,
            interval,
            callback,
        });
        id
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule_once(&self, delay_ms: u64, callback: Rc<dyn Fn(u64)>) -> TimerId {
        let due = self.inner.borrow().now + delay_ms;
        self.insert(due, None, callback)
    }

    fn schedule_repeating(&self, interval_ms: u64, callback: Rc<dyn Fn(u64)>) -> TimerId {
        let due = self.inner.borrow().now + interval_ms;
        self.insert(due, Some(interval_ms), callback)
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().entries.retain(|entry| entry.id != id);
    }
}
