//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue pointer events here and drain them into the
//! drag controller once per frame, keeping event delivery sequential even
//! when the host produces several events between frames.

use super::types::{PointerEvent, PointerId};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<(PointerId, PointerEvent)>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::PointerEventKind;
    use dndlist_ui_graphics::Point;

    #[test]
    fn drain_preserves_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(PointerEvent::new(PointerEventKind::Down, Point::ZERO, 0).with_id(7));
        dispatcher.push(
            PointerEvent::new(PointerEventKind::Move, Point::new(1.0, 0.0), 5).with_id(7),
        );

        let mut seen = Vec::new();
        dispatcher.drain(|id, event| seen.push((id, event.kind)));
        assert_eq!(
            seen,
            vec![(7, PointerEventKind::Down), (7, PointerEventKind::Move)]
        );
        assert!(dispatcher.is_empty());
    }
}
