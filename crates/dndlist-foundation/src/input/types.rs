use dndlist_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// Events can be consumed by handlers (e.g., an active drag session) to
/// prevent other handlers (e.g., clicks) from receiving them. Consumption
/// state is shared across copies via `Rc<Cell>`.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Milliseconds since an arbitrary host epoch; strictly increasing
    /// within one pointer stream.
    pub uptime_ms: u64,
    pub buttons: PointerButtons,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_ms,
            buttons: PointerButtons::NONE,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Mark this event as consumed, preventing other handlers from
    /// processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_across_clones() {
        let event = PointerEvent::new(PointerEventKind::Down, Point::new(1.0, 2.0), 0);
        let copy = event.clone();
        assert!(!copy.is_consumed());
        event.consume();
        assert!(copy.is_consumed());
    }

    #[test]
    fn buttons_insert_and_remove() {
        let mut buttons = PointerButtons::new().with(PointerButton::Primary);
        assert!(buttons.contains(PointerButton::Primary));
        assert!(!buttons.contains(PointerButton::Secondary));
        buttons.remove(PointerButton::Primary);
        assert_eq!(buttons, PointerButtons::NONE);
    }
}
