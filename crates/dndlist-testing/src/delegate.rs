//! Recording delegate for callback assertions.

use dndlist_foundation::RowPosition;
use dndlist_ui::DragReorderDelegate;
use dndlist_ui_graphics::Bitmap;
use std::cell::{Cell, RefCell};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DelegateEvent {
    WillBegin {
        origin: RowPosition,
        has_proxy: bool,
    },
    DidEnd {
        origin: RowPosition,
        destination: RowPosition,
        has_proxy: bool,
    },
}

/// Captures every delegate callback in order, with configurable answers for
/// the query methods.
pub struct RecordingDelegate {
    events: RefCell<Vec<DelegateEvent>>,
    animate: Cell<bool>,
    empty_section_height: Cell<f32>,
}

impl Default for RecordingDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            animate: Cell::new(true),
            empty_section_height: Cell::new(0.0),
        }
    }

    pub fn set_animate(&self, animate: bool) {
        self.animate.set(animate);
    }

    pub fn set_empty_section_height(&self, height: f32) {
        self.empty_section_height.set(height);
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DragReorderDelegate for RecordingDelegate {
    fn will_begin_dragging(&self, origin: RowPosition, proxy: Option<&Bitmap>) {
        self.events.borrow_mut().push(DelegateEvent::WillBegin {
            origin,
            has_proxy: proxy.is_some(),
        });
    }

    fn did_end_dragging(
        &self,
        origin: RowPosition,
        destination: RowPosition,
        proxy: Option<&Bitmap>,
    ) {
        self.events.borrow_mut().push(DelegateEvent::DidEnd {
            origin,
            destination,
            has_proxy: proxy.is_some(),
        });
    }

    fn should_animate_dragged_cells(&self) -> bool {
        self.animate.get()
    }

    fn height_for_empty_section(&self, _section: usize) -> f32 {
        self.empty_section_height.get()
    }
}
