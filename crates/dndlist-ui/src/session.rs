//! Per-drag session state.

use dndlist_foundation::RowPosition;
use dndlist_ui_graphics::{Bitmap, Point, Size};
use smallvec::SmallVec;

/// Lifecycle of the drag gesture state machine.
///
/// `Idle → Armed` on long-press recognition, `Armed → Dragging` once the
/// pointer clears the deadzone, `Dragging → Dropping → Idle` on release.
/// Cancellation returns to `Idle` from anywhere with full restoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Armed,
    Dragging,
    Dropping,
}

/// State owned by one in-progress drag. Created on long-press recognition,
/// destroyed on drop or cancel; at most one exists at a time.
pub struct DragSession {
    /// Where the row sat when the drag began, in real data-source
    /// coordinates. Immutable for the session's lifetime.
    pub origin: RowPosition,
    /// Where the placeholder currently sits, in displayed coordinates.
    pub current: RowPosition,
    /// Set while the pointer is in "create a new section" territory.
    pub pending_new_section: Option<RowPosition>,
    /// Floating bitmap of the dragged row; `None` when capture missed.
    pub proxy_image: Option<Bitmap>,
    /// Press point relative to the row's origin, so the proxy tracks the
    /// finger instead of snapping to its center.
    pub pointer_offset: Point,
    /// Current top-left of the floating proxy, viewport coordinates.
    pub proxy_origin: Point,
    /// Size of the dragged row at capture time.
    pub row_size: Size,
    /// Provisional section insertions not yet applied to the real source.
    /// Retreating from a provisional section pops the entry, so the queue
    /// always nets to the sections the drop will actually create.
    pub pending_insertions: SmallVec<[RowPosition; 2]>,
    /// Animation flag, queried from the delegate once at drag start.
    pub animate: bool,
    /// Real per-section row counts at drag start, used to detect external
    /// mutation of the data source mid-drag.
    pub real_counts: Vec<usize>,
}

impl DragSession {
    pub fn new(
        origin: RowPosition,
        proxy_image: Option<Bitmap>,
        pointer_offset: Point,
        proxy_origin: Point,
        row_size: Size,
        real_counts: Vec<usize>,
    ) -> Self {
        Self {
            origin,
            current: origin,
            pending_new_section: None,
            proxy_image,
            pointer_offset,
            proxy_origin,
            row_size,
            pending_insertions: SmallVec::new(),
            animate: true,
            real_counts,
        }
    }

    /// Center of the floating proxy; row targeting keys off this point.
    pub fn proxy_center(&self) -> Point {
        Point::new(
            self.proxy_origin.x + self.row_size.width / 2.0,
            self.proxy_origin.y + self.row_size.height / 2.0,
        )
    }

    /// Repositions the proxy so it stays under the finger, offset-corrected.
    pub fn track_pointer(&mut self, pointer: Point) {
        self.proxy_origin = Point::new(
            pointer.x - self.pointer_offset.x,
            pointer.y - self.pointer_offset.y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_tracks_pointer_with_offset() {
        let mut session = DragSession::new(
            RowPosition::new(0, 0),
            None,
            Point::new(10.0, 5.0),
            Point::ZERO,
            Size::new(100.0, 40.0),
            vec![3],
        );
        session.track_pointer(Point::new(50.0, 80.0));
        assert_eq!(session.proxy_origin, Point::new(40.0, 75.0));
        assert_eq!(session.proxy_center(), Point::new(90.0, 95.0));
    }
}
