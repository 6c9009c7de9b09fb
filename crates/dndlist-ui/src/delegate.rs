//! Host event surface for drag-reorder sessions.

use dndlist_foundation::RowPosition;
use dndlist_ui_graphics::Bitmap;

/// Callbacks and configuration queries exposed to the owning screen.
///
/// Every method has a safe default, so hosts implement only what they need.
/// Delegate methods are invoked on the UI thread mid-gesture and must not
/// reenter the drag controller.
pub trait DragReorderDelegate {
    /// The long press was recognised and a drag is about to start. The
    /// proxy image is `None` when the row could not be captured (already
    /// scrolled off-screen); the drag proceeds without a preview.
    fn will_begin_dragging(&self, _origin: RowPosition, _proxy: Option<&Bitmap>) {}

    /// The drag ended with a drop. Fired exactly once per completed drag,
    /// including same-position drops (`origin == destination`); never fired
    /// for cancelled sessions.
    fn did_end_dragging(
        &self,
        _origin: RowPosition,
        _destination: RowPosition,
        _proxy: Option<&Bitmap>,
    ) {
    }

    /// Whether placeholder moves should animate. Queried once per session
    /// at drag start.
    fn should_animate_dragged_cells(&self) -> bool {
        true
    }

    /// Height of the drop band representing a section with zero rows.
    /// Zero (the default) means empty sections are not drop targets.
    fn height_for_empty_section(&self, _section: usize) -> f32 {
        0.0
    }
}
