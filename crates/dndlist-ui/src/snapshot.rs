//! Bitmap capture helpers for drag feedback.
//!
//! Capture failure is never an error: a row that has already scrolled
//! off-screen yields `None` and the drag continues without a preview.

use crate::widget::ListWidget;
use dndlist_foundation::{ListLayout, RowPosition};
use dndlist_ui_graphics::Bitmap;

/// Captures the given row as a detached bitmap, or `None` when the row does
/// not intersect the visible bounds.
pub fn capture_row(widget: &dyn ListWidget, position: RowPosition) -> Option<Bitmap> {
    let rect = widget.layout().rect_for(position);
    widget.capture(rect)
}

/// Captures the whole visible list surface. When `cleared` names a row, that
/// row is hidden for the duration of the capture and its visibility is
/// restored synchronously before returning, so the list never flashes an
/// empty row.
pub fn capture_visible_surface(
    widget: &mut dyn ListWidget,
    cleared: Option<RowPosition>,
) -> Option<Bitmap> {
    let bounds = widget.visible_bounds();
    if let Some(row) = cleared {
        widget.set_row_hidden(row, true);
        let bitmap = widget.capture(bounds);
        widget.set_row_hidden(row, false);
        bitmap
    } else {
        widget.capture(bounds)
    }
}
