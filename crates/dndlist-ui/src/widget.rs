//! Rendering-widget contract consumed by the drag-reorder engine.

use dndlist_foundation::{LayoutSolver, RowPosition};
use dndlist_ui_graphics::{Bitmap, Rect};

/// The virtualized list widget the engine drives.
///
/// The widget renders rows from the engine's transient data source, so the
/// structural notifications here (`move_row`, `insert_section`,
/// `delete_section`) are exactly paired with transient-map changes: the
/// widget never observes a reorder it was not told about.
///
/// Per-row attributes (most importantly the hidden flag set while a row's
/// floating proxy is visible) travel with the row: `move_row` carries them
/// from `from` to `to`.
pub trait ListWidget {
    /// A fresh geometry snapshot for the currently displayed rows. Must be
    /// recomputed on every call; the engine never caches it across
    /// structural changes or scrolls.
    fn layout(&self) -> LayoutSolver;

    fn visible_bounds(&self) -> Rect;

    /// Scrolls the viewport by `delta`, clamped to the content limits.
    /// Returns the amount actually scrolled; zero means the limit was hit.
    fn scroll_by(&mut self, delta: f32) -> f32;

    /// Moves a displayed row, optionally animated.
    fn move_row(&mut self, from: RowPosition, to: RowPosition, animated: bool);

    /// Inserts an empty displayed section at `index`.
    fn insert_section(&mut self, index: usize);

    /// Deletes the displayed section at `index`.
    fn delete_section(&mut self, index: usize);

    /// Shows or hides a row without removing it from layout. Positions that
    /// no longer exist are ignored.
    fn set_row_hidden(&mut self, position: RowPosition, hidden: bool);

    /// Rasterizes a region of the visible list surface. Returns `None` when
    /// the region does not intersect the visible bounds.
    fn capture(&self, region: Rect) -> Option<Bitmap>;
}
