//! Backing data-source contract consumed by the drag-reorder engine.

use crate::row::RowPosition;

/// The host's backing store for a sectioned list.
///
/// The engine only mutates a data source when a drop commits; everything
/// before that happens against a transient overlay. `can_create_new_section`
/// is the capability query that governs whether dragging past the end of the
/// list may grow the list by one section; the safe default is to refuse.
pub trait ListDataSource {
    fn section_count(&self) -> usize;

    fn row_count(&self, section: usize) -> usize;

    /// Moves the row at `from` so it ends up at `to`, shifting rows in
    /// between. Both positions are in the data source's own coordinates.
    fn move_row(&mut self, from: RowPosition, to: RowPosition);

    /// Inserts an empty section at `index`.
    fn insert_section(&mut self, index: usize);

    /// Deletes the section at `index` along with any rows it holds.
    fn delete_section(&mut self, index: usize);

    /// Whether the host allows a new section to be created at `index` when a
    /// row is dragged past the end of the list.
    fn can_create_new_section(&self, _index: usize) -> bool {
        false
    }
}
