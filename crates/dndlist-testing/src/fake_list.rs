//! Fake list widget backed by the transient data source.
//!
//! Rows are laid out at a uniform height and rasterized into tagged pixels:
//! every pixel of a row encodes the REAL position the displayed row maps to,
//! so snapshot assertions can verify the on-screen order without a real
//! renderer. Hidden rows rasterize as blanks but keep their layout slot,
//! matching how a hidden cell behaves in a virtualized list.

use dndlist_foundation::{LayoutSolver, ListLayout, RowPosition, ScrollState};
use dndlist_ui::{ListWidget, TransientDataSource};
use dndlist_ui_graphics::{Bitmap, Rect};
use rustc_hash::FxHashSet;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetOp {
    MoveRow {
        from: RowPosition,
        to: RowPosition,
        animated: bool,
    },
    InsertSection(usize),
    DeleteSection(usize),
    SetHidden {
        position: RowPosition,
        hidden: bool,
    },
}

pub struct FakeListView {
    proxy: Rc<TransientDataSource>,
    scroll: ScrollState,
    bounds: Rect,
    row_height: f32,
    hidden: FxHashSet<RowPosition>,
    ops: Vec<WidgetOp>,
}

impl FakeListView {
    pub fn new(proxy: Rc<TransientDataSource>, bounds: Rect, row_height: f32) -> Self {
        Self {
            proxy,
            scroll: ScrollState::new(0.0),
            bounds,
            row_height,
            hidden: FxHashSet::default(),
            ops: Vec::new(),
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.clone()
    }

    pub fn ops(&self) -> &[WidgetOp] {
        &self.ops
    }

    pub fn is_row_hidden(&self, position: RowPosition) -> bool {
        self.hidden.contains(&position)
    }

    pub fn hidden_rows(&self) -> Vec<RowPosition> {
        let mut rows: Vec<RowPosition> = self.hidden.iter().copied().collect();
        rows.sort();
        rows
    }

    /// The REAL position each visible displayed row renders, top to bottom,
    /// restricted to rows intersecting the viewport.
    pub fn visible_real_rows(&self) -> Vec<RowPosition> {
        let layout = self.layout();
        let mut rows = Vec::new();
        for section in 0..layout.section_count() {
            for row in 0..layout.row_count(section) {
                let position = RowPosition::new(section, row);
                if !layout.rect_for(position).intersects(&self.bounds) {
                    continue;
                }
                rows.push(self.proxy.displayed_to_real(position));
            }
        }
        rows
    }

    fn remap_after_move(&mut self, from: RowPosition, to: RowPosition) {
        let remapped: FxHashSet<RowPosition> = self
            .hidden
            .iter()
            .map(|&position| {
                if position == from {
                    return to;
                }
                let mut shifted = position;
                if shifted.section == from.section && shifted.row > from.row {
                    shifted.row -= 1;
                }
                if shifted.section == to.section && shifted.row >= to.row {
                    shifted.row += 1;
                }
                shifted
            })
            .collect();
        self.hidden = remapped;
    }
}

impl ListWidget for FakeListView {
    fn layout(&self) -> LayoutSolver {
        LayoutSolver::uniform(
            &self.proxy.displayed_counts(),
            self.row_height,
            self.bounds,
            self.scroll.value(),
        )
    }

    fn visible_bounds(&self) -> Rect {
        self.bounds
    }

    fn scroll_by(&mut self, delta: f32) -> f32 {
        let max = (self.layout().content_height() - self.bounds.height).max(0.0);
        self.scroll.set_max_value(max);
        self.scroll.dispatch_raw_delta(delta)
    }

    fn move_row(&mut self, from: RowPosition, to: RowPosition, animated: bool) {
        self.remap_after_move(from, to);
        self.ops.push(WidgetOp::MoveRow { from, to, animated });
    }

    fn insert_section(&mut self, index: usize) {
        let shifted: FxHashSet<RowPosition> = self
            .hidden
            .iter()
            .map(|&position| {
                if position.section >= index {
                    RowPosition::new(position.section + 1, position.row)
                } else {
                    position
                }
            })
            .collect();
        self.hidden = shifted;
        self.ops.push(WidgetOp::InsertSection(index));
    }

    fn delete_section(&mut self, index: usize) {
        let shifted: FxHashSet<RowPosition> = self
            .hidden
            .iter()
            .filter(|position| position.section != index)
            .map(|&position| {
                if position.section > index {
                    RowPosition::new(position.section - 1, position.row)
                } else {
                    position
                }
            })
            .collect();
        self.hidden = shifted;
        self.ops.push(WidgetOp::DeleteSection(index));
    }

    fn set_row_hidden(&mut self, position: RowPosition, hidden: bool) {
        if hidden {
            self.hidden.insert(position);
        } else {
            self.hidden.remove(&position);
        }
        self.ops.push(WidgetOp::SetHidden { position, hidden });
    }

    fn capture(&self, region: Rect) -> Option<Bitmap> {
        let visible = region.intersection(&self.bounds)?;
        let width = region.width.round() as u32;
        let height = region.height.round() as u32;
        if width == 0 || height == 0 {
            return None;
        }
        let mut bitmap = Bitmap::new(width, height);
        let layout = self.layout();
        for section in 0..layout.section_count() {
            for row in 0..layout.row_count(section) {
                let position = RowPosition::new(section, row);
                if self.hidden.contains(&position) {
                    continue;
                }
                let rect = layout.rect_for(position);
                let clipped = match rect.intersection(&visible) {
                    Some(clipped) => clipped,
                    None => continue,
                };
                let real = self.proxy.displayed_to_real(position);
                let local = clipped.translate(-region.x, -region.y);
                bitmap.fill_region(
                    local.x.round().max(0.0) as u32,
                    local.y.round().max(0.0) as u32,
                    local.width.round() as u32,
                    local.height.round() as u32,
                    [real.section as u8, real.row as u8, 0x00, 0xFF],
                );
            }
        }
        Some(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VecDataSource;
    use dndlist_foundation::TransientRowMap;
    use std::cell::RefCell;

    fn view(counts: &[&[&str]]) -> (Rc<TransientDataSource>, FakeListView) {
        let source = Rc::new(RefCell::new(VecDataSource::new(counts)));
        let proxy = TransientDataSource::new(source);
        let view = FakeListView::new(proxy.clone(), Rect::new(0.0, 0.0, 100.0, 400.0), 40.0);
        (proxy, view)
    }

    #[test]
    fn capture_tags_pixels_with_real_positions() {
        let (_proxy, view) = view(&[&["a", "b"]]);
        let bitmap = view.capture(Rect::new(0.0, 0.0, 100.0, 80.0)).unwrap();
        assert_eq!(bitmap.pixel(10, 10), Some([0, 0, 0x00, 0xFF]));
        assert_eq!(bitmap.pixel(10, 50), Some([0, 1, 0x00, 0xFF]));
    }

    #[test]
    fn hidden_row_rasterizes_blank_but_keeps_its_slot() {
        let (_proxy, mut view) = view(&[&["a", "b"]]);
        view.set_row_hidden(RowPosition::new(0, 0), true);
        let bitmap = view.capture(Rect::new(0.0, 0.0, 100.0, 80.0)).unwrap();
        assert_eq!(bitmap.pixel(10, 10), Some([0, 0, 0, 0]));
        assert_eq!(bitmap.pixel(10, 50), Some([0, 1, 0x00, 0xFF]));
    }

    #[test]
    fn session_remaps_displayed_rows_to_real_ones() {
        let (proxy, view) = view(&[&["a", "b", "c"]]);
        proxy.begin_session(TransientRowMap::for_move(
            &[3],
            RowPosition::new(0, 0),
            RowPosition::new(0, 2),
            None,
        ));
        assert_eq!(
            view.visible_real_rows(),
            vec![
                RowPosition::new(0, 1),
                RowPosition::new(0, 2),
                RowPosition::new(0, 0),
            ]
        );
    }

    #[test]
    fn hidden_flag_travels_with_move() {
        let (_proxy, mut view) = view(&[&["a", "b", "c"]]);
        view.set_row_hidden(RowPosition::new(0, 0), true);
        view.move_row(RowPosition::new(0, 0), RowPosition::new(0, 2), false);
        assert!(view.is_row_hidden(RowPosition::new(0, 2)));
        assert!(!view.is_row_hidden(RowPosition::new(0, 0)));
    }

    #[test]
    fn scroll_by_clamps_to_content() {
        let (_proxy, mut view) = view(&[&["a"; 20]]);
        // 20 rows x 40px = 800px content in a 400px viewport.
        assert_eq!(view.scroll_by(1000.0), 400.0);
        assert_eq!(view.scroll_by(10.0), 0.0);
    }
}
