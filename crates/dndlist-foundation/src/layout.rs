//! Row geometry and hit testing against a layout snapshot.
//!
//! [`LayoutSolver`] is a pure snapshot of where every row sits in viewport
//! coordinates, built from per-section row heights, the scroll offset, and
//! the viewport rect. It must be rebuilt after every structural change and
//! every scroll; it never caches across them.

use crate::row::RowPosition;
use dndlist_ui_graphics::{Point, Rect};
use smallvec::SmallVec;

/// Queryable row geometry for the currently displayed list.
pub trait ListLayout {
    fn section_count(&self) -> usize;

    fn row_count(&self, section: usize) -> usize;

    /// On-screen bounds of a row, in viewport coordinates.
    fn rect_for(&self, position: RowPosition) -> Rect;

    /// On-screen bounds of a whole section's content. Empty sections yield a
    /// zero-height rect at the position the section occupies.
    fn section_rect(&self, section: usize) -> Rect;

    fn visible_bounds(&self) -> Rect;

    /// Total height of the list content, independent of scrolling.
    fn content_height(&self) -> f32;

    /// The row under `point`, or `None` when the point misses all rows
    /// (outside the viewport, in an empty section's zero-height slot, or
    /// below the last row).
    ///
    /// Tie-break: a point exactly on the boundary between two rows resolves
    /// to the numerically lower index.
    fn position_at(&self, point: Point) -> Option<RowPosition>;
}

/// Concrete [`ListLayout`] backed by prefix sums, giving O(log n) hit
/// testing within a section.
#[derive(Clone, Debug)]
pub struct LayoutSolver {
    bounds: Rect,
    scroll_offset: f32,
    /// Content-space y where each section starts.
    section_starts: Vec<f32>,
    /// Per section: row boundary offsets relative to the section start,
    /// length `rows + 1`.
    row_offsets: Vec<SmallVec<[f32; 8]>>,
    content_height: f32,
}

impl LayoutSolver {
    pub fn new(row_heights: &[Vec<f32>], bounds: Rect, scroll_offset: f32) -> Self {
        let mut section_starts = Vec::with_capacity(row_heights.len());
        let mut row_offsets = Vec::with_capacity(row_heights.len());
        let mut y = 0.0;
        for heights in row_heights {
            section_starts.push(y);
            let mut offsets: SmallVec<[f32; 8]> = SmallVec::with_capacity(heights.len() + 1);
            let mut acc = 0.0;
            offsets.push(0.0);
            for height in heights {
                acc += height;
                offsets.push(acc);
            }
            row_offsets.push(offsets);
            y += acc;
        }
        Self {
            bounds,
            scroll_offset,
            section_starts,
            row_offsets,
            content_height: y,
        }
    }

    /// Convenience constructor for lists whose rows all share one height.
    pub fn uniform(counts: &[usize], row_height: f32, bounds: Rect, scroll_offset: f32) -> Self {
        let heights: Vec<Vec<f32>> = counts
            .iter()
            .map(|&count| vec![row_height; count])
            .collect();
        Self::new(&heights, bounds, scroll_offset)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn section_height(&self, section: usize) -> f32 {
        self.row_offsets[section].last().copied().unwrap_or(0.0)
    }

    /// Viewport-space y of the bottom edge of the last row.
    pub fn content_bottom(&self) -> f32 {
        self.bounds.y + self.content_height - self.scroll_offset
    }
}

impl ListLayout for LayoutSolver {
    fn section_count(&self) -> usize {
        self.section_starts.len()
    }

    fn row_count(&self, section: usize) -> usize {
        self.row_offsets
            .get(section)
            .map(|offsets| offsets.len() - 1)
            .unwrap_or(0)
    }

    fn rect_for(&self, position: RowPosition) -> Rect {
        let offsets = &self.row_offsets[position.section];
        let top = self.bounds.y + self.section_starts[position.section] + offsets[position.row]
            - self.scroll_offset;
        Rect::new(
            self.bounds.x,
            top,
            self.bounds.width,
            offsets[position.row + 1] - offsets[position.row],
        )
    }

    fn section_rect(&self, section: usize) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.section_starts[section] - self.scroll_offset,
            self.bounds.width,
            self.section_height(section),
        )
    }

    fn visible_bounds(&self) -> Rect {
        self.bounds
    }

    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn position_at(&self, point: Point) -> Option<RowPosition> {
        if !self.bounds.contains_point(point) {
            return None;
        }
        let content_y = point.y - self.bounds.y + self.scroll_offset;
        if content_y < 0.0 || content_y > self.content_height {
            return None;
        }
        for (section, offsets) in self.row_offsets.iter().enumerate() {
            if offsets.len() <= 1 {
                // Empty section: zero height, never a hit.
                continue;
            }
            let start = self.section_starts[section];
            let end = start + self.section_height(section);
            if content_y < start || content_y > end {
                continue;
            }
            let local = content_y - start;
            // First row whose bottom edge reaches `local`; an exact boundary
            // hit therefore resolves to the lower row index.
            let row = offsets[1..].partition_point(|&bottom| bottom < local);
            let row = row.min(offsets.len() - 2);
            return Some(RowPosition::new(section, row));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(counts: &[usize]) -> LayoutSolver {
        // 40px rows in a 100x400 viewport, unscrolled.
        LayoutSolver::uniform(counts, 40.0, Rect::new(0.0, 0.0, 100.0, 400.0), 0.0)
    }

    #[test]
    fn rect_and_hit_round_trip() {
        let layout = solver(&[3, 2]);
        for section in 0..2 {
            for row in 0..layout.row_count(section) {
                let position = RowPosition::new(section, row);
                let center = layout.rect_for(position).center();
                assert_eq!(layout.position_at(center), Some(position));
            }
        }
    }

    #[test]
    fn boundary_point_prefers_lower_row() {
        let layout = solver(&[3]);
        // y = 40 is the edge shared by rows 0 and 1.
        assert_eq!(
            layout.position_at(Point::new(50.0, 40.0)),
            Some(RowPosition::new(0, 0))
        );
        // Section boundary: y = 120 is the edge shared by (0,2) and (1,0).
        let layout = solver(&[3, 2]);
        assert_eq!(
            layout.position_at(Point::new(50.0, 120.0)),
            Some(RowPosition::new(0, 2))
        );
    }

    #[test]
    fn below_last_row_misses() {
        let layout = solver(&[2]);
        assert_eq!(layout.position_at(Point::new(50.0, 81.0)), None);
        assert_eq!(layout.content_bottom(), 80.0);
    }

    #[test]
    fn outside_bounds_misses() {
        let layout = solver(&[2]);
        assert_eq!(layout.position_at(Point::new(-1.0, 10.0)), None);
        assert_eq!(layout.position_at(Point::new(101.0, 10.0)), None);
    }

    #[test]
    fn empty_section_is_skipped() {
        let layout = solver(&[2, 0, 1]);
        // The empty section occupies zero height at y = 80; the shared edge
        // belongs to the last row above it.
        assert_eq!(
            layout.position_at(Point::new(50.0, 80.0)),
            Some(RowPosition::new(0, 1))
        );
        assert_eq!(layout.rect_for(RowPosition::new(2, 0)).y, 80.0);
        assert_eq!(layout.section_rect(1).height, 0.0);
        assert_eq!(layout.section_rect(1).y, 80.0);
    }

    #[test]
    fn scrolling_shifts_rects() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let layout = LayoutSolver::uniform(&[10], 40.0, bounds, 60.0);
        // Row 0 is scrolled 60px off the top.
        assert_eq!(layout.rect_for(RowPosition::new(0, 0)).y, -60.0);
        assert_eq!(
            layout.position_at(Point::new(50.0, 0.0)),
            Some(RowPosition::new(0, 1))
        );
        assert_eq!(layout.content_height(), 400.0);
    }

    #[test]
    fn variable_row_heights() {
        let heights = vec![vec![10.0, 30.0, 20.0]];
        let layout = LayoutSolver::new(&heights, Rect::new(0.0, 0.0, 100.0, 200.0), 0.0);
        assert_eq!(layout.rect_for(RowPosition::new(0, 1)).height, 30.0);
        assert_eq!(
            layout.position_at(Point::new(1.0, 39.9)),
            Some(RowPosition::new(0, 1))
        );
        assert_eq!(
            layout.position_at(Point::new(1.0, 41.0)),
            Some(RowPosition::new(0, 2))
        );
    }
}
