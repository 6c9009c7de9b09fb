//! Derived display-order mapping for an in-progress drag.
//!
//! While a row is being dragged, the rendering widget must show the list as
//! if the move had already happened, without the backing store changing. The
//! [`TransientRowMap`] is that illusion: a pure, recomputable view over the
//! real per-section row counts and the active drag positions. When no drag
//! is active the map is the identity.

use crate::row::RowPosition;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransientRowMap {
    displayed_counts: Vec<usize>,
    placeholder: Option<Placeholder>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placeholder {
    origin: RowPosition,
    current: RowPosition,
}

impl TransientRowMap {
    /// The identity map: displayed order equals real order.
    pub fn identity(real_counts: &[usize]) -> Self {
        Self {
            displayed_counts: real_counts.to_vec(),
            placeholder: None,
        }
    }

    /// Builds the displayed view for a drag whose row started at `origin`
    /// (real coordinates) and currently floats over `current` (displayed
    /// coordinates). `pending_new_section`, when set, appends provisional
    /// empty sections up to and including its section index.
    pub fn for_move(
        real_counts: &[usize],
        origin: RowPosition,
        current: RowPosition,
        pending_new_section: Option<RowPosition>,
    ) -> Self {
        let mut counts = real_counts.to_vec();
        if let Some(pending) = pending_new_section {
            while counts.len() <= pending.section {
                counts.push(0);
            }
        }
        debug_assert!(origin.section < counts.len());
        debug_assert!(current.section < counts.len());
        counts[origin.section] -= 1;
        counts[current.section] += 1;
        Self {
            displayed_counts: counts,
            placeholder: Some(Placeholder { origin, current }),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.placeholder.is_none()
    }

    pub fn section_count(&self) -> usize {
        self.displayed_counts.len()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.displayed_counts.get(section).copied().unwrap_or(0)
    }

    pub fn displayed_counts(&self) -> &[usize] {
        &self.displayed_counts
    }

    /// Maps a displayed position back to the real position it renders.
    ///
    /// The placeholder row maps to the drag origin; every other row shifts
    /// by at most one to fill the gap the origin left behind and to make
    /// room at the placeholder.
    pub fn to_real(&self, displayed: RowPosition) -> RowPosition {
        let Some(Placeholder { origin, current }) = self.placeholder else {
            return displayed;
        };
        if displayed == current {
            return origin;
        }
        let mut real = displayed;
        // Remove the placeholder from the displayed order...
        if real.section == current.section && real.row > current.row {
            real.row -= 1;
        }
        // ...then re-insert the origin row into the gap it left.
        if real.section == origin.section && real.row >= origin.row {
            real.row += 1;
        }
        real
    }
}
