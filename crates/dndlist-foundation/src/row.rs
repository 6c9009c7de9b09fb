//! Row addressing for sectioned lists.

use std::cmp::Ordering;
use std::fmt;

/// Identifies a row inside a sectioned list.
///
/// Ordering is lexicographic: section major, row minor. Two positions are
/// equal iff both fields match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowPosition {
    pub section: usize,
    pub row: usize,
}

impl RowPosition {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl PartialOrd for RowPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RowPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.section
            .cmp(&other.section)
            .then(self.row.cmp(&other.row))
    }
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_section_major() {
        assert!(RowPosition::new(0, 9) < RowPosition::new(1, 0));
        assert!(RowPosition::new(1, 0) < RowPosition::new(1, 1));
        assert_eq!(RowPosition::new(2, 3), RowPosition::new(2, 3));
    }
}
