//! Transient data-source decorator.
//!
//! The rendering widget reads row counts through this wrapper. With no
//! session open it forwards to the real data source untouched; during a
//! drag it answers from the session's [`TransientRowMap`], so the widget
//! renders the in-progress order while the caller's backing storage stays
//! pristine until the drop commits.
//!
//! This is an explicit decorator at the data-source seam, not interception
//! of the host's own object.

use dndlist_foundation::{ListDataSource, RowPosition, TransientRowMap};
use smallvec::SmallVec;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub struct TransientDataSource {
    real: Rc<RefCell<dyn ListDataSource>>,
    map: RefCell<Option<TransientRowMap>>,
}

/// The batched structural edit applied to the real data source at drop
/// time. Applied as a single atomic unit: the widget must not re-query the
/// source between the section inserts and the move.
#[derive(Debug, Default)]
pub struct CommitPlan {
    /// Section indices to insert, ascending.
    pub insert_sections: SmallVec<[usize; 2]>,
    /// The net row move, in post-insertion coordinates.
    pub move_row: Option<(RowPosition, RowPosition)>,
}

impl TransientDataSource {
    pub fn new(real: Rc<RefCell<dyn ListDataSource>>) -> Rc<Self> {
        Rc::new(Self {
            real,
            map: RefCell::new(None),
        })
    }

    pub fn real(&self) -> Ref<'_, dyn ListDataSource> {
        self.real.borrow()
    }

    pub fn is_session_active(&self) -> bool {
        self.map.borrow().is_some()
    }

    /// Opens a session. The widget starts seeing the mapped order.
    pub fn begin_session(&self, map: TransientRowMap) {
        *self.map.borrow_mut() = Some(map);
    }

    /// Replaces the active map after a placeholder crossing.
    pub fn update_map(&self, map: TransientRowMap) {
        *self.map.borrow_mut() = Some(map);
    }

    /// Closes the session without touching the real source (cancel path).
    pub fn end_session(&self) {
        *self.map.borrow_mut() = None;
    }

    /// Real per-section row counts, bypassing any active session.
    pub fn real_counts(&self) -> Vec<usize> {
        let real = self.real.borrow();
        (0..real.section_count())
            .map(|section| real.row_count(section))
            .collect()
    }

    /// Displayed section count (transient while a session is open).
    pub fn section_count(&self) -> usize {
        match self.map.borrow().as_ref() {
            Some(map) => map.section_count(),
            None => self.real.borrow().section_count(),
        }
    }

    /// Displayed row count (transient while a session is open).
    pub fn row_count(&self, section: usize) -> usize {
        match self.map.borrow().as_ref() {
            Some(map) => map.row_count(section),
            None => self.real.borrow().row_count(section),
        }
    }

    /// Displayed per-section row counts.
    pub fn displayed_counts(&self) -> Vec<usize> {
        match self.map.borrow().as_ref() {
            Some(map) => map.displayed_counts().to_vec(),
            None => self.real_counts(),
        }
    }

    /// Maps a displayed position to the real row it renders. Identity when
    /// no session is open.
    pub fn displayed_to_real(&self, displayed: RowPosition) -> RowPosition {
        match self.map.borrow().as_ref() {
            Some(map) => map.to_real(displayed),
            None => displayed,
        }
    }

    /// Forwards the new-section capability query to the real source.
    pub fn can_create_new_section(&self, index: usize) -> bool {
        self.real.borrow().can_create_new_section(index)
    }

    /// Applies the batched edits to the real data source and closes the
    /// session, reverting to pass-through. One borrow, one atomic update.
    pub fn commit(&self, plan: CommitPlan) {
        {
            let mut real = self.real.borrow_mut();
            for &index in plan.insert_sections.iter() {
                real.insert_section(index);
            }
            if let Some((from, to)) = plan.move_row {
                real.move_row(from, to);
            }
        }
        self.end_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        counts: Vec<usize>,
        log: Vec<String>,
    }

    impl ListDataSource for StubSource {
        fn section_count(&self) -> usize {
            self.counts.len()
        }

        fn row_count(&self, section: usize) -> usize {
            self.counts[section]
        }

        fn move_row(&mut self, from: RowPosition, to: RowPosition) {
            self.counts[from.section] -= 1;
            self.counts[to.section] += 1;
            self.log.push(format!("move {from} -> {to}"));
        }

        fn insert_section(&mut self, index: usize) {
            self.counts.insert(index, 0);
            self.log.push(format!("insert {index}"));
        }

        fn delete_section(&mut self, index: usize) {
            self.counts.remove(index);
            self.log.push(format!("delete {index}"));
        }
    }

    fn stub(counts: &[usize]) -> Rc<RefCell<StubSource>> {
        Rc::new(RefCell::new(StubSource {
            counts: counts.to_vec(),
            log: Vec::new(),
        }))
    }

    #[test]
    fn passes_through_when_no_session() {
        let source = stub(&[3, 1]);
        let proxy = TransientDataSource::new(source);
        assert!(!proxy.is_session_active());
        assert_eq!(proxy.section_count(), 2);
        assert_eq!(proxy.row_count(0), 3);
        assert_eq!(
            proxy.displayed_to_real(RowPosition::new(1, 0)),
            RowPosition::new(1, 0)
        );
    }

    #[test]
    fn session_overlays_counts_without_mutating_real() {
        let source = stub(&[3]);
        let proxy = TransientDataSource::new(source.clone());
        proxy.begin_session(TransientRowMap::for_move(
            &[3],
            RowPosition::new(0, 0),
            RowPosition::new(0, 2),
            None,
        ));
        assert_eq!(proxy.row_count(0), 3);
        assert_eq!(
            proxy.displayed_to_real(RowPosition::new(0, 2)),
            RowPosition::new(0, 0)
        );
        assert!(source.borrow().log.is_empty());

        proxy.end_session();
        assert_eq!(
            proxy.displayed_to_real(RowPosition::new(0, 2)),
            RowPosition::new(0, 2)
        );
    }

    #[test]
    fn commit_applies_inserts_then_move() {
        let source = stub(&[2]);
        let proxy = TransientDataSource::new(source.clone());
        proxy.begin_session(TransientRowMap::identity(&[2]));

        let mut plan = CommitPlan::default();
        plan.insert_sections.push(1);
        plan.move_row = Some((RowPosition::new(0, 1), RowPosition::new(1, 0)));
        proxy.commit(plan);

        assert!(!proxy.is_session_active());
        let source = source.borrow();
        assert_eq!(source.counts, vec![1, 1]);
        assert_eq!(source.log, vec!["insert 1", "move (0, 1) -> (1, 0)"]);
    }
}
