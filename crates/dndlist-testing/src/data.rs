//! Vector-backed data source for tests.

use dndlist_foundation::{ListDataSource, RowPosition};

/// A sectioned list of strings with the full [`ListDataSource`] contract.
pub struct VecDataSource {
    sections: Vec<Vec<String>>,
    allow_new_sections: bool,
}

impl VecDataSource {
    pub fn new(rows: &[&[&str]]) -> Self {
        Self {
            sections: rows
                .iter()
                .map(|section| section.iter().map(|row| row.to_string()).collect())
                .collect(),
            allow_new_sections: false,
        }
    }

    pub fn set_allow_new_sections(&mut self, allow: bool) {
        self.allow_new_sections = allow;
    }

    /// Snapshot of the backing storage for assertions.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.sections.clone()
    }

    pub fn push_row(&mut self, section: usize, value: &str) {
        self.sections[section].push(value.to_string());
    }

    pub fn remove_row(&mut self, position: RowPosition) -> String {
        self.sections[position.section].remove(position.row)
    }
}

impl ListDataSource for VecDataSource {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn row_count(&self, section: usize) -> usize {
        self.sections[section].len()
    }

    fn move_row(&mut self, from: RowPosition, to: RowPosition) {
        let value = self.sections[from.section].remove(from.row);
        self.sections[to.section].insert(to.row, value);
    }

    fn insert_section(&mut self, index: usize) {
        self.sections.insert(index, Vec::new());
    }

    fn delete_section(&mut self, index: usize) {
        self.sections.remove(index);
    }

    fn can_create_new_section(&self, _index: usize) -> bool {
        self.allow_new_sections
    }
}
