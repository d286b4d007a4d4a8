//! Tutor-list state for the tutors page.
//!
//! DESIGN
//! ======
//! Plain fields held in a page-scoped `RwSignal`. The page drives loading and
//! deletion; this module only records where each flow stands.

#[cfg(test)]
#[path = "tutors_test.rs"]
mod tutors_test;

use crate::net::types::Tutor;

/// Tutor list plus load/delete progress.
#[derive(Clone, Debug, Default)]
pub struct TutorsState {
    pub items: Vec<Tutor>,
    pub loading: bool,
    pub deleting_id: Option<i64>,
    pub error: Option<String>,
}

impl TutorsState {
    /// State for a page that starts loading immediately.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn finish_loading(&mut self, items: Vec<Tutor>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Keep whatever was loaded before and record the failure.
    pub fn fail_loading(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn begin_delete(&mut self, id: i64) {
        self.deleting_id = Some(id);
    }

    pub fn end_delete(&mut self) {
        self.deleting_id = None;
    }

    /// Record a failed delete. The row stays listed.
    pub fn fail_delete(&mut self, error: impl Into<String>) {
        self.deleting_id = None;
        self.error = Some(error.into());
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting_id == Some(id)
    }
}

/// Confirmation prompt shown before deleting a tutor.
pub fn delete_prompt(name: &str) -> String {
    format!("Tem certeza que deseja excluir o tutor \"{name}\"?")
}
