//! Animal-list state for the animals page.
//!
//! The list shows each animal's tutor by name, so loading fills both the
//! animal list and a tutor lookup keyed by id.

#[cfg(test)]
#[path = "animals_test.rs"]
mod animals_test;

use std::collections::BTreeMap;

use crate::net::types::{Animal, Tutor};

/// Shown when an animal references a tutor that no longer exists.
pub const UNKNOWN_TUTOR: &str = "N/A";

#[derive(Clone, Debug, Default)]
pub struct AnimalsState {
    pub items: Vec<Animal>,
    pub tutors: BTreeMap<i64, Tutor>,
    pub loading: bool,
    pub deleting_id: Option<i64>,
    pub error: Option<String>,
}

impl AnimalsState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn finish_loading(&mut self, animals: Vec<Animal>, tutors: Vec<Tutor>) {
        self.items = animals;
        self.tutors = tutors.into_iter().map(|t| (t.id, t)).collect();
        self.loading = false;
        self.error = None;
    }

    pub fn fail_loading(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tutor_name(&self, animal: &Animal) -> &str {
        self.tutors.get(&animal.tutor_id).map_or(UNKNOWN_TUTOR, |t| t.name.as_str())
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

/// Age column text, e.g. `3 anos`.
pub fn age_label(age: u32) -> String {
    format!("{age} anos")
}

pub fn delete_prompt(name: &str) -> String {
    format!("Tem certeza que deseja excluir o animal \"{name}\"?")
}

/// Creating an animal needs at least one tutor to own it. Editing never
/// shows the notice.
pub fn needs_tutor_first(is_edit: bool, tutor_count: usize) -> bool {
    !is_edit && tutor_count == 0
}
