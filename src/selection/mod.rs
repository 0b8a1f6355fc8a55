//! Bounded set of profiles picked for side-by-side comparison.

use serde::Serialize;

/// Maximum number of profiles that can be compared at once.
pub const MAX_SELECTION: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full, nothing changed.
    Rejected,
}

/// Ordered set of at most [`MAX_SELECTION`] unique profile ids.
///
/// Insertion order is kept for display. A full set never evicts: adding a
/// new id requires removing one first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    ids: Vec<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if self.remove(id) {
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Rejected;
        }
        self.ids.push(id.to_string());
        ToggleOutcome::Added
    }

    /// Removes `id` if selected. Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
