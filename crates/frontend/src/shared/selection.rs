//! Выбор строк в серверных таблицах.
//!
//! The selection is keyed by item id and lives independently of the page that
//! is currently displayed: ids picked on page 2 stay selected while the user
//! looks at page 3. Only the "select all" checkbox is page-scoped.

use std::collections::HashSet;

use contracts::shared::{Identifiable, Page};

/// Visual state of the header checkbox for the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: HashSet<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. The id does not have to be
    /// on the visible page.
    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Explicit check/uncheck coming from a row checkbox.
    pub fn set_selected(&mut self, id: &str, checked: bool) {
        if checked {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// An empty page is never "all selected": there is nothing to act on.
    pub fn is_all_selected<T: Identifiable>(&self, page: &Page<T>) -> bool {
        !page.is_empty() && page.ids().all(|id| self.selected.contains(id))
    }

    /// Selects every visible id, or deselects them when all of them are
    /// already selected. Ids from other pages are left alone either way.
    pub fn toggle_select_all<T: Identifiable>(&mut self, page: &Page<T>) {
        if self.is_all_selected(page) {
            for id in page.ids() {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(page.ids().map(str::to_string));
        }
    }

    pub fn check_state<T: Identifiable>(&self, page: &Page<T>) -> CheckState {
        if self.is_all_selected(page) {
            CheckState::Checked
        } else if page.ids().any(|id| self.selected.contains(id)) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drops ids the server confirmed as deleted.
    pub fn reconcile_after_deletion(&mut self, deleted: &HashSet<String>) {
        self.selected.retain(|id| !deleted.contains(id));
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn selected_ids(&self) -> HashSet<String> {
        self.selected.clone()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
