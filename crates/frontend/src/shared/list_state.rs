//! Состояние одной таблицы: страница, фильтры, выбор строк.
//!
//! Each mounted list owns exactly one `ListViewState`, usually inside an
//! `RwSignal` created by the list component. Nothing here is global, so the
//! Users, Trips, Orders and Bookings tables keep independent selections.

use std::cell::RefCell;
use std::collections::HashSet;

use contracts::shared::{Identifiable, ListQuery, Page};
use leptos::prelude::*;

use crate::shared::selection::{CheckState, SelectionController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilters {
    pub search: String,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
}

impl Default for ListFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: None,
            sort_ascending: true,
        }
    }
}

/// What the caller should do after a page response was handed to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageApply {
    Applied,
    /// The response belongs to a superseded request and was dropped.
    Stale,
    /// The requested page no longer exists; the request moved to the last
    /// existing page and has to be fetched again.
    StepBack,
}

#[derive(Debug, Clone)]
pub struct ListViewState<T> {
    pub current: Page<T>,
    // Запрошенная страница (1-based), может отличаться от current до загрузки
    pub page_index: usize,
    pub page_size: usize,
    pub filters: ListFilters,
    pub selection: SelectionController,
    pub loading: bool,
    pub bulk_in_flight: bool,
    pub error: Option<String>,
    pub is_loaded: bool,
    request_seq: u64,
}

impl<T> ListViewState<T> {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            current: Page::empty(page_size),
            page_index: 1,
            page_size,
            filters: ListFilters::default(),
            selection: SelectionController::new(),
            loading: false,
            bulk_in_flight: false,
            error: None,
            is_loaded: false,
            request_seq: 0,
        }
    }

    pub fn query(&self) -> ListQuery {
        let search = self.filters.search.trim();
        ListQuery {
            page: self.page_index,
            page_size: self.page_size,
            search: (!search.is_empty()).then(|| search.to_string()),
            sort_by: self.filters.sort_field.clone(),
            sort_desc: !self.filters.sort_ascending,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.current.total_pages()
    }

    /// Page navigation keeps the selection.
    pub fn go_to_page(&mut self, page_index: usize) {
        self.page_index = page_index.max(1);
    }

    /// A new page size starts a new browsing context.
    pub fn change_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 1;
        self.selection.clear_selection();
    }

    /// Returns `false` when the search text did not actually change.
    pub fn apply_search(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.filters.search == text {
            return false;
        }
        self.filters.search = text.to_string();
        self.page_index = 1;
        self.selection.clear_selection();
        true
    }

    /// Ignored while a bulk action runs. Returns `false` in that case.
    pub fn toggle_sort(&mut self, field: &str) -> bool {
        if self.bulk_in_flight {
            return false;
        }
        if self.filters.sort_field.as_deref() == Some(field) {
            self.filters.sort_ascending = !self.filters.sort_ascending;
        } else {
            self.filters.sort_field = Some(field.to_string());
            self.filters.sort_ascending = true;
        }
        self.page_index = 1;
        true
    }

    /// Marks a fetch as started and returns its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    pub fn apply_page(&mut self, seq: u64, page: Page<T>) -> PageApply {
        if seq != self.request_seq {
            return PageApply::Stale;
        }
        let overshoot = page.is_empty() && self.page_index > 1 && page.total_count > 0;
        if overshoot {
            // Always strictly earlier, so repeated step backs end at page 1
            self.page_index = page.total_pages().min(self.page_index - 1).max(1);
            self.current.total_count = page.total_count;
            return PageApply::StepBack;
        }
        // The requested page size wins over whatever the server echoes back
        let mut page = page;
        page.page_size = self.page_size;
        page.items.truncate(self.page_size);
        self.page_index = page.page_index;
        self.current = page;
        self.loading = false;
        self.is_loaded = true;
        PageApply::Applied
    }

    pub fn fail_fetch(&mut self, seq: u64, message: String) {
        if seq != self.request_seq {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Selection controls are frozen while a bulk action runs.
    pub fn selection_locked(&self) -> bool {
        self.bulk_in_flight
    }

    pub fn toggle_select(&mut self, id: &str) {
        if !self.selection_locked() {
            self.selection.toggle_select(id);
        }
    }

    pub fn set_selected(&mut self, id: &str, checked: bool) {
        if !self.selection_locked() {
            self.selection.set_selected(id, checked);
        }
    }

    pub fn clear_selection(&mut self) {
        if !self.selection_locked() {
            self.selection.clear_selection();
        }
    }

    /// Snapshot of the selection for a bulk action. `None` when there is
    /// nothing selected or another action is still running.
    pub fn begin_bulk_action(&mut self) -> Option<HashSet<String>> {
        if self.bulk_in_flight || self.selection.is_empty() {
            return None;
        }
        self.bulk_in_flight = true;
        Some(self.selection.selected_ids())
    }

    pub fn finish_bulk_action(&mut self) {
        self.bulk_in_flight = false;
    }
}

impl<T: Identifiable> ListViewState<T> {
    pub fn toggle_select_all(&mut self) {
        if !self.selection_locked() {
            self.selection.toggle_select_all(&self.current);
        }
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.current)
    }

    pub fn check_state(&self) -> CheckState {
        self.selection.check_state(&self.current)
    }
}

/// Access to a view's state from async code. Both methods return `None`
/// once the owning view is gone.
pub trait StateCell<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<S> StateCell<S> for RefCell<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
