//! Загрузка страниц и массовое удаление.
//!
//! Bulk delete is a two-step protocol: the list is refreshed first and only
//! after the refresh has finished are the deleted ids reconciled out of the
//! selection. There is no cache layer that would refetch on its own.

use std::collections::HashSet;

use crate::shared::error::{BulkActionError, FetchError};
use crate::shared::list_source::{BulkActionInvoker, PagedListSource};
use crate::shared::list_state::{ListViewState, PageApply, StateCell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Nothing selected, or another bulk action is still running.
    Skipped,
    Deleted { requested: usize, deleted: usize },
    /// The list view was unmounted while the action was running.
    Detached,
}

/// Fetches the page described by the view's current query. Follows step
/// backs while the requested page keeps vanishing; each one moves to an
/// earlier page, so page 1 ends the walk.
pub async fn load_page<T, C, S>(cell: &C, source: &S) -> Result<(), FetchError>
where
    C: StateCell<ListViewState<T>>,
    S: PagedListSource<T> + ?Sized,
{
    loop {
        let Some((seq, query)) = cell.update_state(|s| (s.begin_fetch(), s.query())) else {
            return Ok(());
        };

        match source.fetch_page(&query).await {
            Ok(page) => {
                let applied = cell.update_state(|s| s.apply_page(seq, page));
                if applied != Some(PageApply::StepBack) {
                    return Ok(());
                }
                log::debug!("page {} is gone, stepping back", query.page);
            }
            Err(e) => {
                cell.update_state(|s| s.fail_fetch(seq, format!("Не удалось загрузить список: {}", e)));
                return Err(e);
            }
        }
    }
}

/// Deletes every selected id, refreshes the list, then reconciles the
/// selection. A failed delete leaves the selection as it was.
pub async fn bulk_delete<T, C, S, I>(
    cell: &C,
    source: &S,
    invoker: &I,
) -> Result<BulkOutcome, BulkActionError>
where
    C: StateCell<ListViewState<T>>,
    S: PagedListSource<T> + ?Sized,
    I: BulkActionInvoker + ?Sized,
{
    let ids: HashSet<String> = match cell.update_state(|s| s.begin_bulk_action()) {
        None => return Ok(BulkOutcome::Detached),
        Some(None) => return Ok(BulkOutcome::Skipped),
        Some(Some(ids)) => ids,
    };
    log::info!("bulk delete of {} item(s) started", ids.len());

    let deleted = match invoker.delete_many(&ids).await {
        Ok(deleted) => deleted,
        Err(e) => {
            log::error!("bulk delete failed: {}", e);
            let err = BulkActionError::Delete(e);
            cell.update_state(|s| {
                s.finish_bulk_action();
                s.error = Some(err.to_string());
            });
            return Err(err);
        }
    };

    let refreshed = load_page::<T, C, S>(cell, source).await;

    let reconciled = cell.update_state(|s| {
        s.selection.reconcile_after_deletion(&ids);
        s.finish_bulk_action();
        if let Err(e) = &refreshed {
            s.error = Some(BulkActionError::Refresh(e.clone()).to_string());
        }
    });
    if reconciled.is_none() {
        return Ok(BulkOutcome::Detached);
    }

    refreshed.map_err(BulkActionError::Refresh)?;
    Ok(BulkOutcome::Deleted {
        requested: ids.len(),
        deleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::DeleteError;
    use async_trait::async_trait;
    use contracts::shared::{Identifiable, ListQuery, Page};
    use std::collections::VecDeque;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(String);

    impl Identifiable for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    /// In-memory backend: the list source and the bulk invoker share rows.
    struct FakeBackend {
        rows: RefCell<Vec<Row>>,
        fetches: Cell<usize>,
        fail_fetch: Cell<bool>,
        fail_delete: Cell<bool>,
    }

    impl FakeBackend {
        fn with_rows(count: usize) -> Self {
            Self {
                rows: RefCell::new((1..=count).map(|i| Row(i.to_string())).collect()),
                fetches: Cell::new(0),
                fail_fetch: Cell::new(false),
                fail_delete: Cell::new(false),
            }
        }
    }

    #[async_trait(?Send)]
    impl PagedListSource<Row> for FakeBackend {
        async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Row>, FetchError> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail_fetch.get() {
                return Err(FetchError::Status(503));
            }
            let rows = self.rows.borrow();
            let start = (query.page - 1) * query.page_size;
            let items = rows.iter().skip(start).take(query.page_size).cloned().collect();
            Ok(Page {
                page_index: query.page,
                page_size: query.page_size,
                items,
                total_count: rows.len(),
            })
        }
    }

    #[async_trait(?Send)]
    impl BulkActionInvoker for FakeBackend {
        async fn delete_many(&self, ids: &HashSet<String>) -> Result<usize, DeleteError> {
            if self.fail_delete.get() {
                return Err(DeleteError::Status(500));
            }
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|row| !ids.contains(&row.0));
            Ok(before - rows.len())
        }
    }

    /// Records the selection as it was when each refresh hit the source.
    struct SelectionRecorder<'a> {
        backend: &'a FakeBackend,
        state: &'a RefCell<ListViewState<Row>>,
        seen: RefCell<Vec<HashSet<String>>>,
    }

    #[async_trait(?Send)]
    impl<'a> PagedListSource<Row> for SelectionRecorder<'a> {
        async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Row>, FetchError> {
            self.seen
                .borrow_mut()
                .push(self.state.borrow().selection.selected_ids());
            self.backend.fetch_page(query).await
        }
    }

    fn ids_of(state: &RefCell<ListViewState<Row>>) -> Vec<String> {
        state.borrow().current.ids().map(str::to_string).collect()
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_load_page_applies_result() {
        let backend = FakeBackend::with_rows(5);
        let state = RefCell::new(ListViewState::<Row>::new(2));

        block_on(load_page(&state, &backend)).unwrap();
        assert_eq!(ids_of(&state), vec!["1", "2"]);
        assert!(state.borrow().is_loaded);
        assert!(!state.borrow().loading);
        assert_eq!(state.borrow().total_pages(), 3);
    }

    #[test]
    fn test_load_page_failure_sets_error() {
        let backend = FakeBackend::with_rows(5);
        backend.fail_fetch.set(true);
        let state = RefCell::new(ListViewState::<Row>::new(2));

        let result = block_on(load_page(&state, &backend));
        assert_eq!(result, Err(FetchError::Status(503)));
        assert!(!state.borrow().loading);
        assert!(state.borrow().error.as_deref().unwrap().contains("503"));
    }

    #[test]
    fn test_bulk_delete_across_pages() {
        let backend = FakeBackend::with_rows(5);
        let state = RefCell::new(ListViewState::<Row>::new(2));
        block_on(load_page(&state, &backend)).unwrap();
        state.borrow_mut().toggle_select_all();

        state.borrow_mut().go_to_page(2);
        block_on(load_page(&state, &backend)).unwrap();
        state.borrow_mut().toggle_select("3");

        let outcome = block_on(bulk_delete(&state, &backend, &backend)).unwrap();
        assert_eq!(outcome, BulkOutcome::Deleted { requested: 3, deleted: 3 });

        let s = state.borrow();
        assert!(s.selection.is_empty());
        assert!(!s.bulk_in_flight);
        assert_eq!(s.current.total_count, 2);
        assert_eq!(s.page_index, 1);
        assert_eq!(ids_of(&state), vec!["4", "5"]);
    }

    #[test]
    fn test_reconcile_happens_after_refresh() {
        let backend = FakeBackend::with_rows(4);
        let state = RefCell::new(ListViewState::<Row>::new(10));
        let recorder = SelectionRecorder {
            backend: &backend,
            state: &state,
            seen: RefCell::new(Vec::new()),
        };

        block_on(load_page(&state, &recorder)).unwrap();
        state.borrow_mut().toggle_select("2");
        block_on(bulk_delete(&state, &recorder, &backend)).unwrap();

        // The refresh still saw the deleted id as selected
        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen.last(), Some(&set(&["2"])));
        assert!(state.borrow().selection.is_empty());
    }

    #[test]
    fn test_failed_delete_keeps_selection() {
        let backend = FakeBackend::with_rows(3);
        let state = RefCell::new(ListViewState::<Row>::new(10));
        block_on(load_page(&state, &backend)).unwrap();
        state.borrow_mut().toggle_select("1");
        backend.fail_delete.set(true);
        let fetches = backend.fetches.get();

        let result = block_on(bulk_delete(&state, &backend, &backend));
        assert_eq!(result, Err(BulkActionError::Delete(DeleteError::Status(500))));

        let s = state.borrow();
        assert_eq!(s.selection.selected(), &set(&["1"]));
        assert!(!s.bulk_in_flight);
        assert!(s.error.is_some());
        assert_eq!(backend.fetches.get(), fetches);
        assert_eq!(backend.rows.borrow().len(), 3);
    }

    #[test]
    fn test_failed_refresh_still_reconciles() {
        let backend = FakeBackend::with_rows(3);
        let state = RefCell::new(ListViewState::<Row>::new(10));
        block_on(load_page(&state, &backend)).unwrap();
        state.borrow_mut().toggle_select("3");
        backend.fail_fetch.set(true);

        let result = block_on(bulk_delete(&state, &backend, &backend));
        assert_eq!(result, Err(BulkActionError::Refresh(FetchError::Status(503))));

        let s = state.borrow();
        assert!(s.selection.is_empty());
        assert!(!s.bulk_in_flight);
        assert_eq!(backend.rows.borrow().len(), 2);
    }

    #[test]
    fn test_empty_selection_is_skipped() {
        let backend = FakeBackend::with_rows(3);
        let state = RefCell::new(ListViewState::<Row>::new(10));
        block_on(load_page(&state, &backend)).unwrap();
        let fetches = backend.fetches.get();

        let outcome = block_on(bulk_delete(&state, &backend, &backend)).unwrap();
        assert_eq!(outcome, BulkOutcome::Skipped);
        assert_eq!(backend.fetches.get(), fetches);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_skipped() {
        let backend = FakeBackend::with_rows(3);
        let state = RefCell::new(ListViewState::<Row>::new(10));
        block_on(load_page(&state, &backend)).unwrap();
        state.borrow_mut().toggle_select("1");
        let in_flight = state.borrow_mut().begin_bulk_action();
        assert!(in_flight.is_some());

        let outcome = block_on(bulk_delete(&state, &backend, &backend)).unwrap();
        assert_eq!(outcome, BulkOutcome::Skipped);
        assert_eq!(backend.rows.borrow().len(), 3);
    }

    #[test]
    fn test_deleting_last_page_steps_back() {
        let backend = FakeBackend::with_rows(5);
        let state = RefCell::new(ListViewState::<Row>::new(2));
        state.borrow_mut().go_to_page(3);
        block_on(load_page(&state, &backend)).unwrap();
        assert_eq!(ids_of(&state), vec!["5"]);
        state.borrow_mut().toggle_select("5");

        block_on(bulk_delete(&state, &backend, &backend)).unwrap();
        let s = state.borrow();
        assert_eq!(s.page_index, 2);
        assert_eq!(s.current.total_count, 4);
        drop(s);
        assert_eq!(ids_of(&state), vec!["3", "4"]);
    }

    /// Replays canned pages, one per request.
    struct ScriptedSource {
        pages: RefCell<VecDeque<Page<Row>>>,
        requested: RefCell<Vec<usize>>,
    }

    #[async_trait(?Send)]
    impl PagedListSource<Row> for ScriptedSource {
        async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Row>, FetchError> {
            self.requested.borrow_mut().push(query.page);
            self.pages
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| FetchError::Network("script exhausted".into()))
        }
    }

    fn scripted(index: usize, ids: &[&str], total: usize) -> Page<Row> {
        Page {
            page_index: index,
            page_size: 2,
            items: ids.iter().map(|id| Row(id.to_string())).collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_load_page_follows_repeated_step_backs() {
        // Rows keep disappearing between requests
        let source = ScriptedSource {
            pages: RefCell::new(VecDeque::from(vec![
                scripted(3, &[], 4),
                scripted(2, &[], 2),
                scripted(1, &["1", "2"], 2),
            ])),
            requested: RefCell::new(Vec::new()),
        };
        let state = RefCell::new(ListViewState::<Row>::new(2));
        state.borrow_mut().go_to_page(3);

        block_on(load_page(&state, &source)).unwrap();
        assert_eq!(*source.requested.borrow(), vec![3, 2, 1]);

        let s = state.borrow();
        assert!(s.is_loaded);
        assert!(!s.loading);
        assert_eq!(s.page_index, 1);
        assert_eq!(s.current.total_count, 2);
        drop(s);
        assert_eq!(ids_of(&state), vec!["1", "2"]);
    }

    /// A view that may be unmounted at any point.
    struct MountedView {
        state: RefCell<ListViewState<Row>>,
        mounted: Cell<bool>,
    }

    impl StateCell<ListViewState<Row>> for MountedView {
        fn with_state<R>(&self, f: impl FnOnce(&ListViewState<Row>) -> R) -> Option<R> {
            self.mounted.get().then(|| f(&self.state.borrow()))
        }

        fn update_state<R>(&self, f: impl FnOnce(&mut ListViewState<Row>) -> R) -> Option<R> {
            self.mounted.get().then(|| f(&mut self.state.borrow_mut()))
        }
    }

    /// Unmounts the view as soon as the delete request goes out.
    struct UnmountOnDelete<'a> {
        backend: &'a FakeBackend,
        view: &'a MountedView,
    }

    #[async_trait(?Send)]
    impl<'a> BulkActionInvoker for UnmountOnDelete<'a> {
        async fn delete_many(&self, ids: &HashSet<String>) -> Result<usize, DeleteError> {
            self.view.mounted.set(false);
            self.backend.delete_many(ids).await
        }
    }

    #[test]
    fn test_bulk_delete_on_unmounted_view_is_detached() {
        let backend = FakeBackend::with_rows(3);
        let view = MountedView {
            state: RefCell::new(ListViewState::new(10)),
            mounted: Cell::new(true),
        };
        block_on(load_page(&view, &backend)).unwrap();
        view.state.borrow_mut().toggle_select("1");
        view.mounted.set(false);
        let fetches = backend.fetches.get();

        let outcome = block_on(bulk_delete(&view, &backend, &backend)).unwrap();
        assert_eq!(outcome, BulkOutcome::Detached);
        assert_eq!(backend.rows.borrow().len(), 3);
        assert_eq!(backend.fetches.get(), fetches);
    }

    #[test]
    fn test_unmount_during_delete_skips_refresh_and_reconcile() {
        let backend = FakeBackend::with_rows(3);
        let view = MountedView {
            state: RefCell::new(ListViewState::new(10)),
            mounted: Cell::new(true),
        };
        block_on(load_page(&view, &backend)).unwrap();
        view.state.borrow_mut().toggle_select("2");
        let fetches = backend.fetches.get();
        let invoker = UnmountOnDelete {
            backend: &backend,
            view: &view,
        };

        let outcome = block_on(bulk_delete(&view, &backend, &invoker)).unwrap();
        assert_eq!(outcome, BulkOutcome::Detached);
        assert_eq!(backend.rows.borrow().len(), 2);
        assert_eq!(backend.fetches.get(), fetches);
        // Nothing touched the state after the unmount
        let s = view.state.borrow();
        assert!(s.bulk_in_flight);
        assert!(s.selection.is_selected("2"));
    }
}
