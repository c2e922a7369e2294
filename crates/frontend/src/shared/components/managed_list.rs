//! Универсальная серверная таблица с выбором строк и массовым удалением.

use contracts::shared::Identifiable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use crate::shared::bulk_action::{bulk_delete, load_page, BulkOutcome};
use crate::shared::components::bulk_action_bar::BulkActionBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::config::AppConfig;
use crate::shared::list_source::RestResource;
use crate::shared::list_state::ListViewState;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Описание колонки таблицы
pub struct Column<T> {
    pub title: &'static str,
    /// Server-side sort key; `None` for unsortable columns
    pub sort_key: Option<&'static str>,
    pub min_width: f64,
    pub render: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub fn new(title: &'static str, render: fn(&T) -> String) -> Self {
        Self {
            title,
            sort_key: None,
            min_width: 100.0,
            render,
        }
    }

    pub fn sortable(mut self, key: &'static str) -> Self {
        self.sort_key = Some(key);
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }
}

#[component]
pub fn ManagedList<T>(
    title: &'static str,
    /// Collection path under /api/
    resource: &'static str,
    columns: Vec<Column<T>>,
    #[prop(optional)]
    search_placeholder: Option<&'static str>,
) -> impl IntoView
where
    T: Identifiable + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let page_size_options = config.page_size_options.clone();
    let state = RwSignal::new(ListViewState::<T>::new(config.default_page_size));
    let source = StoredValue::new(RestResource::<T>::new(resource, config));
    let columns = StoredValue::new(columns);

    let reload = move || {
        let source = source.get_value();
        spawn_local(async move {
            let _ = load_page(&state, &source).await;
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            reload();
        }
    });

    let delete_selected = move || {
        let count = state.with_untracked(|s| s.selection.len());
        if count == 0 {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Удалить выбранные записи ({})?", count))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let source = source.get_value();
        spawn_local(async move {
            match bulk_delete(&state, &source, &source).await {
                Ok(BulkOutcome::Deleted { requested, deleted }) => {
                    if deleted < requested {
                        log::warn!(
                            "{}: {} of {} selected records were already gone",
                            resource,
                            requested - deleted,
                            requested
                        );
                    }
                }
                Ok(BulkOutcome::Skipped) | Ok(BulkOutcome::Detached) => {}
                Err(e) => log::debug!("{}: bulk delete ended with error: {}", resource, e),
            }
        });
    };

    let search = RwSignal::new(String::new());
    let apply_search = move || {
        let changed = state
            .try_update(|s| s.apply_search(&search.get_untracked()))
            .unwrap_or(false);
        if changed {
            reload();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.go_to_page(page));
        reload();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.change_page_size(size));
        reload();
    };

    let items = Signal::derive(move || state.with(|s| s.current.items.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selection.selected_ids()));
    let check_state = Signal::derive(move || state.with(|s| s.check_state()));
    let locked = Signal::derive(move || state.with(|s| s.selection_locked()));
    let busy = Signal::derive(move || state.with(|s| s.loading || s.bulk_in_flight));

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let col = *col;
                let label = match col.sort_key {
                    Some(key) => view! {
                        <div
                            class="table__sortable-header"
                            style="cursor:pointer;"
                            on:click=move |_| {
                                if busy.get_untracked() {
                                    return;
                                }
                                let sorted = state.try_update(|s| s.toggle_sort(key)).unwrap_or(false);
                                if sorted {
                                    reload();
                                }
                            }
                        >
                            {col.title}
                            <span class=move || state.with(|s| get_sort_class(&s.filters, key))>
                                {move || state.with(|s| get_sort_indicator(&s.filters, key))}
                            </span>
                        </div>
                    }
                    .into_any(),
                    None => view! { <span>{col.title}</span> }.into_any(),
                };
                view! {
                    <TableHeaderCell resizable=false min_width=col.min_width>
                        {label}
                    </TableHeaderCell>
                }
            })
            .collect_view()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>
                        {move || state.with(|s| s.current.total_count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=busy
                    >
                        {move || if state.with(|s| s.loading) { "Загрузка..." } else { "Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">
                        <span>{e}</span>
                        <button
                            class="alert__close"
                            on:click=move |_| state.update(|s| s.dismiss_error())
                            title="Закрыть"
                        >
                            "×"
                        </button>
                    </div>
                })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <span class="filter-panel__title">"Поиск"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.current.page_index))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                                total_count=Signal::derive(move || state.with(|s| s.current.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                disabled=busy
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                                page_size_options=page_size_options
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input
                                    value=search
                                    placeholder=search_placeholder.unwrap_or("Поиск...")
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=busy
                            >
                                "Найти"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search.set(String::new());
                                    apply_search();
                                }
                                disabled=busy
                            >
                                "Сбросить"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <BulkActionBar
                    selected_count=Signal::derive(move || state.with(|s| s.selection.len()))
                    in_flight=locked
                    on_delete=Callback::new(move |_| delete_selected())
                    on_clear=Callback::new(move |_| state.update(|s| s.clear_selection()))
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    state=check_state
                                    disabled=locked
                                    on_toggle=Callback::new(move |_| state.update(|s| s.toggle_select_all()))
                                />
                                {header_cells}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|row: &T| row.id().to_string()
                                children=move |row: T| {
                                    let cells = columns.with_value(|cols| {
                                        cols.iter()
                                            .map(|col| {
                                                let text = (col.render)(&row);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()
                                    });
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=row.id().to_string()
                                                selected=selected
                                                disabled=locked
                                                on_change=Callback::new(move |(id, checked): (String, bool)| {
                                                    state.update(|s| s.set_selected(&id, checked));
                                                })
                                            />
                                            {cells}
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
