//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки
//!
//! # Примеры
//!
//! ```text
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     selected=selected
//!     disabled=locked
//!     on_change=Callback::new(move |(id, checked)| {
//!         list.update(|s| s.set_selected(&id, checked));
//!     })
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Компонент чекбокса в ячейке таблицы
///
/// Stops click propagation so that the row click handler does not fire.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_id: String,

    /// Выбранные ID (across all pages)
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    #[prop(into)]
    disabled: Signal<bool>,

    /// Callback при изменении (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&item_id_for_checked))
                prop:disabled=move || disabled.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id.clone(), checked));
                }
            />
        </TableCell>
    }
}
