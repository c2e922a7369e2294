//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы
//!
//! # Примеры
//!
//! ```text
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || list.with(|s| s.check_state()))
//!     disabled=Signal::derive(move || list.with(|s| s.bulk_in_flight))
//!     on_toggle=Callback::new(move |_| list.update(|s| s.toggle_select_all()))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

use crate::shared::selection::CheckState;

/// Чекбокс "выбрать все" для видимой страницы.
///
/// Shows unchecked, checked and indeterminate states. A click always goes
/// through `on_toggle`, which decides between select-all and deselect-all.
#[component]
pub fn TableHeaderCheckbox(
    /// State computed from the visible page and the selection
    #[prop(into)]
    state: Signal<CheckState>,

    /// Disabled while a bulk action is running
    #[prop(into)]
    disabled: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate существует только как DOM-свойство
    Effect::new(move |_| {
        let indeterminate = matches!(state.get(), CheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckState::Checked)
                prop:disabled=move || disabled.get()
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
