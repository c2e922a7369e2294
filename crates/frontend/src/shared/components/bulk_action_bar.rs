use leptos::prelude::*;
use thaw::*;

/// Панель массовых действий над выбранными строками.
///
/// Hidden while nothing is selected. Buttons are disabled while an action
/// is in flight so a double click cannot submit twice.
#[component]
pub fn BulkActionBar(
    #[prop(into)]
    selected_count: Signal<usize>,

    #[prop(into)]
    in_flight: Signal<bool>,

    on_delete: Callback<()>,

    on_clear: Callback<()>,
) -> impl IntoView {
    let visible = move || selected_count.get() > 0 || in_flight.get();

    view! {
        <Show when=visible>
            <div class="bulk-action-bar">
                <span class="bulk-action-bar__count">
                    {move || format!("Выбрано: {}", selected_count.get())}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_clear.run(())
                    disabled=in_flight
                >
                    "Снять выбор"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_delete.run(())
                    disabled=in_flight
                >
                    {move || if in_flight.get() { "Удаление..." } else { "Удалить выбранные" }}
                </Button>
            </div>
        </Show>
    }
}
