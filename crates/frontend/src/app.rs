use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::debug!(
        "config: page size {}, {} retries",
        config.default_page_size,
        config.retry.max_retries
    );
    // Each list reads the config from context when it mounts
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
