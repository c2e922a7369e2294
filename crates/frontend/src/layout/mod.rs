pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +---------+------------------------------+
/// | Sidebar |          Content             |
/// +---------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left">
                    <Sidebar />
                </div>
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
