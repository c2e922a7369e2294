use crate::domain::a101_trip::ui::list::TripsListPage;
use crate::domain::a102_order::ui::list::OrdersListPage;
use crate::domain::a103_booking::ui::list::BookingsListPage;
use crate::layout::Shell;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page__content">"Страница не найдена"</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/bookings" /> } />
                    <Route path=path!("/users") view=UsersListPage />
                    <Route path=path!("/trips") view=TripsListPage />
                    <Route path=path!("/orders") view=OrdersListPage />
                    <Route path=path!("/bookings") view=BookingsListPage />
                </Routes>
            </Shell>
        </Router>
    }
}
