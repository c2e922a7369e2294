use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (href, label)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Продажи",
            items: vec![("/bookings", "Бронирования"), ("/orders", "Заказы")],
        },
        MenuGroup {
            label: "Каталог",
            items: vec![("/trips", "Поездки")],
        },
        MenuGroup {
            label: "Администрирование",
            items: vec![("/users", "Пользователи")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <A href=href attr:class="sidebar__item">
                                            {label}
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
