use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::components::managed_list::{Column, ManagedList};
use crate::shared::date_utils::format_datetime;

fn role_label(role: &str) -> String {
    match role {
        "admin" => "Админ".to_string(),
        "instructor" => "Инструктор".to_string(),
        "customer" => "Клиент".to_string(),
        other => other.to_string(),
    }
}

fn status_label(is_active: bool) -> String {
    let label = if is_active { "Активен" } else { "Заблок." };
    label.to_string()
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("ФИО", |u: &User| u.full_name.clone())
            .sortable("full_name")
            .min_width(160.0),
        Column::new("Email", |u: &User| u.email.clone())
            .sortable("email")
            .min_width(160.0),
        Column::new("Телефон", |u: &User| u.phone.clone().unwrap_or_else(|| "-".to_string())),
        Column::new("Роль", |u: &User| role_label(&u.role)).sortable("role"),
        Column::new("Статус", |u: &User| status_label(u.is_active)).sortable("is_active"),
        Column::new("Создан", |u: &User| format_datetime(&u.created_at))
            .sortable("created_at")
            .min_width(130.0),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <ManagedList
            title="Пользователи"
            resource="users"
            columns=columns()
            search_placeholder="ФИО, email или телефон..."
        />
    }
}
