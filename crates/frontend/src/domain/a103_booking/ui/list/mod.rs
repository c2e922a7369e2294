use contracts::domain::a103_booking::aggregate::Booking;
use leptos::prelude::*;

use crate::shared::components::managed_list::{Column, ManagedList};
use crate::shared::date_utils::{format_date, format_datetime};

fn columns() -> Vec<Column<Booking>> {
    vec![
        Column::new("Курс", |b: &Booking| b.course_title.clone())
            .sortable("course_title")
            .min_width(180.0),
        Column::new("Клиент", |b: &Booking| b.customer_name.clone())
            .sortable("customer_name")
            .min_width(160.0),
        Column::new("Дата", |b: &Booking| format_date(b.scheduled_date)).sortable("scheduled_date"),
        Column::new("Участники", |b: &Booking| b.participants.to_string()),
        Column::new("Статус", |b: &Booking| b.status.clone()).sortable("status"),
        Column::new("Создано", |b: &Booking| format_datetime(&b.created_at))
            .sortable("created_at")
            .min_width(130.0),
    ]
}

#[component]
pub fn BookingsListPage() -> impl IntoView {
    view! {
        <ManagedList
            title="Бронирования"
            resource="bookings"
            columns=columns()
            search_placeholder="Курс или клиент..."
        />
    }
}
