use contracts::domain::a101_trip::aggregate::Trip;
use leptos::prelude::*;

use crate::shared::components::managed_list::{Column, ManagedList};
use crate::shared::date_utils::format_date_range;

/// "9 / 12"
fn occupancy(trip: &Trip) -> String {
    format!("{} / {}", trip.booked_seats.min(trip.capacity), trip.capacity)
}

fn columns() -> Vec<Column<Trip>> {
    vec![
        Column::new("Название", |t: &Trip| t.title.clone())
            .sortable("title")
            .min_width(180.0),
        Column::new("Направление", |t: &Trip| t.destination.clone()).sortable("destination"),
        Column::new("Даты", |t: &Trip| format_date_range(t.departure_date, t.return_date))
            .sortable("departure_date")
            .min_width(180.0),
        Column::new("Места", occupancy),
        Column::new("Свободно", |t: &Trip| t.free_seats().to_string()),
        Column::new("Статус", |t: &Trip| t.status.label().to_string()).sortable("status"),
    ]
}

#[component]
pub fn TripsListPage() -> impl IntoView {
    view! {
        <ManagedList
            title="Поездки"
            resource="trips"
            columns=columns()
            search_placeholder="Название или направление..."
        />
    }
}
