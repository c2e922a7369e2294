use contracts::domain::a102_order::aggregate::Order;
use leptos::prelude::*;

use crate::shared::components::managed_list::{Column, ManagedList};
use crate::shared::date_utils::format_datetime;

/// Сумма с разделителем тысяч: 12 345.50 EUR
fn format_money(amount: f64, currency: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{}{}.{:02} {}", sign, grouped, cents % 100, currency)
}

fn status_label(status: &str) -> String {
    let label = match status {
        "pending" => "Ожидает оплаты",
        "paid" => "Оплачен",
        "shipped" => "Отправлен",
        "refunded" => "Возврат",
        "cancelled" => "Отменён",
        other => other,
    };
    label.to_string()
}

fn columns() -> Vec<Column<Order>> {
    vec![
        Column::new("Номер", |o: &Order| o.order_number.clone()).sortable("order_number"),
        Column::new("Клиент", |o: &Order| o.customer_name.clone())
            .sortable("customer_name")
            .min_width(160.0),
        Column::new("Email", |o: &Order| o.customer_email.clone()).min_width(160.0),
        Column::new("Сумма", |o: &Order| format_money(o.total_amount, &o.currency))
            .sortable("total_amount"),
        Column::new("Статус", |o: &Order| status_label(&o.status)).sortable("status"),
        Column::new("Создан", |o: &Order| format_datetime(&o.created_at))
            .sortable("created_at")
            .min_width(130.0),
    ]
}

#[component]
pub fn OrdersListPage() -> impl IntoView {
    view! {
        <ManagedList
            title="Заказы"
            resource="orders"
            columns=columns()
            search_placeholder="Номер, клиент или email..."
        />
    }
}
