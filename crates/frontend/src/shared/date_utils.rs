/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the tables
use chrono::{DateTime, NaiveDate};

/// Format RFC 3339 timestamp to DD.MM.YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
/// Anything unparsable is shown as is.
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// "02.05.2026 – 09.05.2026"
pub fn format_date_range(from: NaiveDate, to: NaiveDate) -> String {
    format!("{} – {}", format_date(from), format_date(to))
}
