/// Утилиты заголовков сортируемых колонок
use crate::shared::list_state::ListFilters;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(filters: &ListFilters, field: &str) -> &'static str {
    if filters.sort_field.as_deref() == Some(field) {
        if filters.sort_ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(filters: &ListFilters, field: &str) -> &'static str {
    if filters.sort_field.as_deref() == Some(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
