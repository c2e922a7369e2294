//! Серверная пагинация: DTO обмена с backend и нормализованная страница.

use serde::{Deserialize, Serialize};

/// Anything a management table can select by a stable string id.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Query parameters of a list request. Serialized as a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page index
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_desc: bool,
}

impl ListQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            search: None,
            sort_by: None,
            sort_desc: false,
        }
    }
}

/// Wire shape of a paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: usize,
    pub page_size: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> PaginatedResponse<T> {
    /// Normalizes the wire response: page index and size are at least 1 and
    /// the item list never exceeds the page size.
    pub fn into_page(self) -> Page<T> {
        let page_size = self.page_size.max(1);
        let mut items = self.items;
        items.truncate(page_size);
        Page {
            page_index: self.page.max(1),
            page_size,
            items,
            total_count: usize::try_from(self.total).unwrap_or(usize::MAX),
        }
    }
}

/// A window over the full item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// 1-based
    pub page_index: usize,
    pub page_size: usize,
    pub items: Vec<T>,
    /// Items across all pages, independent of `items.len()`
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages for `total_count`; an empty collection still has one page.
    pub fn total_pages(&self) -> usize {
        if self.total_count == 0 {
            1
        } else {
            self.total_count.div_ceil(self.page_size.max(1))
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.page_index >= self.total_pages()
    }
}

impl<T: Identifiable> Page<T> {
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(Identifiable::id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteResponse {
    pub deleted: usize,
}
