//! Источники данных для таблиц и массовые операции над ними.

use std::collections::HashSet;
use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::{BatchDeleteRequest, BatchDeleteResponse, ListQuery, Page, PaginatedResponse};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use crate::shared::error::{DeleteError, FetchError};
use crate::shared::retry::retry_with_backoff;

/// Yields one page of a server-backed list.
#[async_trait(?Send)]
pub trait PagedListSource<T> {
    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<T>, FetchError>;
}

/// Performs a remote mutation over a set of ids.
#[async_trait(?Send)]
pub trait BulkActionInvoker {
    /// Returns how many records the server deleted.
    async fn delete_many(&self, ids: &HashSet<String>) -> Result<usize, DeleteError>;
}

/// REST collection under `/api/{path}`.
///
/// - `GET /api/{path}?page=..&page_size=..` returns `PaginatedResponse<T>`
/// - `POST /api/{path}/batch-delete` takes `BatchDeleteRequest`
pub struct RestResource<T> {
    path: &'static str,
    config: AppConfig,
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            config: self.config.clone(),
            _item: PhantomData,
        }
    }
}

impl<T> RestResource<T> {
    pub fn new(path: &'static str, config: AppConfig) -> Self {
        Self {
            path,
            config,
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    fn list_url(&self, query: &ListQuery) -> Result<String, FetchError> {
        let qs = serde_qs::to_string(query).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(format!("{}?{}", api_url(&self.config, &format!("/api/{}", self.path)), qs))
    }

    fn batch_delete_url(&self) -> String {
        api_url(&self.config, &format!("/api/{}/batch-delete", self.path))
    }
}

impl<T: DeserializeOwned> RestResource<T> {
    async fn fetch_once(&self, url: &str) -> Result<Page<T>, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let paginated = response
            .json::<PaginatedResponse<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(paginated.into_page())
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned + 'static> PagedListSource<T> for RestResource<T> {
    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<T>, FetchError> {
        let url = self.list_url(query)?;
        let result = retry_with_backoff(
            &self.config.retry,
            || self.fetch_once(&url),
            FetchError::is_retryable,
            |ms| TimeoutFuture::new(ms),
        )
        .await;

        if let Err(e) = &result {
            log::error!("GET /api/{} page {} failed: {}", self.path, query.page, e);
        }
        result
    }
}

#[async_trait(?Send)]
impl<T: 'static> BulkActionInvoker for RestResource<T> {
    async fn delete_many(&self, ids: &HashSet<String>) -> Result<usize, DeleteError> {
        let mut ids: Vec<String> = ids.iter().cloned().collect();
        ids.sort_unstable();
        let body = BatchDeleteRequest { ids };

        let response = Request::post(&self.batch_delete_url())
            .json(&body)
            .map_err(|e| DeleteError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeleteError::Network(e.to_string()))?;

        if !response.ok() {
            log::error!("batch delete on /api/{} rejected: {}", self.path, response.status());
            return Err(DeleteError::Status(response.status()));
        }

        let result = response
            .json::<BatchDeleteResponse>()
            .await
            .map_err(|e| DeleteError::Decode(e.to_string()))?;
        log::info!("deleted {} record(s) from /api/{}", result.deleted, self.path);
        Ok(result.deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::User;

    fn resource() -> RestResource<User> {
        let config = AppConfig {
            api_base_url: Some("https://api.dive.test".into()),
            ..AppConfig::default()
        };
        RestResource::new("users", config)
    }

    #[test]
    fn test_list_url_carries_query() {
        let mut query = ListQuery::new(2, 25);
        query.search = Some("open water".into());
        query.sort_by = Some("full_name".into());
        query.sort_desc = true;

        let url = resource().list_url(&query).unwrap();
        assert!(url.starts_with("https://api.dive.test/api/users?"));
        assert!(url.contains("page=2"));
        assert!(url.contains("page_size=25"));
        assert!(url.contains("search=open"));
        assert!(url.contains("sort_by=full_name"));
        assert!(url.contains("sort_desc=true"));
    }

    #[test]
    fn test_batch_delete_url() {
        assert_eq!(
            resource().batch_delete_url(),
            "https://api.dive.test/api/users/batch-delete"
        );
    }
}
