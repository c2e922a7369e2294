use thiserror::Error;

/// Ошибка загрузки страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Network failures, timeouts, throttling and 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status(code) => matches!(code, 408 | 429 | 500..=599),
            FetchError::Decode(_) => false,
        }
    }
}

/// Ошибка массового удаления. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server rejected delete: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkActionError {
    /// Nothing was deleted; the selection is untouched.
    #[error("Не удалось удалить: {0}")]
    Delete(#[from] DeleteError),

    /// Deletion went through but the list could not be reloaded.
    #[error("Удалено, но список не обновился: {0}")]
    Refresh(#[from] FetchError),
}
