use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy of the films module.
///
/// Precondition violations are distinct variants so callers (and a future
/// transport layer) can map each kind to a stable response. Collaborator
/// failures are carried without translation; the core performs no retry
/// or fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API credential is required")]
    CredentialRequired,

    #[error("Film name to search for is required")]
    NameRequired,

    #[error("Film identifier is required")]
    IdentifierRequired,

    #[error("Page number can not be less than 0")]
    PageNumberNegative,

    #[error("Elements on page can not be less than 0")]
    PageSizeNegative,

    #[error("Rating can not be less than 1 or greater than 10")]
    RatingOutOfRange,

    #[error("Could not find film with identifier {0}")]
    FilmNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                401 | 403 => {
                    AppError::Unauthorized("Not authorized to access external service".to_string())
                }
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
