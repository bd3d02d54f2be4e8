//! Error Handling
//!
//! Unified error types for the tracker.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Page number outside the tracked range [1, 604]
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// Percentage outside [0, 100]
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Batch range with start > end or out-of-bounds endpoints
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Operation not valid for the page's current status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Import payload not parseable as a page collection
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(String),

    /// SQLite errors (auto-converted from rusqlite::Error)
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an invalid page error
    pub fn invalid_page(msg: impl Into<String>) -> Self {
        Self::InvalidPage(msg.into())
    }

    /// Create an invalid percentage error
    pub fn invalid_percentage(msg: impl Into<String>) -> Self {
        Self::InvalidPercentage(msg.into())
    }

    /// Create an invalid range error
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create a malformed import error
    pub fn malformed_import(msg: impl Into<String>) -> Self {
        Self::MalformedImport(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

/// Convert AppError to a string suitable for UI-facing collaborators
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
