// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Seed file missing, unreadable, or malformed. Fatal at startup.
    #[error("Seed error: {0}")]
    Seed(String),

    /// Non-200 response from the vacancy API. Caught per-company by the
    /// ingestion run; never retried.
    #[error("Upstream error: API returned status {status}")]
    Upstream { status: u16 },

    /// Malformed vacancy record (missing required field, bad timestamp).
    /// The ingestion run skips the record and logs.
    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite
// by converting to AppError::Database(String)
