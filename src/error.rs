//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration resolution error (malformed environment value).
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation after parsing.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (socket bind, serving).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
