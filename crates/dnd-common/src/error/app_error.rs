//! Application error types
//!
//! Startup and infrastructure errors, plus the status mapping shared by every
//! layer that reports errors over HTTP.

use dnd_core::{DomainError, ErrorKind};
use serde::Serialize;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Server lifecycle errors
    #[error("Server error: {0}")]
    Server(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// HTTP status code for an error category
#[must_use]
pub fn status_for_kind(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        ErrorKind::Failure => 500,
    }
}

impl AppError {
    /// Get the error category
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::Config(_) | Self::Database(_) | Self::Server(_) | Self::Internal(_) => {
                ErrorKind::Failure
            }
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        status_for_kind(self.kind())
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "Error.Config",
            Self::Database(_) => "Error.Database",
            Self::Server(_) => "Error.Server",
            Self::Internal(_) => "Error.Default",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The body sent for any unexpected failure; never carries internals
    pub fn server_failure() -> Self {
        Self::new("Error.Default", "An unexpected error occurred")
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        if err.is_server_error() {
            return Self::server_failure();
        }
        Self::new(err.error_code(), err.to_string())
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
