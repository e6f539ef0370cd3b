//! Service layer error types
//!
//! Expected failures come back as values: a list of broken validation rules,
//! a domain error from a repository, or an internal fault.

use dnd_common::status_for_kind;
use dnd_core::{DomainError, ErrorKind};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Code shared by every validation aggregate
pub const VALIDATION_CODE: &str = "Validation.General";

/// One broken validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Every rule the request broke, detected before any I/O
    #[error("One or more validation errors occurred")]
    Validation(Vec<ValidationFailure>),

    /// Domain rule violation or storage failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Domain(e) => e.kind(),
            Self::Internal(_) => ErrorKind::Failure,
        }
    }

    /// Get the error code for API responses
    pub fn code(&self) -> &str {
        match self {
            Self::Validation(_) => VALIDATION_CODE,
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "Error.Default",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        status_for_kind(self.kind())
    }

    /// Broken rules, empty unless this is a validation error
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Self::Validation(failures) => failures,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut failures: Vec<ValidationFailure> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                errors.iter().map(move |e| {
                    let code = e.code.to_string();
                    let message = e
                        .message
                        .as_ref()
                        .map_or_else(|| code.clone(), |m| m.to_string());
                    ValidationFailure::new(field.clone(), code, message)
                })
            })
            .collect();
        failures.sort_by(|a, b| (&a.field, &a.code).cmp(&(&b.field, &b.code)));
        Self::Validation(failures)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
