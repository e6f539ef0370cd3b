//! Domain errors - error types for the domain layer
//!
//! Every expected failure is a value of [`DomainError`]; callers receive it through
//! `Result` and never through a panic. The [`ErrorKind`] of an error is what the
//! boundary layer uses to pick a response status.

use std::fmt;

use thiserror::Error;

use crate::value_objects::CharacterId;

/// Category of a failure, independent of any transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structural input error
    Validation,
    /// A referenced entity does not exist
    NotFound,
    /// A uniqueness rule was violated
    Conflict,
    /// Unexpected or infrastructure failure
    Failure,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("The specified specie doesn't exist.")]
    NonExistingSpecie(String),

    #[error("The specified class doesn't exist.")]
    NonExistingClass(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Level must be between 1 and 20, got {0}")]
    InvalidLevel(i32),

    #[error("Stat value must be between 0 and 18, got {0}")]
    InvalidStat(i32),

    #[error("Class '{0}' appears more than once")]
    DuplicateClass(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A character with the same name and player name already exists.")]
    CharacterAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CharacterNotFound(_) => "CharacterError.NotFound",
            Self::NonExistingSpecie(_) => "CharacterError.NonExistingSpecie",
            Self::NonExistingClass(_) => "CharacterError.NonExistingClass",

            // Validation
            Self::InvalidLevel(_) => "Level.OutOfRange",
            Self::InvalidStat(_) => "Stat.OutOfRange",
            Self::DuplicateClass(_) => "CharacterError.DuplicateClass",
            Self::ValidationError(_) => "Validation.General",

            // Conflict
            Self::CharacterAlreadyExists => "CharacterError.AlreadyExists",

            // Infrastructure
            Self::DatabaseError(_) => "Error.Database",
            Self::InternalError(_) => "Error.Default",
        }
    }

    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CharacterNotFound(_) | Self::NonExistingSpecie(_) | Self::NonExistingClass(_) => {
                ErrorKind::NotFound
            }
            Self::InvalidLevel(_)
            | Self::InvalidStat(_)
            | Self::DuplicateClass(_)
            | Self::ValidationError(_) => ErrorKind::Validation,
            Self::CharacterAlreadyExists => ErrorKind::Conflict,
            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Failure,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    /// Check if this is an infrastructure failure
    pub fn is_failure(&self) -> bool {
        self.kind() == ErrorKind::Failure
    }
}
