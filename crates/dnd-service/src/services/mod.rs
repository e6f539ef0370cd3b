//! Business logic services
//!
//! Workflows validate their input, consult the repository ports in a fixed
//! order, and return DTOs or a [`ServiceError`].

pub mod character;
pub mod context;
pub mod error;
pub mod reference;

pub use character::CharacterService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult, ValidationFailure};
pub use reference::ReferenceService;
