//! # dnd-service
//!
//! Application layer: the character workflows, their request validation,
//! and the DTOs exchanged with the HTTP boundary.
//!
//! Services borrow a [`ServiceContext`] holding the repository ports, so the
//! same workflows run against PostgreSQL or the in-memory store.

pub mod dto;
pub mod services;

pub use dto::{
    CharacterResponse, ClassRequest, ClassResponse, CreateCharacterRequest,
    CreatedCharacterResponse, GetCharactersRequest, HealthResponse, PageMeta, PaginatedResponse,
    ReadinessResponse, SpeciesResponse,
};
pub use services::{
    CharacterService, ReferenceService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, ValidationFailure,
};
