//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for workflow inputs
//! - Response DTOs for serializing workflow outputs

pub mod requests;
pub mod responses;

pub use requests::{ClassRequest, CreateCharacterRequest, GetCharactersRequest};

pub use responses::{
    CharacterResponse, ClassLevelResponse, ClassResponse, CreatedCharacterResponse, HealthChecks,
    HealthResponse, PageMeta, PaginatedResponse, ReadinessResponse, SpeciesResponse,
    StatResponse,
};
