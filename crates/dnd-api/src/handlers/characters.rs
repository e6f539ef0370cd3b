//! Character handlers
//!
//! Endpoints for creating and listing characters.

use axum::{extract::State, Json};
use dnd_service::{
    CharacterResponse, CharacterService, CreateCharacterRequest, CreatedCharacterResponse,
    PaginatedResponse,
};

use crate::extractors::{CharacterIdPath, CharacterQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new character
///
/// POST /api/characters
pub async fn create_character(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCharacterRequest>,
) -> ApiResult<Created<Json<CreatedCharacterResponse>>> {
    let service = CharacterService::new(state.service_context());
    let response = service.create_character(request).await?;
    Ok(Created(Json(response)))
}

/// List characters
///
/// GET /api/characters?page-index=&page-size=&order-asc=&order-key=&filter-name=&filter-species=&filter-classes=
pub async fn get_characters(
    State(state): State<AppState>,
    CharacterQuery(request): CharacterQuery,
) -> ApiResult<Json<PaginatedResponse<CharacterResponse>>> {
    let service = CharacterService::new(state.service_context());
    let response = service.get_characters(request).await?;
    Ok(Json(response))
}

/// Get character by ID
///
/// GET /api/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    CharacterIdPath(id): CharacterIdPath,
) -> ApiResult<Json<CharacterResponse>> {
    let service = CharacterService::new(state.service_context());
    let response = service.get_character(id).await?;
    Ok(Json(response))
}
