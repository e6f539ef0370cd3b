//! Reference data handlers

use axum::{extract::State, Json};
use dnd_service::{ClassResponse, ReferenceService, SpeciesResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/species
pub async fn list_species(State(state): State<AppState>) -> ApiResult<Json<Vec<SpeciesResponse>>> {
    let species = ReferenceService::new(state.service_context())
        .list_species()
        .await?;
    Ok(Json(species))
}

/// GET /api/classes
pub async fn list_classes(State(state): State<AppState>) -> ApiResult<Json<Vec<ClassResponse>>> {
    let classes = ReferenceService::new(state.service_context())
        .list_classes()
        .await?;
    Ok(Json(classes))
}
