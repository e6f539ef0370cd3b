//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use dnd_core::CharacterId;

use crate::response::ApiError;

/// Character id taken from the `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct CharacterIdPath(pub CharacterId);

#[async_trait]
impl<S> FromRequestParts<S> for CharacterIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse()
            .map(CharacterIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid character id format"))
    }
}
