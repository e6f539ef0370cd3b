//! Character listing query extractor
//!
//! Reads paging, ordering and filtering from kebab-case query parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use dnd_core::query::{CharacterFilter, Order, Page};
use dnd_service::GetCharactersRequest;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw listing query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CharacterQueryParams {
    pub page_index: Option<i32>,
    pub page_size: Option<i32>,
    pub order_asc: Option<bool>,
    pub order_key: Option<String>,
    pub filter_name: Option<String>,
    /// Comma-separated species names
    pub filter_species: Option<String>,
    /// Comma-separated class names
    pub filter_classes: Option<String>,
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

impl From<CharacterQueryParams> for GetCharactersRequest {
    fn from(params: CharacterQueryParams) -> Self {
        // page and order only apply when fully specified
        let page = params
            .page_index
            .zip(params.page_size)
            .map(|(index, size)| Page::new(index, size));
        let order = params
            .order_asc
            .zip(params.order_key)
            .map(|(ascending, key)| Order { key, ascending });

        let mut filter = CharacterFilter::new()
            .with_species(split_list(params.filter_species))
            .with_classes(split_list(params.filter_classes));
        filter.name = params.filter_name.filter(|n| !n.is_empty());

        Self {
            page,
            order,
            filter,
        }
    }
}

/// Listing request extracted from the query string
#[derive(Debug, Clone)]
pub struct CharacterQuery(pub GetCharactersRequest);

#[async_trait]
impl<S> FromRequestParts<S> for CharacterQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<CharacterQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(CharacterQuery(params.into()))
    }
}
