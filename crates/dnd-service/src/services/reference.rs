//! Reference data service
//!
//! Read-only access to the species and class catalogs.

use tracing::instrument;

use crate::dto::{ClassResponse, SpeciesResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Species and class catalog queries
pub struct ReferenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReferenceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every species, by name
    #[instrument(skip(self))]
    pub async fn list_species(&self) -> ServiceResult<Vec<SpeciesResponse>> {
        let species = self.ctx.species_repo().find_all().await?;
        Ok(species.into_iter().map(SpeciesResponse::from).collect())
    }

    /// Every class, by name
    #[instrument(skip(self))]
    pub async fn list_classes(&self) -> ServiceResult<Vec<ClassResponse>> {
        let classes = self.ctx.class_repo().find_all().await?;
        Ok(classes.into_iter().map(ClassResponse::from).collect())
    }
}
