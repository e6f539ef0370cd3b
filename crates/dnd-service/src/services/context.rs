//! Service context - dependency container for services
//!
//! Holds the repository ports needed by the workflows.

use std::sync::Arc;

use dnd_core::traits::{CharacterRepository, ClassRepository, SpeciesRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    character_repo: Arc<dyn CharacterRepository>,
    species_repo: Arc<dyn SpeciesRepository>,
    class_repo: Arc<dyn ClassRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        character_repo: Arc<dyn CharacterRepository>,
        species_repo: Arc<dyn SpeciesRepository>,
        class_repo: Arc<dyn ClassRepository>,
    ) -> Self {
        Self {
            character_repo,
            species_repo,
            class_repo,
        }
    }

    /// Create a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the character repository
    pub fn character_repo(&self) -> &dyn CharacterRepository {
        self.character_repo.as_ref()
    }

    /// Get the species repository
    pub fn species_repo(&self) -> &dyn SpeciesRepository {
        self.species_repo.as_ref()
    }

    /// Get the class repository
    pub fn class_repo(&self) -> &dyn ClassRepository {
        self.class_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    character_repo: Option<Arc<dyn CharacterRepository>>,
    species_repo: Option<Arc<dyn SpeciesRepository>>,
    class_repo: Option<Arc<dyn ClassRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn character_repo(mut self, repo: Arc<dyn CharacterRepository>) -> Self {
        self.character_repo = Some(repo);
        self
    }

    pub fn species_repo(mut self, repo: Arc<dyn SpeciesRepository>) -> Self {
        self.species_repo = Some(repo);
        self
    }

    pub fn class_repo(mut self, repo: Arc<dyn ClassRepository>) -> Self {
        self.class_repo = Some(repo);
        self
    }

    /// Use one store for every port
    pub fn store<S>(self, store: S) -> Self
    where
        S: CharacterRepository + SpeciesRepository + ClassRepository + 'static,
    {
        let store = Arc::new(store);
        self.character_repo(store.clone())
            .species_repo(store.clone())
            .class_repo(store)
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.character_repo
                .ok_or_else(|| ServiceError::internal("character_repo is required"))?,
            self.species_repo
                .ok_or_else(|| ServiceError::internal("species_repo is required"))?,
            self.class_repo
                .ok_or_else(|| ServiceError::internal("class_repo is required"))?,
        ))
    }
}
