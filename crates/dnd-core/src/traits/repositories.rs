//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Character, ClassDefinition, Species};
use crate::error::DomainError;
use crate::query::{CharacterFilter, Order, Page, PaginatedResult};
use crate::value_objects::CharacterId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Character Repository
// ============================================================================

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Check whether a character with exactly this name and player name exists
    async fn exists(&self, name: &str, player_name: &str) -> RepoResult<bool>;

    /// Find a character by ID with species and classes resolved
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>>;

    /// Filter, count, order and slice
    ///
    /// `total_amount` counts every character matching `filter`, regardless of `page`.
    async fn find_page(
        &self,
        page: Page,
        order: &Order,
        filter: &CharacterFilter,
    ) -> RepoResult<PaginatedResult<Character>>;

    /// Start a unit of work for staged writes
    fn begin(&self) -> Box<dyn UnitOfWork>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

// ============================================================================
// Unit of Work
// ============================================================================

/// Transactional boundary for character writes
///
/// Staging is in memory only. Nothing becomes durable until [`UnitOfWork::commit`]
/// succeeds, and a unit of work dropped before that leaves no trace.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Stage a new character together with all of its class memberships
    fn save_character(&mut self, character: Character);

    /// Number of staged characters
    fn pending(&self) -> usize;

    /// Persist everything staged, all or nothing, returning the affected row count
    async fn commit(&mut self) -> RepoResult<u64>;
}

// ============================================================================
// Species Repository
// ============================================================================

#[async_trait]
pub trait SpeciesRepository: Send + Sync {
    /// Find species by name, ignoring case
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Species>>;

    /// List every species
    async fn find_all(&self) -> RepoResult<Vec<Species>>;
}

// ============================================================================
// Class Repository
// ============================================================================

#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Find a class by name, ignoring case
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ClassDefinition>>;

    /// List every class
    async fn find_all(&self) -> RepoResult<Vec<ClassDefinition>>;

    /// Check if a class exists, ignoring case
    async fn exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}
