//! Shared in-memory state and its repository implementations

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use dnd_core::entities::{Character, ClassDefinition, Size, Species};
use dnd_core::error::DomainError;
use dnd_core::query::{
    CharacterFilter, CharacterFilterBuilder, CharacterOrderBuilder, FilterBuilder, Order,
    OrderBuilder, Page, PaginatedResult,
};
use dnd_core::traits::{
    CharacterRepository, ClassRepository, RepoResult, SpeciesRepository, UnitOfWork,
};
use dnd_core::value_objects::CharacterId;

#[derive(Debug, Default)]
struct MemoryState {
    species: Vec<Species>,
    classes: Vec<ClassDefinition>,
    characters: Vec<Character>,
}

impl MemoryState {
    fn has_species(&self, name: &str) -> bool {
        self.species.iter().any(|s| s.is_named(name))
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c.is_named(name))
    }

    fn has_character(&self, name: &str, player_name: &str) -> bool {
        self.characters
            .iter()
            .any(|c| c.name == name && c.player_name == player_name)
    }

    /// Same checks the database enforces through foreign keys and the unique index
    fn check_insertable(&self, character: &Character) -> RepoResult<()> {
        if self.has_character(&character.name, &character.player_name) {
            return Err(DomainError::CharacterAlreadyExists);
        }
        if !self.has_species(&character.species.name) {
            return Err(DomainError::NonExistingSpecie(character.species.name.clone()));
        }
        if let Some(missing) = character.all_classes().find(|c| !self.has_class(&c.name)) {
            return Err(DomainError::NonExistingClass(missing.name.clone()));
        }
        Ok(())
    }
}

/// Thread-safe in-memory store implementing every repository port
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    /// Empty store without reference data
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the same reference data the database migrations seed
    pub fn seeded() -> Self {
        Self::new()
            .with_species(Species::new("Dragonborn", 30, Size::Medium))
            .with_species(Species::new("Dwarf", 25, Size::Medium))
            .with_species(Species::new("Human", 30, Size::Medium))
            .with_class(ClassDefinition::new("Artificer"))
            .with_class(ClassDefinition::new("Barbarian"))
            .with_class(ClassDefinition::new("Bard"))
    }

    pub fn with_species(self, species: Species) -> Self {
        self.state.write().species.push(species);
        self
    }

    pub fn with_class(self, class: ClassDefinition) -> Self {
        self.state.write().classes.push(class);
        self
    }

    /// Insert directly, bypassing the unit of work
    pub fn insert_character(&self, character: Character) -> RepoResult<()> {
        let mut state = self.state.write();
        state.check_insertable(&character)?;
        state.characters.push(character);
        Ok(())
    }

    /// Snapshot of every stored character in insertion order
    pub fn characters(&self) -> Vec<Character> {
        self.state.read().characters.clone()
    }
}

#[async_trait]
impl CharacterRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn exists(&self, name: &str, player_name: &str) -> RepoResult<bool> {
        Ok(self.state.read().has_character(name, player_name))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>> {
        Ok(self
            .state
            .read()
            .characters
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        page: Page,
        order: &Order,
        filter: &CharacterFilter,
    ) -> RepoResult<PaginatedResult<Character>> {
        if !page.is_valid() {
            return Err(DomainError::ValidationError(format!(
                "invalid page: index {}, size {}",
                page.index, page.size
            )));
        }

        let predicate = CharacterFilterBuilder::new(filter).build();
        let ordering = CharacterOrderBuilder::new(order).build();

        let mut matching: Vec<Character> = self
            .state
            .read()
            .characters
            .iter()
            .filter(|c| predicate.matches(c))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        ordering.sort(&mut matching);

        let values = match page.bounds() {
            Some((offset, limit)) => matching.into_iter().skip(offset).take(limit).collect(),
            None => matching,
        };

        debug!(total, returned = values.len(), "Character page loaded");
        Ok(PaginatedResult::new(values, total))
    }

    fn begin(&self) -> Box<dyn UnitOfWork> {
        Box::new(MemoryUnitOfWork {
            state: Arc::clone(&self.state),
            staged: Vec::new(),
        })
    }
}

#[async_trait]
impl SpeciesRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Species>> {
        Ok(self
            .state
            .read()
            .species
            .iter()
            .find(|s| s.is_named(name))
            .cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Species>> {
        let mut species = self.state.read().species.clone();
        species.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(species)
    }
}

#[async_trait]
impl ClassRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ClassDefinition>> {
        Ok(self
            .state
            .read()
            .classes
            .iter()
            .find(|c| c.is_named(name))
            .cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<ClassDefinition>> {
        let mut classes = self.state.read().classes.clone();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(classes)
    }
}

/// Unit of work over an [`InMemoryStore`]
///
/// Every staged character is checked under the write lock before any is
/// inserted, so a failed commit changes nothing.
pub struct MemoryUnitOfWork {
    state: Arc<RwLock<MemoryState>>,
    staged: Vec<Character>,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn save_character(&mut self, character: Character) {
        self.staged.push(character);
    }

    fn pending(&self) -> usize {
        self.staged.len()
    }

    async fn commit(&mut self) -> RepoResult<u64> {
        let mut state = self.state.write();

        for (i, character) in self.staged.iter().enumerate() {
            state.check_insertable(character)?;
            let clashes_with_staged = self.staged[..i].iter().any(|earlier| {
                earlier.name == character.name && earlier.player_name == character.player_name
            });
            if clashes_with_staged {
                return Err(DomainError::CharacterAlreadyExists);
            }
        }

        // one characters row plus one character_classes row per membership
        let affected: u64 = self
            .staged
            .iter()
            .map(|c| 1 + c.class_count() as u64)
            .sum();
        state.characters.append(&mut self.staged);
        Ok(affected)
    }
}
