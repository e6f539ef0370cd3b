//! Character entity - the aggregate root of this domain

use std::collections::HashSet;

use crate::entities::{DndClass, Species};
use crate::error::DomainError;
use crate::value_objects::{CharacterId, Stats};

/// A player character
///
/// Always carries a species and exactly one main class. Secondary classes are
/// held separately; no two memberships share a (case-insensitive) class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub player_name: String,
    pub stats: Stats,
    pub species: Species,
    pub main_class: DndClass,
    pub classes: Vec<DndClass>,
}

impl Character {
    /// Assemble a character with default stats
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        player_name: impl Into<String>,
        species: Species,
        main_class: DndClass,
        classes: Vec<DndClass>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(classes.len() + 1);
        for class in std::iter::once(&main_class).chain(&classes) {
            if !seen.insert(class.normalized_name()) {
                return Err(DomainError::DuplicateClass(class.name.clone()));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            player_name: player_name.into(),
            stats: Stats::default(),
            species,
            main_class,
            classes,
        })
    }

    /// Replace the ability scores
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Every class membership, main class first
    pub fn all_classes(&self) -> impl Iterator<Item = &DndClass> {
        std::iter::once(&self.main_class).chain(self.classes.iter())
    }

    /// Number of class memberships including the main class
    pub fn class_count(&self) -> usize {
        1 + self.classes.len()
    }

    #[inline]
    pub fn is_multiclassed(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Case-insensitive membership check over main and secondary classes
    pub fn has_class(&self, name: &str) -> bool {
        let name = name.to_uppercase();
        self.all_classes().any(|c| c.normalized_name() == name)
    }

    /// Sum of levels across all classes
    pub fn total_level(&self) -> u32 {
        self.all_classes().map(|c| u32::from(c.level.value())).sum()
    }
}
