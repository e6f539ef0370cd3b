//! # dnd-core
//!
//! Domain layer containing entities, value objects, query primitives and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Character, ClassDefinition, DndClass, Size, Species};
pub use error::{DomainError, ErrorKind};
pub use query::{
    CharacterFilter, CharacterFilterBuilder, CharacterOrderBuilder, CharacterOrdering,
    CharacterPredicate, FilterBuilder, Order, OrderBuilder, OrderKey, Page, PaginatedResult,
    SortDirection,
};
pub use traits::{
    CharacterRepository, ClassRepository, RepoResult, SpeciesRepository, UnitOfWork,
};
pub use value_objects::{
    CharacterId, CharacterIdParseError, Level, Stat, StatType, Stats,
};
