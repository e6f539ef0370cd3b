//! Entity to model mappers
//!
//! This module provides conversions between domain entities (dnd-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod character;
mod class;
mod species;

pub use character::{character_with_classes, CharacterClassInsert, CharacterInsert};
