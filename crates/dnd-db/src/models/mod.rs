//! Database models - SQLx-compatible structs for PostgreSQL tables

mod character;
mod class;
mod species;

pub use character::{CharacterClassModel, CharacterModel};
pub use class::ClassModel;
pub use species::SpeciesModel;
