//! Domain entities - core business objects

mod character;
mod class;
mod species;

pub use character::Character;
pub use class::{ClassDefinition, DndClass};
pub use species::{Size, Species};
