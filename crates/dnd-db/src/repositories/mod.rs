//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in dnd-core.
//! Filters and orderings are translated into SQL in [`query`].

mod character;
mod class;
mod error;
mod query;
mod species;
mod unit_of_work;

pub use character::PgCharacterRepository;
pub use class::PgClassRepository;
pub use species::PgSpeciesRepository;
pub use unit_of_work::PgUnitOfWork;
