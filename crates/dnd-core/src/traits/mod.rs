//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CharacterRepository, ClassRepository, RepoResult, SpeciesRepository, UnitOfWork,
};
