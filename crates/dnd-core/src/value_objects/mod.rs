//! Value objects - immutable types that represent domain concepts

mod character_id;
mod level;
mod stat;

pub use character_id::{CharacterId, CharacterIdParseError};
pub use level::Level;
pub use stat::{Stat, StatType, Stats};
