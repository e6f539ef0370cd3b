//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, path ids and listing queries.

mod path;
mod query;
mod validated;

pub use path::CharacterIdPath;
pub use query::{CharacterQuery, CharacterQueryParams};
pub use validated::ValidatedJson;
