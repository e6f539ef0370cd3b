//! Query primitives - which slice, sorted by what, matching what
//!
//! Everything here is storage agnostic. [`CharacterPredicate`] and
//! [`CharacterOrdering`] are plain data: an in-memory store evaluates them
//! directly and a database adapter translates them into its own query language.

mod builder;
mod filter;
mod order;
mod page;
mod predicate;

pub use builder::{CharacterFilterBuilder, CharacterOrderBuilder, FilterBuilder, OrderBuilder};
pub use filter::CharacterFilter;
pub use order::{CharacterOrdering, Order, OrderKey, SortDirection};
pub use page::{Page, PaginatedResult};
pub use predicate::CharacterPredicate;
