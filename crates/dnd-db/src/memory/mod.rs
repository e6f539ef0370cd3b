//! In-process storage backend
//!
//! Implements the same ports as the PostgreSQL repositories, evaluating
//! predicates and orderings directly against entities. Used for the
//! `memory` storage backend and as the test double for the service layer.

mod store;

pub use store::{InMemoryStore, MemoryUnitOfWork};
