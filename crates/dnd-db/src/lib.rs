//! # dnd-db
//!
//! Storage layer implementing the dnd-core repository ports.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repositories, with filters and orderings compiled to SQL
//! - An in-memory store implementing the same ports
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dnd_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use dnd_db::repositories::PgCharacterRepository;
//! use dnd_core::traits::CharacterRepository;
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let characters = PgCharacterRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryStore, MemoryUnitOfWork};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATOR};
pub use repositories::{
    PgCharacterRepository, PgClassRepository, PgSpeciesRepository, PgUnitOfWork,
};
