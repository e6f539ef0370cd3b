//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod characters;
pub mod health;
pub mod reference;
