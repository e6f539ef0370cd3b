//! Integration test utilities for the character service
//!
//! Spawns the full HTTP server on an ephemeral port and drives it
//! over real TCP with reqwest.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
