//! # Polls Infrastructure
//!
//! Concrete implementations of the ports defined in `polls-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod memory;

pub use database::DatabaseConnections;
pub use memory::InMemoryPollStore;
