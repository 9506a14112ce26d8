//! SQLite storage implementation for Tripfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `tripfolio-core` and contains:
//! - Database connection pooling and per-operation connection handling
//! - Diesel migrations
//! - Repository implementations for activities, the wishlist and the summary
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod activities;
pub mod summary;
pub mod wishlist;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, list_tables, ping, run_migrations, DbConnection,
    DbExecutor, DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from tripfolio-core for convenience
pub use tripfolio_core::errors::{DatabaseError, Error, Result};
