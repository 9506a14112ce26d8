//! Tripfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the trip planner: activities,
//! the wishlist and the financial summary derived from both. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod activities;
pub mod errors;
pub mod summary;
pub mod validation;
pub mod wishlist;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use validation::ValidationMode;
