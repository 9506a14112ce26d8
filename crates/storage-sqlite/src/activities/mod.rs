//! SQLite storage implementation for activities.

mod model;
mod repository;

pub use model::{ActivityDB, NewActivityDB};
pub use repository::ActivityRepository;
