//! SQLite storage implementation for the financial summary.

mod repository;

pub use repository::SummaryRepository;
