//! Financial summary - budget figures aggregated over activities and wishlist.

mod summary_model;
mod summary_service;
mod summary_traits;

pub use summary_model::{BudgetTotals, FinancialSummary};
pub use summary_service::SummaryService;
pub use summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
