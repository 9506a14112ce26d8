use log::{debug, error};
use std::sync::Arc;

use super::summary_model::FinancialSummary;
use super::summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
use crate::errors::{Error, Result};
use async_trait::async_trait;

pub struct SummaryService<T: SummaryRepositoryTrait> {
    summary_repo: Arc<T>,
}

impl<T: SummaryRepositoryTrait> SummaryService<T> {
    pub fn new(summary_repo: Arc<T>) -> Self {
        SummaryService { summary_repo }
    }
}

#[async_trait]
impl<T: SummaryRepositoryTrait> SummaryServiceTrait for SummaryService<T> {
    async fn get_financial_summary(&self) -> Result<FinancialSummary> {
        let totals = self.summary_repo.load_budget_totals().await?;
        debug!("Budget totals: {:?}", totals);
        let summary = FinancialSummary::from(totals);
        // Each stored amount is finite, but their sums can still overflow.
        if !summary.is_finite() {
            error!("Budget totals overflow: {:?}", totals);
            return Err(Error::Unexpected("budget totals overflow".to_string()));
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DatabaseError;
    use crate::summary::BudgetTotals;

    struct FixedTotals(BudgetTotals);

    #[async_trait]
    impl SummaryRepositoryTrait for FixedTotals {
        async fn load_budget_totals(&self) -> Result<BudgetTotals> {
            Ok(self.0)
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl SummaryRepositoryTrait for BrokenStore {
        async fn load_budget_totals(&self) -> Result<BudgetTotals> {
            Err(Error::Database(DatabaseError::QueryFailed(
                "disk I/O error".to_string(),
            )))
        }
    }

    #[tokio::test]
    async fn summary_after_everything_is_bought() {
        let service = SummaryService::new(Arc::new(FixedTotals(BudgetTotals {
            activities_cost: 100.0,
            wishlist_cost: 50.0,
            completed_activities_cost: 100.0,
            purchased_wishlist_cost: 50.0,
        })));

        let summary = service.get_financial_summary().await.unwrap();

        assert_eq!(summary.total_budget, 150.0);
        assert_eq!(summary.spent_money, 150.0);
        assert_eq!(summary.remaining_budget, 0.0);
    }

    #[tokio::test]
    async fn storage_failure_is_propagated() {
        let service = SummaryService::new(Arc::new(BrokenStore));
        let err = service.get_financial_summary().await.unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn overflowing_totals_are_an_error() {
        // Two finite amounts whose sum is not representable.
        let service = SummaryService::new(Arc::new(FixedTotals(BudgetTotals {
            activities_cost: f64::MAX,
            wishlist_cost: f64::MAX,
            completed_activities_cost: 0.0,
            purchased_wishlist_cost: 0.0,
        })));

        let err = service.get_financial_summary().await.unwrap_err();

        assert!(matches!(err, Error::Unexpected(ref msg) if msg == "budget totals overflow"));
    }

    #[tokio::test]
    async fn infinite_sum_from_storage_is_an_error() {
        let service = SummaryService::new(Arc::new(FixedTotals(BudgetTotals {
            activities_cost: f64::INFINITY,
            ..BudgetTotals::default()
        })));

        assert!(service.get_financial_summary().await.is_err());
    }
}
