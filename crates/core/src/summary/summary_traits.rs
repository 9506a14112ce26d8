use super::summary_model::{BudgetTotals, FinancialSummary};
use crate::Result;
use async_trait::async_trait;

/// Storage side of the summary: the four sums, read together.
#[async_trait]
pub trait SummaryRepositoryTrait: Send + Sync {
    async fn load_budget_totals(&self) -> Result<BudgetTotals>;
}

#[async_trait]
pub trait SummaryServiceTrait: Send + Sync {
    async fn get_financial_summary(&self) -> Result<FinancialSummary>;
}
