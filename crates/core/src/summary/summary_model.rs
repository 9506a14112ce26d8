use serde::{Deserialize, Serialize};

/// Raw sums read from storage in a single statement.
///
/// Every field is 0 when the rows it sums over are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub activities_cost: f64,
    pub wishlist_cost: f64,
    pub completed_activities_cost: f64,
    pub purchased_wishlist_cost: f64,
}

/// Budget view over everything planned, done or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_budget: f64,
    pub spent_money: f64,
    pub remaining_budget: f64,
}

impl From<BudgetTotals> for FinancialSummary {
    fn from(totals: BudgetTotals) -> Self {
        let total_budget = totals.activities_cost + totals.wishlist_cost;
        let spent_money = totals.completed_activities_cost + totals.purchased_wishlist_cost;
        FinancialSummary {
            total_budget,
            spent_money,
            remaining_budget: total_budget - spent_money,
        }
    }
}

impl FinancialSummary {
    /// False when any figure overflowed or came back non-numeric.
    pub fn is_finite(&self) -> bool {
        self.total_budget.is_finite()
            && self.spent_money.is_finite()
            && self.remaining_budget.is_finite()
    }
}
