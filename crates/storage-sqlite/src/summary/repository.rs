use tripfolio_core::summary::{BudgetTotals, SummaryRepositoryTrait};
use tripfolio_core::Result;

use crate::db::DbExecutor;
use crate::errors::IntoCore;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Double;
use diesel::SqliteConnection;

/// All four sums come from one statement so they describe the same snapshot.
const BUDGET_TOTALS_SQL: &str = r#"
    SELECT
        (SELECT COALESCE(SUM(cost), 0.0) FROM activities) AS activities_cost,
        (SELECT COALESCE(SUM(price), 0.0) FROM wishlist) AS wishlist_cost,
        (SELECT COALESCE(SUM(cost), 0.0) FROM activities WHERE completed = 1)
            AS completed_activities_cost,
        (SELECT COALESCE(SUM(price), 0.0) FROM wishlist WHERE purchased = 1)
            AS purchased_wishlist_cost
"#;

#[derive(QueryableByName, Debug)]
struct BudgetTotalsRow {
    #[diesel(sql_type = Double)]
    activities_cost: f64,
    #[diesel(sql_type = Double)]
    wishlist_cost: f64,
    #[diesel(sql_type = Double)]
    completed_activities_cost: f64,
    #[diesel(sql_type = Double)]
    purchased_wishlist_cost: f64,
}

impl From<BudgetTotalsRow> for BudgetTotals {
    fn from(row: BudgetTotalsRow) -> Self {
        Self {
            activities_cost: row.activities_cost,
            wishlist_cost: row.wishlist_cost,
            completed_activities_cost: row.completed_activities_cost,
            purchased_wishlist_cost: row.purchased_wishlist_cost,
        }
    }
}

pub struct SummaryRepository {
    executor: DbExecutor,
}

impl SummaryRepository {
    pub fn new(executor: DbExecutor) -> Self {
        SummaryRepository { executor }
    }
}

#[async_trait]
impl SummaryRepositoryTrait for SummaryRepository {
    async fn load_budget_totals(&self) -> Result<BudgetTotals> {
        self.executor
            .exec(|conn: &mut SqliteConnection| -> Result<BudgetTotals> {
                let row = diesel::sql_query(BUDGET_TOTALS_SQL)
                    .get_result::<BudgetTotalsRow>(conn)
                    .into_core()?;
                Ok(BudgetTotals::from(row))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::ActivityRepository;
    use crate::db::{self, DbExecutor};
    use crate::wishlist::WishlistRepository;
    use tempfile::TempDir;
    use tripfolio_core::activities::{ActivityRepositoryTrait, NewActivity};
    use tripfolio_core::summary::FinancialSummary;
    use tripfolio_core::wishlist::{NewWishlistItem, WishlistRepositoryTrait};

    struct Fixture {
        _tmp: TempDir,
        activities: ActivityRepository,
        wishlist: WishlistRepository,
        summary: SummaryRepository,
    }

    fn setup() -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trip.db");
        let path = db::init(path.to_str().unwrap()).unwrap();
        let pool = db::create_pool(&path).unwrap();
        db::run_migrations(&pool).unwrap();
        let executor = DbExecutor::new(pool);
        Fixture {
            _tmp: tmp,
            activities: ActivityRepository::new(executor.clone()),
            wishlist: WishlistRepository::new(executor.clone()),
            summary: SummaryRepository::new(executor),
        }
    }

    async fn summary(fixture: &Fixture) -> FinancialSummary {
        FinancialSummary::from(fixture.summary.load_budget_totals().await.unwrap())
    }

    fn boat_tour(cost: f64) -> NewActivity {
        NewActivity {
            title: "Boat tour".to_string(),
            start_time: "2024-07-01T14:00".to_string(),
            duration: 120,
            cost,
            location: "Lisbon".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn empty_store_sums_to_zero() {
        let fixture = setup();
        assert_eq!(
            fixture.summary.load_budget_totals().await.unwrap(),
            BudgetTotals::default()
        );
    }

    #[tokio::test]
    async fn huge_costs_sum_past_the_float_range() {
        let fixture = setup();
        for _ in 0..2 {
            fixture
                .activities
                .create_activity(boat_tour(1.5e308))
                .await
                .unwrap();
        }

        let totals = fixture.summary.load_budget_totals().await.unwrap();

        assert!(!totals.activities_cost.is_finite());
        assert!(!FinancialSummary::from(totals).is_finite());
    }

    #[tokio::test]
    async fn totals_follow_completion_and_purchase() {
        let fixture = setup();
        let tour = fixture
            .activities
            .create_activity(boat_tour(100.0))
            .await
            .unwrap();
        let tiles = fixture
            .wishlist
            .create_item(NewWishlistItem {
                name: "Azulejo tiles".to_string(),
                price: 50.0,
                priority: 1,
            })
            .await
            .unwrap();

        let before = summary(&fixture).await;
        assert_eq!(before.total_budget, 150.0);
        assert_eq!(before.spent_money, 0.0);
        assert_eq!(before.remaining_budget, 150.0);

        fixture.activities.mark_completed(tour.id).await.unwrap();
        let after_tour = summary(&fixture).await;
        assert_eq!(after_tour.spent_money, 100.0);
        assert_eq!(after_tour.remaining_budget, 50.0);

        fixture.wishlist.mark_purchased(tiles.id).await.unwrap();
        let after_tiles = summary(&fixture).await;
        assert_eq!(after_tiles.total_budget, 150.0);
        assert_eq!(after_tiles.spent_money, 150.0);
        assert_eq!(after_tiles.remaining_budget, 0.0);
    }
}
