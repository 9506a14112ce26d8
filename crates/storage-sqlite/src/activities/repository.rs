use tripfolio_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use tripfolio_core::Result;

use super::model::{ActivityDB, NewActivityDB};
use crate::db::DbExecutor;
use crate::errors::IntoCore;
use crate::schema::activities;
use crate::schema::activities::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct ActivityRepository {
    executor: DbExecutor,
}

impl ActivityRepository {
    pub fn new(executor: DbExecutor) -> Self {
        ActivityRepository { executor }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    async fn get_activities(&self) -> Result<Vec<Activity>> {
        self.executor
            .exec(|conn: &mut SqliteConnection| -> Result<Vec<Activity>> {
                let activities_db = activities
                    .order(id.asc())
                    .select(ActivityDB::as_select())
                    .load::<ActivityDB>(conn)
                    .into_core()?;
                Ok(activities_db.into_iter().map(Activity::from).collect())
            })
            .await
    }

    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        self.executor
            .exec(move |conn: &mut SqliteConnection| -> Result<Activity> {
                let new_activity_db: NewActivityDB = new_activity.into();
                let result_db = diesel::insert_into(activities::table)
                    .values(&new_activity_db)
                    .returning(ActivityDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Activity::from(result_db))
            })
            .await
    }

    async fn mark_completed(&self, activity_id: i64) -> Result<usize> {
        self.executor
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::update(activities.find(activity_id))
                    .set(completed.eq(true))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ActivityRepository) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trip.db");
        let path = db::init(path.to_str().unwrap()).unwrap();
        let pool = db::create_pool(&path).unwrap();
        db::run_migrations(&pool).unwrap();
        (tmp, ActivityRepository::new(DbExecutor::new(pool)))
    }

    fn activity(name: &str, price: f64) -> NewActivity {
        NewActivity {
            title: name.to_string(),
            start_time: "2024-06-10T10:00".to_string(),
            duration: 90,
            cost: price,
            location: "Kyoto".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn created_activity_is_persisted_with_new_id() {
        let (_tmp, repo) = setup();

        let first = repo.create_activity(activity("Fushimi Inari", 0.0)).await.unwrap();
        let second = repo.create_activity(activity("Tea ceremony", 45.0)).await.unwrap();

        assert!(second.id > first.id);
        assert!(!first.completed && !second.completed);
        assert_eq!(repo.get_activities().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn notes_round_trip_as_optional() {
        let (_tmp, repo) = setup();
        let mut input = activity("Kaiseki dinner", 120.0);
        input.notes = Some("Reservation at 19:00".to_string());

        let created = repo.create_activity(input).await.unwrap();

        assert_eq!(created.notes.as_deref(), Some("Reservation at 19:00"));
    }

    #[tokio::test]
    async fn mark_completed_reports_matched_rows() {
        let (_tmp, repo) = setup();
        let created = repo.create_activity(activity("Bamboo grove", 0.0)).await.unwrap();

        assert_eq!(repo.mark_completed(created.id).await.unwrap(), 1);
        assert_eq!(repo.mark_completed(created.id).await.unwrap(), 1);
        assert_eq!(repo.mark_completed(created.id + 100).await.unwrap(), 0);

        let stored = repo.get_activities().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].completed);
    }
}
