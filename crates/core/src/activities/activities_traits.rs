use super::activities_model::{Activity, NewActivity};
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Activity repository operations.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// All activities ordered by ascending id.
    async fn get_activities(&self) -> Result<Vec<Activity>>;
    /// Inserts a row with `completed = false` and returns it with its new id.
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity>;
    /// Sets `completed = true`, returning the number of rows matched.
    async fn mark_completed(&self, activity_id: i64) -> Result<usize>;
}

/// Trait defining the contract for Activity service operations.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    async fn get_activities(&self) -> Result<Vec<Activity>>;
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity>;
    async fn complete_activity(&self, activity_id: i64) -> Result<()>;
}
