use log::{debug, info};
use std::sync::Arc;

use super::activities_model::{Activity, NewActivity};
use super::activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::errors::{Error, Result};
use crate::validation::ValidationMode;
use async_trait::async_trait;

pub struct ActivityService<T: ActivityRepositoryTrait> {
    activity_repo: Arc<T>,
    validation: ValidationMode,
}

impl<T: ActivityRepositoryTrait> ActivityService<T> {
    pub fn new(activity_repo: Arc<T>, validation: ValidationMode) -> Self {
        ActivityService {
            activity_repo,
            validation,
        }
    }
}

#[async_trait]
impl<T: ActivityRepositoryTrait + Send + Sync> ActivityServiceTrait for ActivityService<T> {
    async fn get_activities(&self) -> Result<Vec<Activity>> {
        self.activity_repo.get_activities().await
    }

    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        if self.validation.is_strict() {
            new_activity.validate()?;
        }
        let activity = self.activity_repo.create_activity(new_activity).await?;
        info!("Created activity {} ({})", activity.id, activity.title);
        Ok(activity)
    }

    async fn complete_activity(&self, activity_id: i64) -> Result<()> {
        let matched = self.activity_repo.mark_completed(activity_id).await?;
        if matched == 0 {
            debug!("Complete requested for unknown activity {}", activity_id);
            return Err(Error::NotFound("Activity not found".to_string()));
        }
        info!("Activity {} marked as complete", activity_id);
        Ok(())
    }
}
