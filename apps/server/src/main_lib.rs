use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tripfolio_core::{
    activities::{ActivityService, ActivityServiceTrait},
    summary::{SummaryService, SummaryServiceTrait},
    wishlist::{WishlistService, WishlistServiceTrait},
};
use tripfolio_storage_sqlite::{
    activities::ActivityRepository,
    db::{self, DbExecutor},
    summary::SummaryRepository,
    wishlist::WishlistRepository,
};

pub struct AppState {
    pub activity_service: Arc<dyn ActivityServiceTrait + Send + Sync>,
    pub wishlist_service: Arc<dyn WishlistServiceTrait + Send + Sync>,
    pub summary_service: Arc<dyn SummaryServiceTrait + Send + Sync>,
    pub executor: DbExecutor,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let executor = DbExecutor::new(pool);

    let activity_repository = Arc::new(ActivityRepository::new(executor.clone()));
    let activity_service = Arc::new(ActivityService::new(
        activity_repository,
        config.validation,
    ));

    let wishlist_repository = Arc::new(WishlistRepository::new(executor.clone()));
    let wishlist_service = Arc::new(WishlistService::new(
        wishlist_repository,
        config.validation,
    ));

    let summary_repository = Arc::new(SummaryRepository::new(executor.clone()));
    let summary_service = Arc::new(SummaryService::new(summary_repository));

    tracing::info!("Validation mode: {:?}", config.validation);

    Ok(Arc::new(AppState {
        activity_service,
        wishlist_service,
        summary_service,
        executor,
    }))
}
