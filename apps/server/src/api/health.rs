use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Router};
use tripfolio_storage_sqlite::db;

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub(super) async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the store answers a query.
#[utoipa::path(get, path = "/readyz", responses((status = 200, description = "Ready")))]
pub(super) async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.executor.exec(db::ping).await?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
