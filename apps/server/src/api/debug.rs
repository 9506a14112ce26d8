use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Activity, DatabaseSnapshot, WishlistItem},
};
use axum::{extract::State, routing::get, Json, Router};
use tripfolio_storage_sqlite::db;

async fn dump_database(State(state): State<Arc<AppState>>) -> ApiResult<Json<DatabaseSnapshot>> {
    let tables = state.executor.exec(db::list_tables).await?;
    let activities = state.activity_service.get_activities().await?;
    let wishlist = state.wishlist_service.get_items().await?;
    Ok(Json(DatabaseSnapshot {
        tables,
        activities: activities.into_iter().map(Activity::from).collect(),
        wishlist: wishlist.into_iter().map(WishlistItem::from).collect(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/debug/database", get(dump_database))
}
