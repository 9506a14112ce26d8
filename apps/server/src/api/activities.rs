use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Activity, MessageResponse, NewActivity},
};
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    routing::{get, put},
    Json, Router,
};

#[utoipa::path(post, path = "/activities", request_body = NewActivity,
    responses((status = 200, body = Activity), (status = 400, description = "Malformed input")))]
pub(super) async fn create_activity(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewActivity>, JsonRejection>,
) -> ApiResult<Json<Activity>> {
    let Json(payload) = payload?;
    let created = state.activity_service.create_activity(payload.into()).await?;
    Ok(Json(Activity::from(created)))
}

#[utoipa::path(get, path = "/activities", responses((status = 200, body = [Activity])))]
pub(super) async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Activity>>> {
    let activities = state.activity_service.get_activities().await?;
    Ok(Json(activities.into_iter().map(Activity::from).collect()))
}

#[utoipa::path(put, path = "/activities/{id}/complete",
    params(("id" = i64, Path, description = "Activity id")),
    responses((status = 200, body = MessageResponse), (status = 404, description = "Activity not found")))]
pub(super) async fn complete_activity(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state.activity_service.complete_activity(id).await?;
    Ok(Json(MessageResponse::new("Activity marked as complete")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route("/activities/{id}/complete", put(complete_activity))
}
