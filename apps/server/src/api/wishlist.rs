use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{MessageResponse, NewWishlistItem, WishlistItem},
};
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    routing::{get, put},
    Json, Router,
};

#[utoipa::path(post, path = "/wishlist", request_body = NewWishlistItem,
    responses((status = 200, body = WishlistItem), (status = 400, description = "Malformed input")))]
pub(super) async fn create_wishlist_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewWishlistItem>, JsonRejection>,
) -> ApiResult<Json<WishlistItem>> {
    let Json(payload) = payload?;
    let created = state.wishlist_service.create_item(payload.into()).await?;
    Ok(Json(WishlistItem::from(created)))
}

/// Items come back highest priority first.
#[utoipa::path(get, path = "/wishlist", responses((status = 200, body = [WishlistItem])))]
pub(super) async fn list_wishlist(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<WishlistItem>>> {
    let items = state.wishlist_service.get_items().await?;
    Ok(Json(items.into_iter().map(WishlistItem::from).collect()))
}

#[utoipa::path(put, path = "/wishlist/{id}/purchase",
    params(("id" = i64, Path, description = "Wishlist item id")),
    responses((status = 200, body = MessageResponse), (status = 404, description = "Item not found")))]
pub(super) async fn purchase_item(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state.wishlist_service.purchase_item(id).await?;
    Ok(Json(MessageResponse::new("Item marked as purchased")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wishlist", get(list_wishlist).post(create_wishlist_item))
        .route("/wishlist/{id}/purchase", put(purchase_item))
}
