use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::{Config, CorsOrigins},
    main_lib::AppState,
    models::{
        Activity, DatabaseSnapshot, FinancialSummary, MessageResponse, NewActivity,
        NewWishlistItem, WishlistItem,
    },
};

mod activities;
mod debug;
mod health;
mod summary;
mod wishlist;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        activities::create_activity,
        activities::list_activities,
        activities::complete_activity,
        wishlist::create_wishlist_item,
        wishlist::list_wishlist,
        wishlist::purchase_item,
        summary::get_financial_summary,
    ),
    components(schemas(
        Activity,
        NewActivity,
        WishlistItem,
        NewWishlistItem,
        FinancialSummary,
        MessageResponse,
        DatabaseSnapshot
    )),
    tags((name = "tripfolio"))
)]
pub struct ApiDoc;

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => CorsLayer::new()
            .allow_origin(list.clone())
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE]),
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let mut api = Router::new()
        .merge(health::router())
        .merge(activities::router())
        .merge(wishlist::router())
        .merge(summary::router());
    if config.debug_routes {
        tracing::warn!("Debug routes enabled: /debug/database exposes raw table contents");
        api = api.merge(debug::router());
    }

    api.route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(&config.cors_allow))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
