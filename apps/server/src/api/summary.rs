use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::FinancialSummary};
use axum::{extract::State, routing::get, Json, Router};

#[utoipa::path(get, path = "/financial-summary", responses((status = 200, body = FinancialSummary), (status = 500, description = "Totals overflowed or storage failed")))]
pub(super) async fn get_financial_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FinancialSummary>> {
    let summary = state.summary_service.get_financial_summary().await?;
    Ok(Json(FinancialSummary::from(summary)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/financial-summary", get(get_financial_summary))
}
