use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use wealthnest_core::portfolio::valuation::{PortfolioSummary, ValuationServiceTrait};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.valuation_service.get_portfolio_summary(user.id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/summary", get(get_portfolio_summary))
}
