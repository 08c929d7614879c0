use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use wealthnest_core::prices::{PriceRefreshResult, PriceServiceTrait};

use crate::{error::ApiResult, main_lib::AppState, models::PriceResponse};

async fn get_price(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceResponse>> {
    let price = state.price_service.get_price(&symbol)?;
    Ok(Json(PriceResponse {
        symbol: price.symbol,
        price: price.price,
    }))
}

async fn refresh_prices(State(state): State<Arc<AppState>>) -> ApiResult<Json<PriceRefreshResult>> {
    let result = state.price_service.refresh_prices().await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/prices/{symbol}", get(get_price))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/prices/refresh", post(refresh_prices))
}
