//! Pricing route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::{PriceQuery, SetPriceQuery};
use super::responses::{CostResponse, HealthResponse};
use super::services;

/// Routes for the pricing API
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prices", get(get_price).put(put_price))
        .route("/health", get(health))
}

/// `GET /prices?type=..&age=..&date=..`
pub async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<CostResponse>> {
    let cost = services::quote_price(state.store.as_ref(), &state.cache, &query).await?;
    Ok(Json(CostResponse { cost }))
}

/// `PUT /prices?type=..&cost=..`
pub async fn put_price(
    State(state): State<AppState>,
    Query(query): Query<SetPriceQuery>,
) -> Result<StatusCode> {
    services::update_base_price(state.store.as_ref(), &state.cache, &query).await?;
    Ok(StatusCode::OK)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cache: state.cache.stats(),
    })
}
