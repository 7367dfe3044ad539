//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::AppResult;
use shared::models::{CreateOrderRequest, Order};

use crate::api::extract::ApiJson;
use crate::core::ServerState;
use crate::db::repository::order;
use crate::orders;

/// GET /api/orders - newest first, with lines and referenced items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(state.pool()).await?;
    Ok(Json(orders))
}

/// POST /api/orders - place an order
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = orders::place_order(state.pool(), &state.notifications, req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
