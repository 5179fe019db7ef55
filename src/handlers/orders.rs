use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{error::AppResult, models::Order, AppState};

pub async fn list_orders(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Order>>)> {
    let orders = state.catalog.orders.clone();

    info!(count = orders.len(), "Listed orders");

    Ok((StatusCode::OK, Json(orders)))
}

pub async fn list_expired_orders(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Order>>)> {
    let orders = state.catalog.expired_orders.clone();

    info!(count = orders.len(), "Listed expired orders");

    Ok((StatusCode::OK, Json(orders)))
}
