use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{error::AppResult, models::User, AppState};

pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<User>>)> {
    let users = state.catalog.users.clone();

    info!(count = users.len(), "Listed users");

    Ok((StatusCode::OK, Json(users)))
}

pub async fn list_new_users(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<User>>)> {
    let users = state.catalog.new_users.clone();

    info!(count = users.len(), "Listed new users");

    Ok((StatusCode::OK, Json(users)))
}
