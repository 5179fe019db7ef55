pub mod orders;
pub mod users;

use axum::{extract::State, http::StatusCode, http::Uri, Json};
use serde_json::json;

use crate::{error::AppError, AppState};

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": state.service_name })),
    )
}

/// Explicit fallback for unmatched paths. The route table is fixed, so every
/// request that does not hit a registered route ends here with a 404.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
