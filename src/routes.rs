use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, AppState};

/// Router for the order service: two static collections plus health.
pub fn order_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/orders", get(handlers::orders::list_orders))
        .route("/expiredOrders", get(handlers::orders::list_expired_orders))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the user service.
pub fn user_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/users", get(handlers::users::list_users))
        .route("/newUsers", get(handlers::users::list_new_users))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
