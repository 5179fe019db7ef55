use std::sync::Arc;

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use crate::catalog::Catalog;

/// Shared application state — cheap to clone (all heap behind Arc).
///
/// The catalog is built once at startup and never mutated afterwards, so no
/// lock is needed around it.
#[derive(Clone)]
pub struct AppState {
    pub service_name: &'static str,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            catalog: Arc::new(Catalog::new()),
        }
    }
}
