pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser UI
        .route("/", get(search::handle_index))
        .route("/search", get(search::handle_search_page))
        // JSON API
        .route("/api/v1/search", post(search::handle_search_api))
        .with_state(state)
}
