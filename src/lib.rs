use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

pub mod db;
pub mod notifier;
pub mod tasks;

use db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tasks", post(tasks::create_task))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
