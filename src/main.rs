use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remind_server::{build_router, db::Database, notifier, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting remind-server...");

    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "remind_server.db".to_string());
    let db = Database::new(&db_path).expect("Failed to initialize database");

    let state = AppState {
        db: Arc::new(Mutex::new(db)),
    };

    // Start the due-task checker in the background
    let interval_secs = std::env::var("CHECK_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(60);
    tokio::spawn(async move {
        notifier::start_notification_task(db_path, interval_secs).await;
    });

    let app = build_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
