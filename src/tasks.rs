use axum::{extract::State, http::StatusCode, response::Json};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{db::Task, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub email: String,
    pub due_date: NaiveDateTime,
    // Stored as sent; a client can create a task already marked notified.
    pub notified: bool,
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<Task>, StatusCode> {
    let db = state.db.lock().await;

    match db.insert_task(&req.title, &req.email, req.due_date, req.notified) {
        Ok(task) => Ok(Json(task)),
        Err(e) => {
            tracing::error!("Failed to create task: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
