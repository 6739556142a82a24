//! Schema initialisation endpoint.
//!
//! `GET|POST /api/init-db` creates the `schools` table if missing. Startup
//! migrations already do this; the endpoint exists so a wiped database file
//! can be re-initialised without restarting the server.

use crate::{db, error::AppError, routes::schools::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn init_db(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    db::ensure_schema(&state.pool).await?;
    tracing::info!("Database schema initialized");
    Ok(Json(json!({
        "success": true,
        "message": "Database initialized successfully"
    })))
}
