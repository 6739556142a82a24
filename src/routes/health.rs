//! Liveness endpoint for load balancers and container health checks.

use axum::Json;
use serde_json::{json, Value};

/// `GET /api/health` — always `{ "status": "ok" }`.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
