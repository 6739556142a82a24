//! HTTP route handlers.
//!
//! - `schools`: school registration (multipart) and listing
//! - `admin`: database schema initialisation
//! - `health`: liveness check

pub mod admin;
pub mod health;
pub mod schools;

pub use admin::*;
pub use health::*;
pub use schools::*;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Uploaded images are small photos; cap the whole request well above that.
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Builds the `/api` routes with the upload body cap applied.
///
/// `main` nests this under `/api`; tests drive it directly so the cap is
/// exercised by the suite too.
pub fn api_router(state: schools::AppState) -> Router {
    Router::new()
        .route(
            "/schools",
            get(schools::list_schools).post(schools::create_school),
        )
        // Kept for parity with the original deployment scripts that hit
        // /api/init-db after provisioning a fresh database.
        .route("/init-db", get(admin::init_db).post(admin::init_db))
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
