//! schoolhub server entry point.
//!
//! Startup order: load `.env`, init tracing, open the SQLite pool, run
//! migrations, ensure the images directory exists, build the router, serve.

mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

use anyhow::Result;
use axum::Router;
use config::Config;
use routes::schools::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolhub=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting schoolhub server on {}:{}", config.host, config.port);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    let images_path = Path::new(&config.images_path);
    if !images_path.exists() {
        tokio::fs::create_dir_all(images_path).await?;
        tracing::info!("Created school images directory: {}", config.images_path);
    }

    let state = AppState {
        pool: pool.clone(),
        images_path: config.images_path.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static pages (form + directory) and the uploaded images live under
    // public/; unknown paths land on the index page.
    let index = format!("{}/index.html", config.public_path);
    let serve_public =
        ServeDir::new(&config.public_path).not_found_service(ServeFile::new(index));

    let app = Router::new()
        .nest("/api", routes::api_router(state))
        .fallback_service(serve_public)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
