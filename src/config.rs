//! Application configuration, read once from the environment at startup.
//!
//! Settings:
//! - `DATABASE_URL`: SQLite database path (required, e.g. `sqlite:data/schoolhub.db`)
//! - `HOST` / `PORT`: server bind address (defaults `0.0.0.0:3000`)
//! - `PUBLIC_PATH`: directory with the static pages (default `public`)
//! - `SCHOOL_IMAGES_PATH`: directory for uploaded school images
//!   (default `public/schoolImages`, so the files are reachable over HTTP)

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub public_path: String,
    pub images_path: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; everything else has a default.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            public_path: env::var("PUBLIC_PATH").unwrap_or_else(|_| "public".to_string()),
            images_path: env::var("SCHOOL_IMAGES_PATH")
                .unwrap_or_else(|_| "public/schoolImages".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
