use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default — the service runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for the export surface upload, in megabytes.
    pub max_surface_mb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_surface_mb: std::env::var("MAX_SURFACE_MB")
                .unwrap_or_else(|_| "32".to_string())
                .parse::<usize>()
                .context("MAX_SURFACE_MB must be a positive integer")?,
        })
    }
}
