mod config;
mod errors;
mod export;
mod models;
mod optimizer;
mod render;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::raster::CaptureRasterizer;
use crate::optimizer::KeywordOptimizer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::SessionRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (defaults cover every variable)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // All state lives in this registry for the process lifetime
    let sessions = SessionRegistry::new();

    // Optimizer backend (rule-based; swap behind the trait for a semantic one)
    let optimizer = Arc::new(KeywordOptimizer);
    info!("Optimizer backend: keyword (deterministic, offline)");

    // Rasterizer backend for the export pipeline
    let rasterizer = Arc::new(CaptureRasterizer);

    // Build app state
    let state = AppState {
        sessions,
        optimizer,
        rasterizer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
