use std::sync::Arc;

use crate::config::Config;
use crate::export::raster::SurfaceRasterizer;
use crate::optimizer::Optimizer;
use crate::store::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// All live builder sessions; every resume lives only here, in memory.
    pub sessions: SessionRegistry,
    /// Pluggable optimizer. Default: rule-based `KeywordOptimizer`.
    pub optimizer: Arc<dyn Optimizer>,
    /// Pluggable rasterizer. Default: `CaptureRasterizer` over client uploads.
    pub rasterizer: Arc<dyn SurfaceRasterizer>,
    pub config: Config,
}
