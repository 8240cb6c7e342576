//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::raster::RasterService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Raster service used for all remote reductions
    pub raster: Arc<dyn RasterService>,
    /// Pipeline configuration
    pub config: Arc<AnalysisConfig>,
}

impl AppState {
    /// Create a new application state with the given raster service and
    /// configuration.
    pub fn new(raster: Arc<dyn RasterService>, config: AnalysisConfig) -> Self {
        Self {
            raster,
            config: Arc::new(config),
        }
    }
}
