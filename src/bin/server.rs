//! Cropscope HTTP Server Binary
//!
//! This is the main entry point for the analysis REST API server. It wires
//! the raster service into the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cropscope-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CROPSCOPE_CONFIG`: Path to a TOML configuration file (optional)
//! - `CLOUD_THRESHOLD_PCT`, `MAX_WINDOW_DAYS`, `REDUCE_TIMEOUT_SECS`:
//!   individual config overrides when no file is given
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cropscope::config::AnalysisConfig;
use cropscope::http::{create_router, AppState};
use cropscope::raster::{LocalRasterService, RasterService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Cropscope HTTP Server");

    // Load configuration from file if given, otherwise from the environment
    let config = match env::var("CROPSCOPE_CONFIG") {
        Ok(path) => AnalysisConfig::from_file(&path).map_err(|e| anyhow::anyhow!(e))?,
        Err(_) => AnalysisConfig::from_env(),
    };
    info!(
        cloud_threshold_pct = config.cloud_threshold_pct,
        max_window_days = config.max_window_days,
        "Configuration loaded"
    );

    // The raster service is injected explicitly; the local provider stands
    // in until a remote catalog client is configured.
    let raster = Arc::new(LocalRasterService::new()) as Arc<dyn RasterService>;
    let state = AppState::new(raster, config);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
