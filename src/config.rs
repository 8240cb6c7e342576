//! Analysis configuration.
//!
//! This module provides the tunable parameters of the analysis pipeline,
//! plus utilities for reading overrides from TOML configuration files and
//! environment variables.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sentinel-2 surface reflectance collection used for NDVI compositing.
pub const S2_COLLECTION: &str = "COPERNICUS/S2_SR";

/// Scene metadata property holding the cloudy-pixel percentage.
pub const CLOUD_METADATA_PROPERTY: &str = "CLOUDY_PIXEL_PERCENTAGE";

/// Near-infrared band of the Sentinel-2 collection.
pub const NIR_BAND: &str = "B8";

/// Red band of the Sentinel-2 collection.
pub const RED_BAND: &str = "B4";

/// Name given to the derived vegetation index band.
pub const NDVI_BAND: &str = "NDVI";

/// Configuration for one analysis pipeline instance.
///
/// The window-span bound and per-call timeout are explicit so oversized
/// requests and hung reductions stay bounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum cloudy-pixel percentage for a scene to enter the composite.
    #[serde(default = "default_cloud_threshold_pct")]
    pub cloud_threshold_pct: f64,
    /// Buffer radius around the point for the vegetation reduction, meters.
    #[serde(default = "default_vegetation_radius_m")]
    pub vegetation_radius_m: f64,
    /// Sampling scale for the vegetation reduction, meters per pixel.
    #[serde(default = "default_vegetation_scale_m")]
    pub vegetation_scale_m: f64,
    /// Upper bound on the analysis time window, days.
    #[serde(default = "default_max_window_days")]
    pub max_window_days: i64,
    /// Timeout applied to each remote reduction call, seconds.
    #[serde(default = "default_reduce_timeout_secs")]
    pub reduce_timeout_secs: u64,
}

fn default_cloud_threshold_pct() -> f64 {
    10.0
}

fn default_vegetation_radius_m() -> f64 {
    30.0
}

fn default_vegetation_scale_m() -> f64 {
    10.0
}

fn default_max_window_days() -> i64 {
    366
}

fn default_reduce_timeout_secs() -> u64 {
    30
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cloud_threshold_pct: default_cloud_threshold_pct(),
            vegetation_radius_m: default_vegetation_radius_m(),
            vegetation_scale_m: default_vegetation_scale_m(),
            max_window_days: default_max_window_days(),
            reduce_timeout_secs: default_reduce_timeout_secs(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AnalysisConfig)` if the file exists and parses
    /// * `Err` with a human-readable message otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// Recognized variables: `CLOUD_THRESHOLD_PCT`, `MAX_WINDOW_DAYS`,
    /// `REDUCE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(v) = env_parse::<f64>("CLOUD_THRESHOLD_PCT") {
            config.cloud_threshold_pct = v;
        }
        if let Some(v) = env_parse::<i64>("MAX_WINDOW_DAYS") {
            config.max_window_days = v;
        }
        if let Some(v) = env_parse::<u64>("REDUCE_TIMEOUT_SECS") {
            config.reduce_timeout_secs = v;
        }
        config
    }

    /// Per-call reduction timeout as a [`Duration`].
    pub fn reduce_timeout(&self) -> Duration {
        Duration::from_secs(self.reduce_timeout_secs)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}
