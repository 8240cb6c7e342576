//! # Cropscope Backend
//!
//! Crop health and soil analysis engine.
//!
//! This crate answers one question for an arbitrary geographic point and time
//! window: how healthy is the vegetation there, and what does the soil look
//! like? It derives NDVI from a satellite reflectance collection, classifies
//! the value into a health category, and independently retrieves four soil
//! property statistics from separate raster layers. The backend exposes a
//! REST API via Axum for the map frontend.
//!
//! ## Features
//!
//! - **Compositing**: cloud-filtered NDVI median composites over a time window
//! - **Zonal Reduction**: buffered-point mean reduction, the shared numeric
//!   primitive for both the vegetation and soil paths
//! - **Classification**: fixed-threshold vegetation health categories
//! - **Soil Retrieval**: four OpenLandMap soil properties with per-source
//!   fault isolation
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: Analysis configuration (thresholds, buffers, timeouts)
//! - [`models`]: Domain types (coordinates, time windows, readings, results)
//! - [`raster`]: Raster query service boundary and providers
//! - [`services`]: Pipeline logic (compositing, reduction, classification,
//!   soil retrieval, aggregation)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Failure policy
//!
//! Every remote raster call runs inside one of five independent branches
//! (one vegetation, four soil). A failure in any branch — transport error,
//! missing band, empty region, timeout — surfaces as that branch's value
//! being absent and never aborts the siblings or the overall analysis.

pub mod config;
pub mod models;
pub mod raster;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
