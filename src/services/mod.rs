//! Service layer: the analysis pipeline.
//!
//! This module contains the pipeline logic between the HTTP surface and the
//! raster service boundary: composite construction, zonal reduction,
//! vegetation-health classification, soil property retrieval, and result
//! aggregation. Every function takes the raster service as an explicit
//! `&dyn RasterService` argument; nothing here holds state between calls.

pub mod analysis;
pub mod composite;
pub mod health;
pub mod soil;
pub mod zonal;

pub use analysis::{analyze, AnalysisError};
pub use health::classify;

#[cfg(test)]
#[path = "health_tests.rs"]
mod health_tests;
#[cfg(test)]
#[path = "zonal_tests.rs"]
mod zonal_tests;
