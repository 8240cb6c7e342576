//! Raster service provider implementations.
//!
//! Currently one provider ships with the crate:
//! - `local`: deterministic in-memory implementation for unit testing and
//!   local development
//!
//! A client for a real remote raster catalog would live here as another
//! module implementing the same trait.

pub mod local;

pub use local::LocalRasterService;
