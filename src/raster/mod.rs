//! Raster query service boundary.
//!
//! This module abstracts the remote raster-data service behind the
//! [`RasterService`] trait so backends can be swapped and tests can run
//! against an in-memory provider.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server binary)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Pipeline Logic             │
//! │  - Composite construction and cloud filtering           │
//! │  - Zonal reduction with timeout and fault isolation     │
//! │  - Classification and aggregation                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  RasterService Trait (service.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │           Local Raster Service                │
//!     │     (deterministic, in-memory catalog)        │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The service handle is passed explicitly (`Arc<dyn RasterService>`) into
//! the pipeline entry point rather than initialized as process-wide ambient
//! state; a real remote client would be another provider module behind the
//! same trait.

pub mod error;
pub mod providers;
pub mod service;

pub use error::{ErrorContext, RasterError, RasterResult};
pub use providers::LocalRasterService;
pub use service::{
    BufferedPoint, CompositeHandle, CompositeRequest, NormalizedDifference, RasterService,
    RasterTarget,
};
