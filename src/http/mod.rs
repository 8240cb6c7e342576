//! Axum-based HTTP server for the analysis API.
//!
//! This module provides the REST surface consumed by the map frontend:
//! request handlers, DTOs, error mapping, and router configuration.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
