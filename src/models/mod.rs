//! Domain model types for the analysis pipeline.
//!
//! Everything here is created fresh per analysis invocation and discarded
//! after the result is handed to the presentation layer; the only
//! process-wide constants are the four soil property definitions.

pub mod analysis;
pub mod geo;
pub mod health;
pub mod soil;

pub use analysis::AnalysisResult;
pub use geo::{Coordinate, GeoError, TimeWindow};
pub use health::{HealthAssessment, HealthCategory};
pub use soil::{SoilProperty, SoilReading, SOIL_PROPERTIES};
