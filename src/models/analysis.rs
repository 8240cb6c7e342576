//! The aggregate analysis result handed to the presentation layer.

use serde::Serialize;

use super::geo::{Coordinate, TimeWindow};
use super::health::HealthAssessment;
use super::soil::SoilReading;

/// Complete outcome of one `analyze` call.
///
/// Always fully populated: a branch that failed remotely contributes an
/// absent value ("N/A" / "No Data"), never a missing field. Soil readings
/// keep the property-table order for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub coordinate: Coordinate,
    pub window: TimeWindow,
    /// Raw NDVI zonal mean, absent when the composite was empty or the
    /// reduction failed.
    pub ndvi: Option<f64>,
    pub health: HealthAssessment,
    /// Number of scenes that survived the spatial/temporal/cloud filters.
    pub scene_count: usize,
    pub soil: Vec<SoilReading>,
    /// Multi-line text attached to the map marker popup.
    pub summary: String,
}
