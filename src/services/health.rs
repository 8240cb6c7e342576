//! Vegetation health classification.

use crate::models::health::{HealthAssessment, HealthCategory};

/// NDVI above this is Healthy (exclusive).
const HEALTHY_ABOVE: f64 = 0.5;

/// NDVI above this is Moderately Healthy (exclusive).
const MODERATE_ABOVE: f64 = 0.2;

/// Classify an optional NDVI zonal mean.
///
/// Pure and total. Absence is checked before the thresholds; the boundary
/// values fall into the lower category (exactly 0.5 is Moderately Healthy,
/// exactly 0.2 is Non-Healthy), and negative values are Non-Healthy.
pub fn classify(ndvi: Option<f64>) -> HealthAssessment {
    let Some(value) = ndvi else {
        return HealthAssessment {
            category: HealthCategory::NoData,
            color: HealthCategory::NoData.color(),
            display: "N/A".to_string(),
        };
    };
    let category = if value > HEALTHY_ABOVE {
        HealthCategory::Healthy
    } else if value > MODERATE_ABOVE {
        HealthCategory::ModeratelyHealthy
    } else {
        HealthCategory::NonHealthy
    };
    HealthAssessment {
        category,
        color: category.color(),
        display: format!("{:.3}", value),
    }
}
