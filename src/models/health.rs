//! Vegetation health categories.

use serde::{Deserialize, Serialize};

/// Vegetation health category derived from the NDVI zonal mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    Healthy,
    ModeratelyHealthy,
    NonHealthy,
    NoData,
}

impl HealthCategory {
    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::ModeratelyHealthy => "Moderately Healthy",
            Self::NonHealthy => "Non-Healthy",
            Self::NoData => "No Data",
        }
    }

    /// Map-marker color for this category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Healthy => "green",
            Self::ModeratelyHealthy => "orange",
            Self::NonHealthy => "red",
            Self::NoData => "gray",
        }
    }
}

/// Outcome of classifying one NDVI value: the category, its marker color,
/// and the display string ("N/A" when the value is absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthAssessment {
    pub category: HealthCategory,
    pub color: &'static str,
    pub display: String,
}
