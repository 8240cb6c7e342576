//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Inbound values are raw numbers and dates; handlers validate them into
//! domain types before touching the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::health::HealthCategory;
use crate::models::soil::{SoilProperty, SoilReading};

/// Request body for running an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// First acquisition date (inclusive)
    pub start_date: NaiveDate,
    /// Last acquisition date (inclusive)
    pub end_date: NaiveDate,
}

/// One soil reading in the response, in property-table order.
#[derive(Debug, Clone, Serialize)]
pub struct SoilReadingDto {
    pub label: &'static str,
    pub unit: &'static str,
    /// Raw value; absent when the source failed or held no data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Formatted value with unit, or the literal "No Data"
    pub display: String,
}

impl From<SoilReading> for SoilReadingDto {
    fn from(reading: SoilReading) -> Self {
        Self {
            label: reading.label,
            unit: reading.unit,
            value: reading.value,
            display: reading.display,
        }
    }
}

/// Response body for a completed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub lat: f64,
    pub lon: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Raw NDVI zonal mean, absent when no data was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndvi: Option<f64>,
    /// NDVI formatted to 3 decimals, or "N/A"
    pub ndvi_display: String,
    pub category: HealthCategory,
    /// Map-marker color for the category
    pub color: &'static str,
    /// Scenes surviving the spatial/temporal/cloud filters
    pub scene_count: usize,
    pub soil: Vec<SoilReadingDto>,
    /// Marker popup text
    pub summary: String,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            lat: result.coordinate.lat(),
            lon: result.coordinate.lon(),
            start_date: result.window.start(),
            end_date: result.window.end(),
            ndvi: result.ndvi,
            ndvi_display: result.health.display.clone(),
            category: result.health.category,
            color: result.health.color,
            scene_count: result.scene_count,
            soil: result.soil.into_iter().map(Into::into).collect(),
            summary: result.summary,
        }
    }
}

/// One configured soil property, for the frontend legend.
#[derive(Debug, Clone, Serialize)]
pub struct SoilPropertyDto {
    pub label: &'static str,
    pub unit: &'static str,
    pub layer: &'static str,
    pub band: &'static str,
}

impl From<&SoilProperty> for SoilPropertyDto {
    fn from(property: &SoilProperty) -> Self {
        Self {
            label: property.label,
            unit: property.unit,
            layer: property.image_id,
            band: property.band,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Raster backend reachability
    pub raster: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_roundtrip() {
        let json = r#"{"lat":22.5726,"lon":88.3639,"start_date":"2024-01-01","end_date":"2024-01-31"}"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.lat, 22.5726);
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        let back = serde_json::to_string(&request).unwrap();
        let again: AnalyzeRequest = serde_json::from_str(&back).unwrap();
        assert_eq!(again.end_date, request.end_date);
    }

    #[test]
    fn test_absent_values_omitted() {
        let dto = SoilReadingDto {
            label: "Organic Carbon",
            unit: "g/kg",
            value: None,
            display: "No Data".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("value").is_none());
        assert_eq!(json["display"], "No Data");
    }
}
