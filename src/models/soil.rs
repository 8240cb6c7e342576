//! Soil property definitions and readings.
//!
//! The four properties are process-wide constants modeled as a static table,
//! so adding a property is a data change rather than new fetch logic.

use serde::Serialize;

/// One soil property: where to read it from and how to present it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilProperty {
    /// Display label, e.g. "Organic Carbon".
    pub label: &'static str,
    /// Unit appended to a present reading, e.g. "g/kg"; empty when the
    /// band value carries no display unit.
    pub unit: &'static str,
    /// Identifier of the backing single-image raster layer.
    pub image_id: &'static str,
    /// Band holding the property on that layer.
    pub band: &'static str,
    /// Buffer radius for the zonal reduction, meters.
    pub radius_m: f64,
    /// Sampling scale for the zonal reduction, meters per pixel.
    pub scale_m: f64,
}

/// The fixed soil property set, in display order. All four OpenLandMap
/// layers are native 250 m rasters, hence the coarser buffer and scale than
/// the vegetation reduction.
pub const SOIL_PROPERTIES: [SoilProperty; 4] = [
    SoilProperty {
        label: "Organic Carbon",
        unit: "g/kg",
        image_id: "OpenLandMap/SOL/SOL_ORGANIC-CARBON_USDA-6A1C_M/v02",
        band: "ocd_usda.6a1c_m_sl1_250m",
        radius_m: 250.0,
        scale_m: 250.0,
    },
    SoilProperty {
        label: "Soil pH (H2O)",
        // OpenLandMap encodes pH scaled by 10; the reading is shown as the
        // raw band value with no unit suffix.
        unit: "",
        image_id: "OpenLandMap/SOL/SOL_PH-H2O_USDA-4C1A2A_M/v02",
        band: "phh2o_usda.4c1a2a_m_sl1_250m",
        radius_m: 250.0,
        scale_m: 250.0,
    },
    SoilProperty {
        label: "Sand Fraction",
        unit: "%",
        image_id: "OpenLandMap/SOL/SOL_SAND-Content_USDA-3A1A1A_M/v02",
        band: "sand_usda.3a1a1a_m_sl1_250m",
        radius_m: 250.0,
        scale_m: 250.0,
    },
    SoilProperty {
        label: "Clay Fraction",
        unit: "%",
        image_id: "OpenLandMap/SOL/SOL_CLAY-Content_USDA-3A1A1A_M/v02",
        band: "clay_usda.3a1a1a_m_sl1_250m",
        radius_m: 250.0,
        scale_m: 250.0,
    },
];

/// One soil reading: the property it was read for and the optional value.
///
/// `value` is `None` when the band was missing, the query failed, or the
/// reduction found no valid pixels. A present 0.0 is a legitimate reading
/// and renders as "0.00 <unit>", never as "No Data".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilReading {
    pub label: &'static str,
    pub unit: &'static str,
    pub value: Option<f64>,
    pub display: String,
}

impl SoilReading {
    /// Build a reading, deriving the display string from the optional value.
    pub fn new(property: &SoilProperty, value: Option<f64>) -> Self {
        let display = match value {
            Some(v) if property.unit.is_empty() => format!("{:.2}", v),
            Some(v) => format!("{:.2} {}", v, property.unit),
            None => "No Data".to_string(),
        };
        Self {
            label: property.label,
            unit: property.unit,
            value,
            display,
        }
    }
}
