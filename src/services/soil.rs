//! Soil property retrieval with per-source fault isolation.
//!
//! Each of the four fixed properties is fetched in its own branch: a missing
//! band, failed query, or empty reduction marks that property's reading
//! absent and leaves every other branch untouched.

use futures::future::join_all;
use tracing::warn;

use super::zonal;
use crate::config::AnalysisConfig;
use crate::models::geo::Coordinate;
use crate::models::soil::{SoilProperty, SoilReading, SOIL_PROPERTIES};
use crate::raster::{BufferedPoint, RasterService, RasterTarget};

/// Fetch one soil property reading. Infallible by construction: every
/// failure mode yields an absent reading for this property alone.
pub async fn fetch_soil_reading(
    service: &dyn RasterService,
    property: &SoilProperty,
    center: Coordinate,
    config: &AnalysisConfig,
) -> SoilReading {
    // Band presence pre-check: skip the reduction entirely when the dataset
    // no longer carries the expected band.
    let bands = tokio::time::timeout(config.reduce_timeout(), service.band_names(property.image_id));
    match bands.await {
        Ok(Ok(bands)) => {
            if !bands.iter().any(|b| b == property.band) {
                warn!(
                    layer = property.image_id,
                    band = property.band,
                    "soil band absent from layer"
                );
                return SoilReading::new(property, None);
            }
        }
        Ok(Err(e)) => {
            warn!(layer = property.image_id, error = %e, "soil band listing failed");
            return SoilReading::new(property, None);
        }
        Err(_) => {
            warn!(layer = property.image_id, "soil band listing timed out");
            return SoilReading::new(property, None);
        }
    }

    let target = RasterTarget::Image(property.image_id.to_string());
    let region = BufferedPoint {
        center,
        radius_m: property.radius_m,
        scale_m: property.scale_m,
    };
    let value = zonal::zonal_mean(
        service,
        &target,
        property.band,
        &region,
        config.reduce_timeout(),
    )
    .await;
    SoilReading::new(property, value)
}

/// Fetch all four soil properties concurrently, preserving table order in
/// the returned readings. No branch can fail the join; each yields a
/// reading-or-absent on its own.
pub async fn fetch_all_soil_readings(
    service: &dyn RasterService,
    center: Coordinate,
    config: &AnalysisConfig,
) -> Vec<SoilReading> {
    let fetches = SOIL_PROPERTIES
        .iter()
        .map(|property| fetch_soil_reading(service, property, center, config));
    join_all(fetches).await
}
