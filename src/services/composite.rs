//! Composite construction: cloud-filtered NDVI median composites.

use tracing::debug;

use crate::config::{
    AnalysisConfig, CLOUD_METADATA_PROPERTY, NDVI_BAND, NIR_BAND, RED_BAND, S2_COLLECTION,
};
use crate::models::geo::{Coordinate, TimeWindow};
use crate::raster::{
    CompositeHandle, CompositeRequest, NormalizedDifference, RasterResult, RasterService,
};

/// Build the declarative NDVI composite request: Sentinel-2 scenes
/// intersecting the point within the window, below the cloud threshold,
/// each carrying a derived NDVI band, median-merged and reduced to that
/// band.
pub fn ndvi_composite_request(
    coordinate: Coordinate,
    window: TimeWindow,
    config: &AnalysisConfig,
) -> CompositeRequest {
    CompositeRequest {
        collection: S2_COLLECTION.to_string(),
        bounds: coordinate,
        window,
        cloud_property: CLOUD_METADATA_PROPERTY.to_string(),
        max_cloud_pct: config.cloud_threshold_pct,
        index: NormalizedDifference {
            nir_band: NIR_BAND.to_string(),
            red_band: RED_BAND.to_string(),
            output_band: NDVI_BAND.to_string(),
        },
    }
}

/// Resolve the NDVI composite for a point and window.
///
/// An empty composite (zero surviving scenes) is a valid outcome; the
/// subsequent reduction yields no result rather than an error.
pub async fn build_ndvi_composite(
    service: &dyn RasterService,
    coordinate: Coordinate,
    window: TimeWindow,
    config: &AnalysisConfig,
) -> RasterResult<CompositeHandle> {
    let request = ndvi_composite_request(coordinate, window, config);
    let handle = service.build_composite(&request).await?;
    debug!(
        scene_count = handle.scene_count,
        %coordinate,
        %window,
        "resolved NDVI composite"
    );
    Ok(handle)
}
