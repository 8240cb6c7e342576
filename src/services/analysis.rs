//! The analysis entry point and result aggregation.

use tracing::{info, warn};

use super::{composite, health, soil, zonal};
use crate::config::{AnalysisConfig, NDVI_BAND};
use crate::models::analysis::AnalysisResult;
use crate::models::geo::{Coordinate, TimeWindow};
use crate::models::health::HealthAssessment;
use crate::models::soil::SoilReading;
use crate::raster::{BufferedPoint, RasterService, RasterTarget};

/// Precondition failures of the analyze call. Remote failures never appear
/// here; they surface as absent fields in the result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Time window spans {days} days, exceeding the configured maximum of {max}")]
    WindowTooLong { days: i64, max: i64 },
}

/// Run one full analysis for a point and time window.
///
/// The vegetation branch and the four soil branches run concurrently and
/// are individually infallible: any remote failure is contained inside its
/// branch and reported as an absent value. Past the window-span check, this
/// function always returns a complete [`AnalysisResult`], and identical
/// inputs against an unchanged raster catalog yield identical results.
pub async fn analyze(
    service: &dyn RasterService,
    coordinate: Coordinate,
    window: TimeWindow,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let days = window.span_days();
    if days > config.max_window_days {
        return Err(AnalysisError::WindowTooLong {
            days,
            max: config.max_window_days,
        });
    }

    info!(%coordinate, %window, "starting analysis");

    let vegetation = vegetation_branch(service, coordinate, window, config);
    let soil = soil::fetch_all_soil_readings(service, coordinate, config);
    let ((ndvi, scene_count), soil) = tokio::join!(vegetation, soil);

    let health = health::classify(ndvi);
    let summary = marker_summary(&health, &soil);

    info!(
        category = health.category.label(),
        scene_count,
        soil_present = soil.iter().filter(|r| r.value.is_some()).count(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        coordinate,
        window,
        ndvi,
        health,
        scene_count,
        soil,
        summary,
    })
}

/// The vegetation branch: composite resolution followed by the fine-scale
/// NDVI reduction. Returns the optional index value and the surviving scene
/// count; a composite failure is contained here as (absent, 0).
async fn vegetation_branch(
    service: &dyn RasterService,
    coordinate: Coordinate,
    window: TimeWindow,
    config: &AnalysisConfig,
) -> (Option<f64>, usize) {
    let build = composite::build_ndvi_composite(service, coordinate, window, config);
    let handle = match tokio::time::timeout(config.reduce_timeout(), build).await {
        Ok(Ok(handle)) => handle,
        Ok(Err(e)) => {
            warn!(error = %e, "composite construction failed");
            return (None, 0);
        }
        Err(_) => {
            warn!(
                timeout_secs = config.reduce_timeout_secs,
                "composite construction timed out"
            );
            return (None, 0);
        }
    };
    let scene_count = handle.scene_count;
    let region = BufferedPoint {
        center: coordinate,
        radius_m: config.vegetation_radius_m,
        scale_m: config.vegetation_scale_m,
    };
    let value = zonal::zonal_mean(
        service,
        &RasterTarget::Composite(handle),
        NDVI_BAND,
        &region,
        config.reduce_timeout(),
    )
    .await;
    (value, scene_count)
}

/// Build the text attached to the map marker: the index value, its status,
/// and one line per soil reading, in table order.
fn marker_summary(health: &HealthAssessment, soil: &[SoilReading]) -> String {
    let mut text = format!(
        "NDVI: {}\nStatus: {}\n",
        health.display,
        health.category.label()
    );
    for reading in soil {
        text.push_str(&format!("{}: {}\n", reading.label, reading.display));
    }
    text
}
