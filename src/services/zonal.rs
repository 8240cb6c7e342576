//! Zonal reduction: the shared numeric primitive of both analysis paths.

use std::time::Duration;

use tracing::{debug, warn};

use crate::raster::{BufferedPoint, RasterService, RasterTarget};

/// Spatial mean of one band over a buffered point, with a bounded timeout.
///
/// This is the only place the pipeline touches `reduce_region_mean`, and it
/// never lets a service error cross its boundary: a query or transport
/// failure, a missing band, or a timeout all become `None`. Callers must
/// treat `None` as "no result" and `Some(0.0)` as a legitimate zero reading.
pub async fn zonal_mean(
    service: &dyn RasterService,
    target: &RasterTarget,
    band: &str,
    region: &BufferedPoint,
    timeout: Duration,
) -> Option<f64> {
    let call = service.reduce_region_mean(target, band, region);
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(Some(mean))) => {
            debug!(layer = target.describe(), band, mean, "zonal mean");
            Some(mean)
        }
        Ok(Ok(None)) => {
            debug!(
                layer = target.describe(),
                band, "zonal reduction found no valid pixels"
            );
            None
        }
        Ok(Err(e)) => {
            warn!(layer = target.describe(), band, error = %e, "zonal reduction failed");
            None
        }
        Err(_) => {
            warn!(
                layer = target.describe(),
                band,
                timeout_secs = timeout.as_secs(),
                "zonal reduction timed out"
            );
            None
        }
    }
}
