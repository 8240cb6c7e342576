//! The raster query service trait and its request/handle types.
//!
//! The trait mirrors the capabilities the pipeline needs from a remote
//! raster catalog: resolving a filtered, indexed, median-merged composite;
//! listing the bands of a single-image layer; and zonal-mean reduction over
//! a buffered point. Filtering and compositing happen service-side, so the
//! client expresses them declaratively as a [`CompositeRequest`].

use async_trait::async_trait;
use serde::Serialize;

use super::error::RasterResult;
use crate::models::geo::{Coordinate, TimeWindow};

/// A circular region around a point plus the sampling scale used when
/// reducing over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BufferedPoint {
    pub center: Coordinate,
    pub radius_m: f64,
    pub scale_m: f64,
}

/// Normalized-difference band transform applied to every scene before the
/// temporal merge: `(nir - red) / (nir + red)` stored as `output_band`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDifference {
    pub nir_band: String,
    pub red_band: String,
    pub output_band: String,
}

/// Declarative description of a composite: which collection, restricted to
/// which point and window, which scenes qualify, and which derived band the
/// composite keeps after the per-pixel temporal median.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeRequest {
    /// Image collection identifier, e.g. "COPERNICUS/S2_SR".
    pub collection: String,
    /// Point the scenes must intersect.
    pub bounds: Coordinate,
    /// Acquisition date window.
    pub window: TimeWindow,
    /// Scene metadata property compared against `max_cloud_pct`.
    pub cloud_property: String,
    /// Scenes at or above this cloudy-pixel percentage are discarded.
    pub max_cloud_pct: f64,
    /// Per-scene band transform computed before the median merge.
    pub index: NormalizedDifference,
}

/// Handle to a resolved composite.
///
/// Carries the originating request so the service can evaluate reductions
/// against it statelessly, plus how many scenes survived the filters. Zero
/// scenes is a valid, empty composite; reducing it yields no result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeHandle {
    pub request: CompositeRequest,
    pub scene_count: usize,
}

impl CompositeHandle {
    /// Whether no scenes passed the filters.
    pub fn is_empty(&self) -> bool {
        self.scene_count == 0
    }
}

/// What a zonal reduction runs against: a resolved composite or a named
/// single-image layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RasterTarget {
    Composite(CompositeHandle),
    Image(String),
}

impl RasterTarget {
    /// Layer or collection identifier, for logging.
    pub fn describe(&self) -> &str {
        match self {
            Self::Composite(h) => &h.request.collection,
            Self::Image(id) => id,
        }
    }
}

/// Abstract raster-data service.
///
/// All calls are remote and may fail; callers in the service layer contain
/// those failures per branch. Implementations hold no per-analysis state, so
/// identical inputs against an unchanged catalog yield identical outputs.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RasterService: Send + Sync {
    /// Resolve a composite request into a handle.
    ///
    /// # Returns
    /// * `Ok(CompositeHandle)` - possibly empty (zero surviving scenes)
    /// * `Err(RasterError)` - if the catalog query itself fails
    async fn build_composite(&self, request: &CompositeRequest) -> RasterResult<CompositeHandle>;

    /// List the band names available on a single-image layer.
    async fn band_names(&self, image_id: &str) -> RasterResult<Vec<String>>;

    /// Spatial mean of one band over a buffered point.
    ///
    /// # Returns
    /// * `Ok(Some(mean))` - the zonal mean
    /// * `Ok(None)` - the region holds no valid pixels (distinct from 0.0)
    /// * `Err(RasterError)` - missing band, query, or transport failure
    async fn reduce_region_mean(
        &self,
        target: &RasterTarget,
        band: &str,
        region: &BufferedPoint,
    ) -> RasterResult<Option<f64>>;
}
