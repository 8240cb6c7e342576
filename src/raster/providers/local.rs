//! In-memory raster service for unit testing and local development.
//!
//! The default catalog is deterministic: scene counts follow the requested
//! window and cloud threshold, composite means follow the coordinate, and
//! the four soil layers hold fixed plausible values. Tests use the `with_*`
//! builders to pin values, drop bands, and inject failures before sharing
//! the service behind an `Arc`.

use std::collections::HashMap;

use async_trait::async_trait;

use super::super::error::{ErrorContext, RasterError, RasterResult};
use super::super::service::{
    BufferedPoint, CompositeHandle, CompositeRequest, RasterService, RasterTarget,
};
use crate::models::soil::SOIL_PROPERTIES;

/// Interval between synthetic scene acquisitions, days.
const SCENE_CADENCE_DAYS: i64 = 5;

#[derive(Debug, Clone)]
struct LayerState {
    bands: Vec<String>,
    values: HashMap<String, Option<f64>>,
    fail: bool,
}

/// Deterministic in-memory [`RasterService`].
#[derive(Debug, Clone)]
pub struct LocalRasterService {
    layers: HashMap<String, LayerState>,
    composite_mean: Option<Option<f64>>,
    scene_count: Option<usize>,
    composite_fail: bool,
}

impl LocalRasterService {
    /// Create a service seeded with the four soil layers and derived
    /// vegetation values.
    pub fn new() -> Self {
        let mut layers = HashMap::new();
        let defaults = [11.27, 65.0, 38.0, 24.0];
        for (property, value) in SOIL_PROPERTIES.iter().zip(defaults) {
            layers.insert(
                property.image_id.to_string(),
                LayerState {
                    bands: vec![property.band.to_string()],
                    values: HashMap::from([(property.band.to_string(), Some(value))]),
                    fail: false,
                },
            );
        }
        Self {
            layers,
            composite_mean: None,
            scene_count: None,
            composite_fail: false,
        }
    }

    /// Pin the composite reduction result (including `None` for an empty
    /// region).
    pub fn with_composite_mean(mut self, mean: Option<f64>) -> Self {
        self.composite_mean = Some(mean);
        self
    }

    /// Pin the number of scenes surviving the filters.
    pub fn with_scene_count(mut self, count: usize) -> Self {
        self.scene_count = Some(count);
        self
    }

    /// Make composite operations fail with a transport error.
    pub fn with_failing_composite(mut self) -> Self {
        self.composite_fail = true;
        self
    }

    /// Pin one band's reduction value on a layer (including `None` for an
    /// empty region), creating the layer if needed.
    pub fn with_band_value(
        mut self,
        image_id: impl Into<String>,
        band: impl Into<String>,
        value: Option<f64>,
    ) -> Self {
        let image_id = image_id.into();
        let band = band.into();
        let layer = self.layers.entry(image_id).or_insert_with(|| LayerState {
            bands: Vec::new(),
            values: HashMap::new(),
            fail: false,
        });
        if !layer.bands.contains(&band) {
            layer.bands.push(band.clone());
        }
        layer.values.insert(band, value);
        self
    }

    /// Remove one band from a layer, simulating a renamed dataset.
    pub fn without_band(mut self, image_id: &str, band: &str) -> Self {
        if let Some(layer) = self.layers.get_mut(image_id) {
            layer.bands.retain(|b| b != band);
            layer.values.remove(band);
        }
        self
    }

    /// Make every call touching one layer fail with a transport error.
    pub fn with_failing_layer(mut self, image_id: &str) -> Self {
        if let Some(layer) = self.layers.get_mut(image_id) {
            layer.fail = true;
        }
        self
    }

    fn derived_scene_count(&self, request: &CompositeRequest) -> usize {
        let candidates = request.window.span_days() / SCENE_CADENCE_DAYS + 1;
        (0..candidates)
            .filter(|i| (((i * 37) % 100) as f64) < request.max_cloud_pct)
            .count()
    }

    fn derived_composite_mean(&self, request: &CompositeRequest) -> f64 {
        let lat = request.bounds.lat().to_radians();
        let lon = request.bounds.lon().to_radians();
        0.5 + 0.35 * (lat * 3.7).sin() * (lon * 1.3).cos()
    }

    fn layer(&self, image_id: &str, operation: &str) -> RasterResult<&LayerState> {
        let layer = self.layers.get(image_id).ok_or_else(|| {
            RasterError::query(
                "unknown layer",
                ErrorContext::new(operation).with_layer(image_id),
            )
        })?;
        if layer.fail {
            return Err(RasterError::transport(
                "simulated transport failure",
                ErrorContext::new(operation).with_layer(image_id).retryable(),
            ));
        }
        Ok(layer)
    }
}

impl Default for LocalRasterService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RasterService for LocalRasterService {
    async fn build_composite(&self, request: &CompositeRequest) -> RasterResult<CompositeHandle> {
        if self.composite_fail {
            return Err(RasterError::transport(
                "simulated transport failure",
                ErrorContext::new("build_composite")
                    .with_layer(&request.collection)
                    .retryable(),
            ));
        }
        let scene_count = self
            .scene_count
            .unwrap_or_else(|| self.derived_scene_count(request));
        Ok(CompositeHandle {
            request: request.clone(),
            scene_count,
        })
    }

    async fn band_names(&self, image_id: &str) -> RasterResult<Vec<String>> {
        Ok(self.layer(image_id, "band_names")?.bands.clone())
    }

    async fn reduce_region_mean(
        &self,
        target: &RasterTarget,
        band: &str,
        _region: &BufferedPoint,
    ) -> RasterResult<Option<f64>> {
        match target {
            RasterTarget::Composite(handle) => {
                if self.composite_fail {
                    return Err(RasterError::transport(
                        "simulated transport failure",
                        ErrorContext::new("reduce_region_mean")
                            .with_layer(&handle.request.collection)
                            .retryable(),
                    ));
                }
                if band != handle.request.index.output_band {
                    return Err(RasterError::missing_band(&handle.request.collection, band));
                }
                if handle.is_empty() {
                    return Ok(None);
                }
                match self.composite_mean {
                    Some(pinned) => Ok(pinned),
                    None => Ok(Some(self.derived_composite_mean(&handle.request))),
                }
            }
            RasterTarget::Image(image_id) => {
                let layer = self.layer(image_id, "reduce_region_mean")?;
                match layer.values.get(band) {
                    Some(value) => Ok(*value),
                    None => Err(RasterError::missing_band(image_id, band)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::models::geo::{Coordinate, TimeWindow};
    use crate::raster::service::NormalizedDifference;
    use chrono::NaiveDate;

    fn request() -> CompositeRequest {
        CompositeRequest {
            collection: config::S2_COLLECTION.to_string(),
            bounds: Coordinate::new(21.1458, 79.0882).unwrap(),
            window: TimeWindow::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )
            .unwrap(),
            cloud_property: config::CLOUD_METADATA_PROPERTY.to_string(),
            max_cloud_pct: 10.0,
            index: NormalizedDifference {
                nir_band: config::NIR_BAND.to_string(),
                red_band: config::RED_BAND.to_string(),
                output_band: config::NDVI_BAND.to_string(),
            },
        }
    }

    fn region() -> BufferedPoint {
        BufferedPoint {
            center: Coordinate::new(21.1458, 79.0882).unwrap(),
            radius_m: 30.0,
            scale_m: 10.0,
        }
    }

    #[tokio::test]
    async fn test_composite_deterministic() {
        let svc = LocalRasterService::new();
        let a = svc.build_composite(&request()).await.unwrap();
        let b = svc.build_composite(&request()).await.unwrap();
        assert_eq!(a.scene_count, b.scene_count);
        let ma = svc
            .reduce_region_mean(&RasterTarget::Composite(a), config::NDVI_BAND, &region())
            .await
            .unwrap();
        let mb = svc
            .reduce_region_mean(&RasterTarget::Composite(b), config::NDVI_BAND, &region())
            .await
            .unwrap();
        assert_eq!(ma, mb);
        assert!(ma.unwrap() > -1.0 && ma.unwrap() < 1.0);
    }

    #[tokio::test]
    async fn test_empty_composite_reduces_to_none() {
        let svc = LocalRasterService::new().with_scene_count(0);
        let handle = svc.build_composite(&request()).await.unwrap();
        assert!(handle.is_empty());
        let mean = svc
            .reduce_region_mean(
                &RasterTarget::Composite(handle),
                config::NDVI_BAND,
                &region(),
            )
            .await
            .unwrap();
        assert_eq!(mean, None);
    }

    #[tokio::test]
    async fn test_soil_layers_seeded() {
        let svc = LocalRasterService::new();
        for property in &SOIL_PROPERTIES {
            let bands = svc.band_names(property.image_id).await.unwrap();
            assert!(bands.contains(&property.band.to_string()));
            let value = svc
                .reduce_region_mean(
                    &RasterTarget::Image(property.image_id.to_string()),
                    property.band,
                    &region(),
                )
                .await
                .unwrap();
            assert!(value.is_some());
        }
    }

    #[tokio::test]
    async fn test_missing_band_errors() {
        let property = &SOIL_PROPERTIES[0];
        let svc = LocalRasterService::new().without_band(property.image_id, property.band);
        let err = svc
            .reduce_region_mean(
                &RasterTarget::Image(property.image_id.to_string()),
                property.band,
                &region(),
            )
            .await;
        assert!(matches!(err, Err(RasterError::MissingBand { .. })));
    }

    #[tokio::test]
    async fn test_failing_layer_errors() {
        let property = &SOIL_PROPERTIES[1];
        let svc = LocalRasterService::new().with_failing_layer(property.image_id);
        let err = svc.band_names(property.image_id).await;
        assert!(matches!(err, Err(RasterError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_stricter_threshold_fewer_scenes() {
        let svc = LocalRasterService::new();
        let loose = svc.build_composite(&request()).await.unwrap();
        let mut strict_request = request();
        strict_request.max_cloud_pct = 0.0;
        let strict = svc.build_composite(&strict_request).await.unwrap();
        assert!(strict.scene_count <= loose.scene_count);
    }
}
