#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::models::geo::Coordinate;
    use crate::models::soil::SOIL_PROPERTIES;
    use crate::raster::{
        BufferedPoint, CompositeHandle, CompositeRequest, LocalRasterService, RasterResult,
        RasterService, RasterTarget,
    };
    use crate::services::zonal::zonal_mean;

    fn region() -> BufferedPoint {
        BufferedPoint {
            center: Coordinate::new(12.9716, 77.5946).unwrap(),
            radius_m: 250.0,
            scale_m: 250.0,
        }
    }

    fn soil_target() -> RasterTarget {
        RasterTarget::Image(SOIL_PROPERTIES[0].image_id.to_string())
    }

    #[tokio::test]
    async fn test_present_value_passes_through() {
        let svc = LocalRasterService::new().with_band_value(
            SOIL_PROPERTIES[0].image_id,
            SOIL_PROPERTIES[0].band,
            Some(6.8),
        );
        let mean = zonal_mean(
            &svc,
            &soil_target(),
            SOIL_PROPERTIES[0].band,
            &region(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(mean, Some(6.8));
    }

    #[tokio::test]
    async fn test_zero_is_distinct_from_absent() {
        let svc = LocalRasterService::new().with_band_value(
            SOIL_PROPERTIES[0].image_id,
            SOIL_PROPERTIES[0].band,
            Some(0.0),
        );
        let mean = zonal_mean(
            &svc,
            &soil_target(),
            SOIL_PROPERTIES[0].band,
            &region(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(mean, Some(0.0));
    }

    #[tokio::test]
    async fn test_empty_region_is_none() {
        let svc = LocalRasterService::new().with_band_value(
            SOIL_PROPERTIES[0].image_id,
            SOIL_PROPERTIES[0].band,
            None,
        );
        let mean = zonal_mean(
            &svc,
            &soil_target(),
            SOIL_PROPERTIES[0].band,
            &region(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(mean, None);
    }

    #[tokio::test]
    async fn test_transport_error_swallowed() {
        let svc = LocalRasterService::new().with_failing_layer(SOIL_PROPERTIES[0].image_id);
        let mean = zonal_mean(
            &svc,
            &soil_target(),
            SOIL_PROPERTIES[0].band,
            &region(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(mean, None);
    }

    #[tokio::test]
    async fn test_missing_band_swallowed() {
        let svc = LocalRasterService::new();
        let mean = zonal_mean(
            &svc,
            &soil_target(),
            "not_a_band",
            &region(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(mean, None);
    }

    /// Service that never answers; exercises the timeout path.
    struct StalledService;

    #[async_trait]
    impl RasterService for StalledService {
        async fn build_composite(
            &self,
            request: &CompositeRequest,
        ) -> RasterResult<CompositeHandle> {
            Ok(CompositeHandle {
                request: request.clone(),
                scene_count: 1,
            })
        }

        async fn band_names(&self, _image_id: &str) -> RasterResult<Vec<String>> {
            Ok(Vec::new())
        }

        async fn reduce_region_mean(
            &self,
            _target: &RasterTarget,
            _band: &str,
            _region: &BufferedPoint,
        ) -> RasterResult<Option<f64>> {
            futures::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_timeout_is_none() {
        let svc = StalledService;
        let mean = zonal_mean(
            &svc,
            &soil_target(),
            SOIL_PROPERTIES[0].band,
            &region(),
            Duration::from_millis(20),
        )
        .await;
        assert_eq!(mean, None);
    }
}
