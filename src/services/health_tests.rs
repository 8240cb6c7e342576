#[cfg(test)]
mod tests {
    use crate::models::health::HealthCategory;
    use crate::services::health::classify;

    #[test]
    fn test_absent_is_no_data() {
        let assessment = classify(None);
        assert_eq!(assessment.category, HealthCategory::NoData);
        assert_eq!(assessment.color, "gray");
        assert_eq!(assessment.display, "N/A");
    }

    #[test]
    fn test_healthy_above_half() {
        let assessment = classify(Some(0.62));
        assert_eq!(assessment.category, HealthCategory::Healthy);
        assert_eq!(assessment.color, "green");
        assert_eq!(assessment.display, "0.620");
    }

    #[test]
    fn test_moderate_mid_range() {
        let assessment = classify(Some(0.35));
        assert_eq!(assessment.category, HealthCategory::ModeratelyHealthy);
        assert_eq!(assessment.color, "orange");
        assert_eq!(assessment.display, "0.350");
    }

    #[test]
    fn test_boundary_exactly_half_is_moderate() {
        assert_eq!(
            classify(Some(0.5)).category,
            HealthCategory::ModeratelyHealthy
        );
    }

    #[test]
    fn test_boundary_exactly_point_two_is_non_healthy() {
        assert_eq!(classify(Some(0.2)).category, HealthCategory::NonHealthy);
    }

    #[test]
    fn test_just_above_boundaries() {
        assert_eq!(classify(Some(0.5 + 1e-9)).category, HealthCategory::Healthy);
        assert_eq!(
            classify(Some(0.2 + 1e-9)).category,
            HealthCategory::ModeratelyHealthy
        );
    }

    #[test]
    fn test_negative_is_non_healthy() {
        let assessment = classify(Some(-0.4));
        assert_eq!(assessment.category, HealthCategory::NonHealthy);
        assert_eq!(assessment.color, "red");
        assert_eq!(assessment.display, "-0.400");
    }

    #[test]
    fn test_zero_is_present_non_healthy() {
        let assessment = classify(Some(0.0));
        assert_eq!(assessment.category, HealthCategory::NonHealthy);
        assert_eq!(assessment.display, "0.000");
    }

    #[test]
    fn test_three_decimal_formatting() {
        assert_eq!(classify(Some(0.6789)).display, "0.679");
    }

    #[test]
    fn test_total_over_sampled_range() {
        // Every representable input maps to exactly one category.
        let mut v = -1.0;
        while v <= 1.0 {
            let category = classify(Some(v)).category;
            if v > 0.5 {
                assert_eq!(category, HealthCategory::Healthy);
            } else if v > 0.2 {
                assert_eq!(category, HealthCategory::ModeratelyHealthy);
            } else {
                assert_eq!(category, HealthCategory::NonHealthy);
            }
            v += 0.01;
        }
    }
}
