//! Geographic primitives: validated coordinates and time windows.

use chrono::NaiveDate;
use serde::Serialize;

/// Validation errors for geographic inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("Latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),
    #[error("Longitude {0} out of range [-180, 180]")]
    InvalidLongitude(f64),
    #[error("Invalid time window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

/// A (latitude, longitude) pair in degrees.
///
/// Constructed only through [`Coordinate::new`], which enforces the valid
/// ranges, so every `Coordinate` in the pipeline is well-formed. Serialize
/// only; inbound DTOs carry raw numbers and validate on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees, must be in [-90, 90]
    /// * `lon` - Longitude in degrees, must be in [-180, 180]
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) || lat.is_nan() {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) || lon.is_nan() {
            return Err(GeoError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// An inclusive calendar-date window with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeWindow {
    /// Create a validated time window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, GeoError> {
        if start > end {
            return Err(GeoError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Window span in whole days (0 for a single-day window).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_coordinate_valid() {
        let c = Coordinate::new(22.5726, 88.3639).unwrap();
        assert_eq!(c.lat(), 22.5726);
        assert_eq!(c.lon(), 88.3639);
    }

    #[test]
    fn test_coordinate_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_invalid_latitude() {
        assert_eq!(
            Coordinate::new(90.1, 0.0),
            Err(GeoError::InvalidLatitude(90.1))
        );
    }

    #[test]
    fn test_coordinate_invalid_longitude() {
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(GeoError::InvalidLongitude(-180.5))
        );
    }

    #[test]
    fn test_coordinate_nan_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_window_valid() {
        let w = TimeWindow::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(w.span_days(), 30);
    }

    #[test]
    fn test_window_single_day() {
        let w = TimeWindow::new(date(2024, 6, 1), date(2024, 6, 1)).unwrap();
        assert_eq!(w.span_days(), 0);
    }

    #[test]
    fn test_window_inverted() {
        let err = TimeWindow::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(err, Err(GeoError::InvalidWindow { .. })));
    }
}
