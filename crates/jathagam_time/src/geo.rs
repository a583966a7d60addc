//! Validated geographic coordinates.

use serde::Serialize;

use crate::error::TimeError;

/// A birth place on the Earth's surface, in decimal degrees.
///
/// Always valid once constructed: latitude in [-90, 90], longitude in
/// [-180, 180] (east positive), both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Validate and build a location.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, TimeError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TimeError::invalid(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(TimeError::invalid(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}
