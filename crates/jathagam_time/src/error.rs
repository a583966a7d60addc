//! Error types for birth time resolution.

/// Errors from validating birth inputs or resolving them to UT.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Malformed or out-of-range birth data (date, time, coordinates, offset).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The coordinates do not map to a known timezone.
    ///
    /// Callers can retry with an explicit UTC offset on the [`crate::BirthInput`].
    #[error("no timezone found at ({lat}, {lng}); supply an explicit UTC offset")]
    TimezoneResolution { lat: f64, lng: f64 },
}

impl TimeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
