//! Error types for ephemeris queries.

/// Errors from an [`crate::Ephemeris`] query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The Julian Day is NaN or infinite.
    #[error("invalid epoch: JD {jd} is not finite")]
    InvalidEpoch { jd: f64 },

    /// The Julian Day lies outside the backend's validated range.
    #[error("epoch JD {jd} outside supported range [{min}, {max}]")]
    OutOfRange { jd: f64, min: f64, max: f64 },
}
