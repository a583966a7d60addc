//! Unified error type for the facade.

use jathagam_core::EphemerisError;
use jathagam_time::TimeError;
use jathagam_vedic::VedicError;

/// Error category, for callers that branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    TimezoneResolution,
    Ephemeris,
    Config,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::TimezoneResolution => "timezone_resolution",
            Self::Ephemeris => "ephemeris",
            Self::Config => "config",
        }
    }
}

/// Errors from any stage of chart computation or configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum JathagamError {
    /// Malformed birth date, time, coordinates or offset.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No timezone for the coordinates and no explicit offset given.
    #[error("no timezone found at ({lat}, {lng}); supply an explicit UTC offset")]
    TimezoneResolution { lat: f64, lng: f64 },

    /// A planet position could not be computed; no chart was produced.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),

    /// Chart construction failed for a reason other than the ephemeris.
    #[error("chart error: {0}")]
    Chart(String),

    /// Unreadable or invalid configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl JathagamError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::TimezoneResolution { .. } => ErrorKind::TimezoneResolution,
            Self::Ephemeris(_) | Self::Chart(_) => ErrorKind::Ephemeris,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<TimeError> for JathagamError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidInput(msg) => Self::InvalidInput(msg),
            TimeError::TimezoneResolution { lat, lng } => Self::TimezoneResolution { lat, lng },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<VedicError> for JathagamError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Ephemeris(e) => Self::Ephemeris(e),
            other => Self::Chart(other.to_string()),
        }
    }
}
