//! Error types for chart construction.

use jathagam_core::EphemerisError;

/// Errors from building a chart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A body's longitude could not be computed; no chart is produced.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
