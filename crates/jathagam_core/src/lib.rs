//! Geocentric ecliptic longitudes for chart construction.
//!
//! The [`Ephemeris`] trait is the seam between the chart builder and any
//! position source. [`AnalyticEphemeris`] is the bundled backend: closed-form
//! series for the Sun and Moon, Keplerian elements for the five classical
//! planets, and the mean or true lunar node for Rahu. It is pure, performs no
//! I/O, and is `Send + Sync`.
//!
//! ```rust,ignore
//! use jathagam_core::{AnalyticEphemeris, Body, Ephemeris, EphemerisConfig};
//! use jathagam_time::JulianDay;
//!
//! let eph = AnalyticEphemeris::new(EphemerisConfig::default());
//! let moon = eph.longitude(JulianDay::new(2_448_057.708_333), Body::Moon)?;
//! ```

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod lunar;
pub mod lunar_nodes;
pub mod nutation;
pub mod planetary;
pub mod precession;
pub mod solar;
pub mod util;

use serde::{Deserialize, Serialize};

pub use analytic::{AnalyticEphemeris, MAX_SUPPORTED_JD, MIN_SUPPORTED_JD};
pub use ayanamsha::{ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg};
pub use error::EphemerisError;
pub use lunar_nodes::{ALL_NODE_MODES, NodeMode};
pub use util::normalize_deg;

pub use jathagam_time::JulianDay;

/// Bodies an ephemeris is queried for.
///
/// Ketu is deliberately absent: it is always opposite Rahu and is derived by
/// the chart builder rather than queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
}

/// All bodies, in chart order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Which zodiac longitudes are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zodiac {
    /// Tropical longitude minus the ayanamsha of the given system.
    Sidereal(AyanamshaSystem),
    /// Longitude from the true equinox of date.
    Tropical,
}

impl Default for Zodiac {
    fn default() -> Self {
        Self::Sidereal(AyanamshaSystem::Lahiri)
    }
}

impl Zodiac {
    pub fn is_sidereal(self) -> bool {
        matches!(self, Self::Sidereal(_))
    }
}

/// Immutable ephemeris settings, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub node_mode: NodeMode,
    pub zodiac: Zodiac,
}

impl EphemerisConfig {
    pub fn new(node_mode: NodeMode, zodiac: Zodiac) -> Self {
        Self { node_mode, zodiac }
    }
}

/// A source of geocentric ecliptic longitudes.
pub trait Ephemeris: Send + Sync {
    /// Longitude of `body` at the UT instant `jd`, in degrees [0, 360).
    fn longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError>;

    /// The zodiac the returned longitudes are measured in.
    fn zodiac(&self) -> Zodiac;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        (**self).longitude(jd, body)
    }

    fn zodiac(&self) -> Zodiac {
        (**self).zodiac()
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for std::sync::Arc<E> {
    fn longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        (**self).longitude(jd, body)
    }

    fn zodiac(&self) -> Zodiac {
        (**self).zodiac()
    }
}
