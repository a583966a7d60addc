//! Rasi chart construction.
//!
//! A chart is built atomically: all eight ephemeris bodies are queried first
//! and any failure aborts the build. Ketu is never queried; it is placed
//! exactly opposite Rahu.

use serde::Serialize;

use jathagam_core::{Body, Ephemeris, JulianDay, Zodiac, normalize_deg};
use jathagam_time::TimeCertainty;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{NakshatraInfo, resolve_nakshatra};
use crate::raasi::{PlanetPosition, Raasi};

/// Positions of all nine grahas for one instant.
///
/// Serializes as a mapping keyed by lowercase graha name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoroscopeChart {
    pub sun: PlanetPosition,
    pub moon: PlanetPosition,
    pub mars: PlanetPosition,
    pub mercury: PlanetPosition,
    pub jupiter: PlanetPosition,
    pub venus: PlanetPosition,
    pub saturn: PlanetPosition,
    pub rahu: PlanetPosition,
    pub ketu: PlanetPosition,
    #[serde(skip)]
    pub certainty: TimeCertainty,
    #[serde(skip)]
    pub zodiac: Zodiac,
}

impl HoroscopeChart {
    /// Position of one graha.
    pub const fn position(&self, graha: Graha) -> &PlanetPosition {
        match graha {
            Graha::Sun => &self.sun,
            Graha::Moon => &self.moon,
            Graha::Mars => &self.mars,
            Graha::Mercury => &self.mercury,
            Graha::Jupiter => &self.jupiter,
            Graha::Venus => &self.venus,
            Graha::Saturn => &self.saturn,
            Graha::Rahu => &self.rahu,
            Graha::Ketu => &self.ketu,
        }
    }

    /// The Moon's sign (the "raasi" of the native).
    pub const fn moon_raasi(&self) -> Raasi {
        self.moon.raasi
    }

    pub fn nakshatra(&self) -> NakshatraInfo {
        resolve_nakshatra(self.moon.longitude)
    }

    /// The projection used for compatibility matching.
    pub fn profile(&self) -> HoroscopeProfile {
        HoroscopeProfile {
            nakshatra: self.nakshatra(),
            raasi: self.moon_raasi(),
            mars: self.mars,
        }
    }
}

/// Minimal per-person data for Porutham matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoroscopeProfile {
    pub nakshatra: NakshatraInfo,
    /// Moon sign.
    pub raasi: Raasi,
    pub mars: PlanetPosition,
}

impl HoroscopeProfile {
    /// Profile from the Moon's and Mars' longitudes.
    pub fn from_longitudes(moon_longitude: f64, mars_longitude: f64) -> Self {
        Self {
            nakshatra: resolve_nakshatra(moon_longitude),
            raasi: PlanetPosition::from_longitude(moon_longitude).raasi,
            mars: PlanetPosition::from_longitude(mars_longitude),
        }
    }
}

/// Build a chart for a UT instant with an exactly known birth time.
pub fn build_chart<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd: JulianDay,
) -> Result<HoroscopeChart, VedicError> {
    build_chart_with_certainty(ephemeris, jd, TimeCertainty::Exact)
}

/// Build a chart, recording how certain the birth instant is.
pub fn build_chart_with_certainty<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd: JulianDay,
    certainty: TimeCertainty,
) -> Result<HoroscopeChart, VedicError> {
    let place = |body: Body| -> Result<PlanetPosition, VedicError> {
        Ok(PlanetPosition::from_longitude(ephemeris.longitude(jd, body)?))
    };

    let rahu = place(Body::Rahu)?;
    let chart = HoroscopeChart {
        sun: place(Body::Sun)?,
        moon: place(Body::Moon)?,
        mars: place(Body::Mars)?,
        mercury: place(Body::Mercury)?,
        jupiter: place(Body::Jupiter)?,
        venus: place(Body::Venus)?,
        saturn: place(Body::Saturn)?,
        rahu,
        ketu: PlanetPosition::from_longitude(ketu_longitude(rahu.longitude)),
        certainty,
        zodiac: ephemeris.zodiac(),
    };

    tracing::debug!(
        jd = jd.value(),
        moon = chart.moon.longitude,
        raasi = chart.moon.raasi.name(),
        ?certainty,
        "chart built"
    );
    Ok(chart)
}

/// Ketu's longitude: exactly opposite Rahu.
pub fn ketu_longitude(rahu_longitude: f64) -> f64 {
    normalize_deg(rahu_longitude + 180.0)
}
