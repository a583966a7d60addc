//! The bundled analytic ephemeris backend.

use jathagam_time::{JulianDay, jd_to_centuries};

use crate::ayanamsha::ayanamsha_deg;
use crate::error::EphemerisError;
use crate::lunar::moon_apparent_longitude_deg;
use crate::lunar_nodes::rahu_deg;
use crate::nutation::nutation_longitude_deg;
use crate::planetary::{Planet, planet_apparent_longitude_deg};
use crate::solar::sun_apparent_longitude_deg;
use crate::util::normalize_deg;
use crate::{Body, Ephemeris, EphemerisConfig, Zodiac};

/// First supported instant: 1800-01-01 00:00 UT.
pub const MIN_SUPPORTED_JD: f64 = 2_378_496.5;

/// Last supported instant: 2050-01-01 00:00 UT, the end of the planetary
/// element table's validity.
pub const MAX_SUPPORTED_JD: f64 = 2_469_807.5;

/// Closed-form ephemeris. Cheap to copy; holds only its configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: EphemerisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EphemerisConfig {
        self.config
    }

    /// Julian centuries of TT for a supported UT instant.
    fn centuries_tt(jd: JulianDay) -> Result<f64, EphemerisError> {
        let value = jd.value();
        if !value.is_finite() {
            return Err(EphemerisError::InvalidEpoch { jd: value });
        }
        if !(MIN_SUPPORTED_JD..=MAX_SUPPORTED_JD).contains(&value) {
            return Err(EphemerisError::OutOfRange {
                jd: value,
                min: MIN_SUPPORTED_JD,
                max: MAX_SUPPORTED_JD,
            });
        }
        Ok(jd_to_centuries(jd.to_tt()))
    }

    /// Tropical longitude (true equinox of date), ignoring the configured zodiac.
    pub fn tropical_longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        let t = Self::centuries_tt(jd)?;
        Ok(self.tropical_at(t, body))
    }

    /// Ayanamsha applied at `jd` (0 for the tropical zodiac).
    pub fn ayanamsha(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        let t = Self::centuries_tt(jd)?;
        Ok(self.ayanamsha_at(t))
    }

    fn tropical_at(&self, t: f64, body: Body) -> f64 {
        match body {
            Body::Sun => sun_apparent_longitude_deg(t),
            Body::Moon => moon_apparent_longitude_deg(t),
            Body::Mercury => planet_apparent_longitude_deg(Planet::Mercury, t),
            Body::Venus => planet_apparent_longitude_deg(Planet::Venus, t),
            Body::Mars => planet_apparent_longitude_deg(Planet::Mars, t),
            Body::Jupiter => planet_apparent_longitude_deg(Planet::Jupiter, t),
            Body::Saturn => planet_apparent_longitude_deg(Planet::Saturn, t),
            Body::Rahu => rahu_deg(t, self.config.node_mode),
        }
    }

    fn ayanamsha_at(&self, t: f64) -> f64 {
        match self.config.zodiac {
            Zodiac::Tropical => 0.0,
            Zodiac::Sidereal(system) => ayanamsha_deg(system, t, nutation_longitude_deg(t)),
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        let t = Self::centuries_tt(jd)?;
        let lon = normalize_deg(self.tropical_at(t, body) - self.ayanamsha_at(t));
        tracing::trace!(body = body.name(), jd = jd.value(), lon, "ephemeris query");
        Ok(lon)
    }

    fn zodiac(&self) -> Zodiac {
        self.config.zodiac
    }
}

// Compile-time assertion: the backend can be shared across threads.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<AnalyticEphemeris>();
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ALL_BODIES, AyanamshaSystem, NodeMode};

    #[test]
    fn rejects_non_finite() {
        let eph = AnalyticEphemeris::default();
        assert!(matches!(
            eph.longitude(JulianDay::new(f64::NAN), Body::Sun),
            Err(EphemerisError::InvalidEpoch { .. })
        ));
        assert!(matches!(
            eph.longitude(JulianDay::new(f64::INFINITY), Body::Moon),
            Err(EphemerisError::InvalidEpoch { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        let eph = AnalyticEphemeris::default();
        for jd in [MIN_SUPPORTED_JD - 1.0, MAX_SUPPORTED_JD + 1.0, 0.0] {
            assert!(matches!(
                eph.longitude(JulianDay::new(jd), Body::Mars),
                Err(EphemerisError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn range_edges_are_inclusive() {
        let eph = AnalyticEphemeris::default();
        assert!(eph.longitude(JulianDay::new(MIN_SUPPORTED_JD), Body::Saturn).is_ok());
        assert!(eph.longitude(JulianDay::new(MAX_SUPPORTED_JD), Body::Saturn).is_ok());
    }

    #[test]
    fn range_ends_where_planet_elements_do() {
        let eph = AnalyticEphemeris::default();
        let last = jathagam_time::calendar_to_jd(2050, 1, 1.0);
        assert_eq!(last, MAX_SUPPORTED_JD);
        assert!(eph.longitude(JulianDay::new(last - 1.0), Body::Jupiter).is_ok());
        assert!(matches!(
            eph.longitude(JulianDay::new(last + 0.5), Body::Jupiter),
            Err(EphemerisError::OutOfRange { .. })
        ));
        // ΔT still covers 2100; the planet elements do not
        let late = JulianDay::new(jathagam_time::calendar_to_jd(2100, 6, 1.0));
        assert!(eph.longitude(late, Body::Sun).is_err());
    }

    #[test]
    fn sidereal_is_tropical_minus_ayanamsha() {
        let eph = AnalyticEphemeris::default();
        let jd = JulianDay::new(2_451_545.0);
        let aya = eph.ayanamsha(jd).unwrap();
        for body in ALL_BODIES {
            let sid = eph.longitude(jd, body).unwrap();
            let trop = eph.tropical_longitude(jd, body).unwrap();
            let diff = normalize_deg(trop - sid);
            assert!((diff - aya).abs() < 1e-9, "{}: {diff} vs {aya}", body.name());
        }
    }

    #[test]
    fn tropical_zodiac_has_zero_ayanamsha() {
        let eph = AnalyticEphemeris::new(EphemerisConfig::new(NodeMode::Mean, Zodiac::Tropical));
        assert_eq!(eph.ayanamsha(JulianDay::new(2_451_545.0)).unwrap(), 0.0);
        assert_eq!(eph.zodiac(), Zodiac::Tropical);
    }

    #[test]
    fn node_mode_changes_only_rahu() {
        let jd = JulianDay::new(2_448_057.708_333);
        let mean = AnalyticEphemeris::new(EphemerisConfig::new(
            NodeMode::Mean,
            Zodiac::Sidereal(AyanamshaSystem::Lahiri),
        ));
        let true_ = AnalyticEphemeris::new(EphemerisConfig::new(
            NodeMode::True,
            Zodiac::Sidereal(AyanamshaSystem::Lahiri),
        ));
        assert_eq!(
            mean.longitude(jd, Body::Moon).unwrap(),
            true_.longitude(jd, Body::Moon).unwrap()
        );
        assert_ne!(
            mean.longitude(jd, Body::Rahu).unwrap(),
            true_.longitude(jd, Body::Rahu).unwrap()
        );
    }

    #[test]
    fn outputs_normalized() {
        let eph = AnalyticEphemeris::default();
        for i in 0..20 {
            let jd = JulianDay::new(MIN_SUPPORTED_JD + i as f64 * 4_500.0);
            for body in ALL_BODIES {
                let lon = eph.longitude(jd, body).unwrap();
                assert!((0.0..360.0).contains(&lon), "{}: {lon}", body.name());
            }
        }
    }
}
