//! Civil birth time → UT Julian Day.
//!
//! Resolution order:
//! 1. an explicit UTC offset on the input wins outright;
//! 2. otherwise the IANA zone at the birth place is looked up and its
//!    historical rules (including DST) applied to the local wall-clock time.
//!
//! Local times that fall twice (DST fall-back) resolve to the earlier
//! instant. Local times that never occur (DST spring-forward gap) are
//! rejected.

use std::fmt;

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::birth::BirthInput;
use crate::error::TimeError;
use crate::julian::JulianDay;
use crate::zone::{TzfFinder, ZoneFinder};

/// What to do when a profile has no birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTimePolicy {
    /// Assume 12:00 local time and mark the result as approximate.
    #[default]
    LocalNoon,
    /// Fail with [`TimeError::InvalidInput`].
    Reject,
}

/// Whether the resolved instant came from a recorded time or an assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCertainty {
    Exact,
    AssumedNoon,
}

impl TimeCertainty {
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

/// Where the UTC offset used for a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneSource {
    /// Looked up from coordinates.
    Named(Tz),
    /// Supplied explicitly on the input.
    FixedOffset(FixedOffset),
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(tz) => write!(f, "{tz}"),
            Self::FixedOffset(offset) => write!(f, "UTC{offset}"),
        }
    }
}

/// Outcome of resolving one birth record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBirth {
    pub julian_day: JulianDay,
    pub utc: DateTime<Utc>,
    pub zone: ZoneSource,
    pub certainty: TimeCertainty,
}

/// Turns validated birth inputs into UT instants.
#[derive(Debug)]
pub struct Resolver<F = TzfFinder> {
    finder: F,
    missing_time: MissingTimePolicy,
}

impl Resolver<TzfFinder> {
    /// Resolver backed by the embedded timezone boundary data.
    pub fn new() -> Self {
        Self::with_finder(TzfFinder::new())
    }
}

impl Default for Resolver<TzfFinder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ZoneFinder> Resolver<F> {
    pub fn with_finder(finder: F) -> Self {
        Self {
            finder,
            missing_time: MissingTimePolicy::default(),
        }
    }

    /// Replace the missing-birth-time policy.
    pub fn missing_time_policy(mut self, policy: MissingTimePolicy) -> Self {
        self.missing_time = policy;
        self
    }

    pub fn policy(&self) -> MissingTimePolicy {
        self.missing_time
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// Resolve a birth record to its UT instant.
    pub fn resolve(&self, input: &BirthInput) -> Result<ResolvedBirth, TimeError> {
        let (time, certainty) = match input.time() {
            Some(t) => (t, TimeCertainty::Exact),
            None => match self.missing_time {
                MissingTimePolicy::LocalNoon => (local_noon()?, TimeCertainty::AssumedNoon),
                MissingTimePolicy::Reject => {
                    return Err(TimeError::invalid("birth time is required"));
                }
            },
        };
        let local = NaiveDateTime::new(input.date(), time);

        let (utc, zone) = match input.utc_offset() {
            Some(offset) => (to_utc(&offset, &local)?, ZoneSource::FixedOffset(offset)),
            None => {
                let point = input.location();
                let tz = self.finder.find_zone(&point).ok_or(TimeError::TimezoneResolution {
                    lat: point.latitude(),
                    lng: point.longitude(),
                })?;
                (to_utc(&tz, &local)?, ZoneSource::Named(tz))
            }
        };

        let julian_day = JulianDay::from_utc(&utc);
        tracing::debug!(
            %local,
            %zone,
            %utc,
            jd = julian_day.value(),
            ?certainty,
            "resolved birth time"
        );
        Ok(ResolvedBirth {
            julian_day,
            utc,
            zone,
            certainty,
        })
    }
}

/// Parse persisted birth strings and resolve them to a UT Julian Day.
pub fn resolve_birth<F: ZoneFinder>(
    resolver: &Resolver<F>,
    date: &str,
    time: Option<&str>,
    latitude: f64,
    longitude: f64,
) -> Result<JulianDay, TimeError> {
    let input = BirthInput::parse(date, time, latitude, longitude)?;
    resolver.resolve(&input).map(|r| r.julian_day)
}

fn local_noon() -> Result<NaiveTime, TimeError> {
    NaiveTime::from_hms_opt(12, 0, 0).ok_or_else(|| TimeError::invalid("noon"))
}

fn to_utc<Z: TimeZone>(zone: &Z, local: &NaiveDateTime) -> Result<DateTime<Utc>, TimeError> {
    match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(a, b) => {
            let (a, b) = (a.with_timezone(&Utc), b.with_timezone(&Utc));
            tracing::debug!(%local, "ambiguous local time, taking the earlier instant");
            Ok(a.min(b))
        }
        LocalResult::None => Err(TimeError::invalid(format!(
            "local time {local} does not exist (skipped by a DST transition)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    struct Fixed(Option<Tz>);

    impl ZoneFinder for Fixed {
        fn find_zone(&self, _point: &crate::GeoPoint) -> Option<Tz> {
            self.0
        }
    }

    fn kolkata() -> Resolver<Fixed> {
        Resolver::with_finder(Fixed(Some(chrono_tz::Asia::Kolkata)))
    }

    fn new_york() -> Resolver<Fixed> {
        Resolver::with_finder(Fixed(Some(chrono_tz::America::New_York)))
    }

    #[test]
    fn chennai_morning_birth() {
        let jd = resolve_birth(&kolkata(), "1990-06-15", Some("10:30"), 13.08, 80.27).unwrap();
        assert!((jd.value() - 2_448_057.708_333_333).abs() < 1e-8);
    }

    #[test]
    fn utc_fields_reported() {
        let input = BirthInput::parse("1990-06-15", Some("10:30"), 13.08, 80.27).unwrap();
        let r = kolkata().resolve(&input).unwrap();
        assert_eq!(r.utc.hour(), 5);
        assert_eq!(r.utc.minute(), 0);
        assert_eq!(r.zone, ZoneSource::Named(chrono_tz::Asia::Kolkata));
        assert_eq!(r.certainty, TimeCertainty::Exact);
    }

    #[test]
    fn missing_time_defaults_to_local_noon() {
        let input = BirthInput::parse("1990-06-15", None, 13.08, 80.27).unwrap();
        let r = kolkata().resolve(&input).unwrap();
        assert_eq!(r.certainty, TimeCertainty::AssumedNoon);
        // 12:00 IST = 06:30 UTC
        assert_eq!((r.utc.hour(), r.utc.minute()), (6, 30));
    }

    #[test]
    fn missing_time_rejected_by_policy() {
        let resolver = kolkata().missing_time_policy(MissingTimePolicy::Reject);
        let err = resolve_birth(&resolver, "1990-06-15", None, 13.08, 80.27).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput(_)));
    }

    #[test]
    fn no_zone_found() {
        let resolver = Resolver::with_finder(Fixed(None));
        let err = resolve_birth(&resolver, "1990-06-15", Some("10:30"), 0.0, -140.0).unwrap_err();
        assert!(matches!(err, TimeError::TimezoneResolution { .. }));
    }

    #[test]
    fn explicit_offset_skips_lookup() {
        let resolver = Resolver::with_finder(Fixed(None));
        let input = BirthInput::parse("1990-06-15", Some("10:30"), 13.08, 80.27)
            .unwrap()
            .with_utc_offset_minutes(330)
            .unwrap();
        let r = resolver.resolve(&input).unwrap();
        assert!((r.julian_day.value() - 2_448_057.708_333_333).abs() < 1e-8);
        assert!(matches!(r.zone, ZoneSource::FixedOffset(_)));
    }

    #[test]
    fn dst_summer_offset_applied() {
        // 1990-07-04 12:00 EDT = 16:00 UTC
        let input = BirthInput::new(
            NaiveDate::from_ymd_opt(1990, 7, 4).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0),
            crate::GeoPoint::new(40.71, -74.0).unwrap(),
        );
        let r = new_york().resolve(&input).unwrap();
        assert_eq!(r.utc.hour(), 16);
    }

    #[test]
    fn dst_gap_is_rejected() {
        // 2021-03-14 02:30 never happened in New York
        let err = resolve_birth(&new_york(), "2021-03-14", Some("02:30"), 40.71, -74.0).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput(_)));
    }

    #[test]
    fn dst_overlap_takes_earlier_instant() {
        // 2021-11-07 01:30 happened twice; the EDT one is 05:30 UTC
        let input = BirthInput::parse("2021-11-07", Some("01:30"), 40.71, -74.0).unwrap();
        let r = new_york().resolve(&input).unwrap();
        assert_eq!((r.utc.hour(), r.utc.minute()), (5, 30));
    }

    #[test]
    fn zone_source_display() {
        assert_eq!(
            ZoneSource::Named(chrono_tz::Asia::Kolkata).to_string(),
            "Asia/Kolkata"
        );
    }
}
