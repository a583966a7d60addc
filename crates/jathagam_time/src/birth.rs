//! Birth inputs as supplied by the surrounding application.
//!
//! Profiles store `date_of_birth` as `YYYY-MM-DD`, `birth_time` as `HH:MM`
//! (or `HH:MM:SS`, or empty), and the birth place as coordinates. Everything
//! is validated here, before any timezone lookup happens.

use chrono::{FixedOffset, NaiveDate, NaiveTime};

use crate::error::TimeError;
use crate::geo::GeoPoint;

/// Largest accepted explicit UTC offset, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Validated civil birth data.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    date: NaiveDate,
    time: Option<NaiveTime>,
    location: GeoPoint,
    utc_offset: Option<FixedOffset>,
}

impl BirthInput {
    /// Build from already-typed parts.
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, location: GeoPoint) -> Self {
        Self {
            date,
            time,
            location,
            utc_offset: None,
        }
    }

    /// Build from numeric calendar fields. `time` is `(hour, minute, second)`.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        time: Option<(u32, u32, u32)>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, TimeError> {
        let location = GeoPoint::new(latitude, longitude)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::invalid(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
        })?;
        let time = time
            .map(|(h, m, s)| {
                NaiveTime::from_hms_opt(h, m, s).ok_or_else(|| {
                    TimeError::invalid(format!("{h:02}:{m:02}:{s:02} is not a time of day"))
                })
            })
            .transpose()?;
        Ok(Self::new(date, time, location))
    }

    /// Parse the application's persisted strings.
    ///
    /// An empty or whitespace-only `time` is treated as absent.
    pub fn parse(
        date: &str,
        time: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, TimeError> {
        let location = GeoPoint::new(latitude, longitude)?;
        let date = parse_date(date)?;
        let time = match time.map(str::trim) {
            None | Some("") => None,
            Some(t) => Some(parse_time(t)?),
        };
        Ok(Self::new(date, time, location))
    }

    /// Attach an explicit UTC offset (minutes east of UTC).
    ///
    /// When present, the offset is used as-is and no timezone lookup is done.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::invalid(format!(
                "UTC offset {minutes} min outside ±{MAX_OFFSET_MINUTES} min"
            )));
        }
        let offset = FixedOffset::east_opt(minutes * 60)
            .ok_or_else(|| TimeError::invalid(format!("UTC offset {minutes} min")))?;
        self.utc_offset = Some(offset);
        Ok(self)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| TimeError::invalid(format!("date_of_birth {s:?}: {e}")))
}

fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| TimeError::invalid(format!("birth_time {s:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let input = BirthInput::parse("1990-06-15", Some("10:30"), 13.08, 80.27).unwrap();
        assert_eq!(input.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        assert_eq!(input.time(), NaiveTime::from_hms_opt(10, 30, 0));
        assert!(input.utc_offset().is_none());
    }

    #[test]
    fn parse_time_with_seconds() {
        let input = BirthInput::parse("1990-06-15", Some("10:30:15"), 13.08, 80.27).unwrap();
        assert_eq!(input.time(), NaiveTime::from_hms_opt(10, 30, 15));
    }

    #[test]
    fn empty_time_is_absent() {
        let input = BirthInput::parse("1990-06-15", Some("  "), 13.08, 80.27).unwrap();
        assert!(input.time().is_none());
    }

    #[test]
    fn feb_30_is_invalid() {
        let err = BirthInput::parse("1990-02-30", Some("10:30"), 13.08, 80.27).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput(_)));
    }

    #[test]
    fn feb_29_only_in_leap_years() {
        assert!(BirthInput::from_calendar(2000, 2, 29, None, 0.0, 0.0).is_ok());
        assert!(BirthInput::from_calendar(1900, 2, 29, None, 0.0, 0.0).is_err());
        assert!(BirthInput::from_calendar(1992, 2, 29, None, 0.0, 0.0).is_ok());
    }

    #[test]
    fn invalid_time_rejected() {
        assert!(BirthInput::parse("1990-06-15", Some("24:10"), 13.08, 80.27).is_err());
        assert!(BirthInput::from_calendar(1990, 6, 15, Some((10, 61, 0)), 13.08, 80.27).is_err());
    }

    #[test]
    fn bad_latitude_rejected() {
        let err = BirthInput::parse("1990-06-15", Some("10:30"), 999.0, 80.27).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput(_)));
    }

    #[test]
    fn utc_offset_bounds() {
        let input = BirthInput::parse("1990-06-15", None, 0.0, 0.0).unwrap();
        assert!(input.clone().with_utc_offset_minutes(330).is_ok());
        assert!(input.clone().with_utc_offset_minutes(-18 * 60).is_ok());
        assert!(input.with_utc_offset_minutes(19 * 60).is_err());
    }
}
