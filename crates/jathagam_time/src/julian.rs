//! Julian Day numbers and calendar conversion.
//!
//! Dates are proleptic Gregorian throughout, including dates before the
//! 1582 reform. Algorithm from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 7.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::delta_t::{decimal_year, delta_t_seconds};

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to a Julian Day.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `15.5` = 15th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Day back to `(year, month, fractional day)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// A continuous day count on the UT time scale.
///
/// This is the instant every chart is built for: the time resolver produces
/// it from civil time, and the ephemeris consumes it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wrap a raw Julian Day value (UT).
    pub const fn new(jd_ut: f64) -> Self {
        Self(jd_ut)
    }

    /// Raw Julian Day value (UT).
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Julian Day of a UTC instant, including the sub-day fraction
    /// `(hour + minute/60 + second/3600) / 24`.
    pub fn from_utc(instant: &DateTime<Utc>) -> Self {
        let seconds = instant.second() as f64 + instant.nanosecond() as f64 * 1e-9;
        let hours = instant.hour() as f64 + instant.minute() as f64 / 60.0 + seconds / 3600.0;
        let midnight = calendar_to_jd(instant.year(), instant.month(), instant.day() as f64);
        Self(midnight + hours / 24.0)
    }

    /// Julian Day on the TT scale (UT + ΔT).
    pub fn to_tt(self) -> f64 {
        let dt = delta_t_seconds(decimal_year(self.0));
        self.0 + dt / SECONDS_PER_DAY
    }

    /// Julian centuries of UT since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        jd_to_centuries(self.0)
    }
}

/// Julian centuries since J2000.0 for a raw Julian Day on any scale.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
