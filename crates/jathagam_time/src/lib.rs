//! Civil birth time and place resolution.
//!
//! This crate provides:
//! - Julian Day ↔ proleptic Gregorian calendar conversions
//! - ΔT (TT − UT) estimates for converting UT to dynamical time
//! - Validated birth inputs (date, optional time, coordinates, optional offset)
//! - Timezone lookup from coordinates and DST-aware civil → UT conversion

pub mod birth;
pub mod delta_t;
pub mod error;
pub mod geo;
pub mod julian;
pub mod resolver;
pub mod zone;

pub use birth::BirthInput;
pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::TimeError;
pub use geo::GeoPoint;
pub use julian::{
    J2000_JD, JulianDay, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use resolver::{
    MissingTimePolicy, ResolvedBirth, Resolver, TimeCertainty, ZoneSource, resolve_birth,
};
pub use zone::{TzfFinder, ZoneFinder};
