//! Raasi (zodiac sign) and per-planet sign placement.
//!
//! The ecliptic is divided into 12 equal signs of 30° starting at Mesham.
//! Placement uses floor semantics: a longitude exactly on a boundary belongs
//! to the sign that begins there.

use std::fmt;

use serde::Serialize;

use jathagam_core::normalize_deg;

/// Span of one raasi in degrees.
pub const RAASI_SPAN: f64 = 30.0;

/// The 12 raasis, named as in Tamil almanacs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Raasi {
    Mesham,
    Rishabam,
    Mithunam,
    Kadagam,
    Simmam,
    Kanni,
    Thulam,
    Viruchigam,
    Dhanusu,
    Makaram,
    Kumbam,
    Meenam,
}

/// All 12 raasis in order (0 = Mesham, 11 = Meenam).
pub const ALL_RAASIS: [Raasi; 12] = [
    Raasi::Mesham,
    Raasi::Rishabam,
    Raasi::Mithunam,
    Raasi::Kadagam,
    Raasi::Simmam,
    Raasi::Kanni,
    Raasi::Thulam,
    Raasi::Viruchigam,
    Raasi::Dhanusu,
    Raasi::Makaram,
    Raasi::Kumbam,
    Raasi::Meenam,
];

impl Raasi {
    /// Tamil name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesham => "Mesham",
            Self::Rishabam => "Rishabam",
            Self::Mithunam => "Mithunam",
            Self::Kadagam => "Kadagam",
            Self::Simmam => "Simmam",
            Self::Kanni => "Kanni",
            Self::Thulam => "Thulam",
            Self::Viruchigam => "Viruchigam",
            Self::Dhanusu => "Dhanusu",
            Self::Makaram => "Makaram",
            Self::Kumbam => "Kumbam",
            Self::Meenam => "Meenam",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Mesham => "Mesha",
            Self::Rishabam => "Vrishabha",
            Self::Mithunam => "Mithuna",
            Self::Kadagam => "Karka",
            Self::Simmam => "Simha",
            Self::Kanni => "Kanya",
            Self::Thulam => "Tula",
            Self::Viruchigam => "Vrischika",
            Self::Dhanusu => "Dhanu",
            Self::Makaram => "Makara",
            Self::Kumbam => "Kumbha",
            Self::Meenam => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesham => "Aries",
            Self::Rishabam => "Taurus",
            Self::Mithunam => "Gemini",
            Self::Kadagam => "Cancer",
            Self::Simmam => "Leo",
            Self::Kanni => "Virgo",
            Self::Thulam => "Libra",
            Self::Viruchigam => "Scorpio",
            Self::Dhanusu => "Sagittarius",
            Self::Makaram => "Capricorn",
            Self::Kumbam => "Aquarius",
            Self::Meenam => "Pisces",
        }
    }

    /// 0-based index (Mesham = 0 .. Meenam = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Raasi at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RAASIS[(index % 12) as usize]
    }

    /// Inclusive count from `self` to `other` (1 = same sign, 12 = sign before).
    pub const fn count_to(self, other: Raasi) -> u8 {
        (other.index() + 12 - self.index()) % 12 + 1
    }
}

/// A graha's placement in the chart.
///
/// Always satisfies `house = floor(longitude / 30) + 1`,
/// `degree = longitude mod 30` and `raasi = ALL_RAASIS[house - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub raasi: Raasi,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    /// House counted from Mesham, 1..=12.
    pub house: u8,
    /// Ecliptic longitude, [0, 360).
    pub longitude: f64,
}

impl PlanetPosition {
    /// Place a longitude. Any finite input is normalized into [0, 360) first.
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_deg(longitude);
        // Clamp guards the float edge where lon / 30 rounds to 12.0
        let idx = ((lon / RAASI_SPAN).floor() as u8).min(11);
        let degree = (lon - idx as f64 * RAASI_SPAN).max(0.0);
        Self {
            raasi: ALL_RAASIS[idx as usize],
            degree,
            house: idx + 1,
            longitude: lon,
        }
    }
}

/// Degrees-minutes-seconds form of a within-sign degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Seconds to the nearest hundredth, [0, 60).
    pub seconds: f64,
}

/// Whole seconds; the hundredths are dropped, never rounded up to 60.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}′{:02}″",
            self.degrees,
            self.minutes,
            self.seconds.floor() as u8
        )
    }
}

/// Split an angle into degrees, minutes and seconds.
///
/// Counts in hundredths of an arcsecond so values like 15.99 come out as
/// 15°59′24″ rather than 15°59′23.99999″.
pub fn deg_to_dms(deg: f64) -> Dms {
    const CENTI_PER_DEGREE: u64 = 360_000;
    let centi = (deg.abs() * CENTI_PER_DEGREE as f64).round() as u64;
    Dms {
        degrees: (centi / CENTI_PER_DEGREE) as u16,
        minutes: ((centi / 6_000) % 60) as u8,
        seconds: (centi % 6_000) as f64 / 100.0,
    }
}
