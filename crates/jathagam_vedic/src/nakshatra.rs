//! Nakshatra (birth star) and pada from the Moon's longitude.
//!
//! 27 equal nakshatras of 13°20′, each split into 4 padas of 3°20′.
//! Floor semantics at every boundary: 13°20′ exactly is Bharani pada 1.

use serde::Serialize;

use jathagam_core::normalize_deg;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 90/27 degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras with their Tamil names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigasira,
    Thiruvathirai,
    Punarpoosam,
    Poosam,
    Aayilyam,
    Magam,
    Pooram,
    Uthiram,
    Hastham,
    Chithirai,
    Swathi,
    Visakam,
    Anusham,
    Kettai,
    Moolam,
    Pooradam,
    Uthiradam,
    Thiruvonam,
    Avittam,
    Sadhayam,
    Poorattathi,
    Uthirattathi,
    Revathi,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revathi).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigasira,
    Nakshatra::Thiruvathirai,
    Nakshatra::Punarpoosam,
    Nakshatra::Poosam,
    Nakshatra::Aayilyam,
    Nakshatra::Magam,
    Nakshatra::Pooram,
    Nakshatra::Uthiram,
    Nakshatra::Hastham,
    Nakshatra::Chithirai,
    Nakshatra::Swathi,
    Nakshatra::Visakam,
    Nakshatra::Anusham,
    Nakshatra::Kettai,
    Nakshatra::Moolam,
    Nakshatra::Pooradam,
    Nakshatra::Uthiradam,
    Nakshatra::Thiruvonam,
    Nakshatra::Avittam,
    Nakshatra::Sadhayam,
    Nakshatra::Poorattathi,
    Nakshatra::Uthirattathi,
    Nakshatra::Revathi,
];

impl Nakshatra {
    /// Tamil name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigasira => "Mrigasira",
            Self::Thiruvathirai => "Thiruvathirai",
            Self::Punarpoosam => "Punarpoosam",
            Self::Poosam => "Poosam",
            Self::Aayilyam => "Aayilyam",
            Self::Magam => "Magam",
            Self::Pooram => "Pooram",
            Self::Uthiram => "Uthiram",
            Self::Hastham => "Hastham",
            Self::Chithirai => "Chithirai",
            Self::Swathi => "Swathi",
            Self::Visakam => "Visakam",
            Self::Anusham => "Anusham",
            Self::Kettai => "Kettai",
            Self::Moolam => "Moolam",
            Self::Pooradam => "Pooradam",
            Self::Uthiradam => "Uthiradam",
            Self::Thiruvonam => "Thiruvonam",
            Self::Avittam => "Avittam",
            Self::Sadhayam => "Sadhayam",
            Self::Poorattathi => "Poorattathi",
            Self::Uthirattathi => "Uthirattathi",
            Self::Revathi => "Revathi",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigasira => "Mrigashira",
            Self::Thiruvathirai => "Ardra",
            Self::Punarpoosam => "Punarvasu",
            Self::Poosam => "Pushya",
            Self::Aayilyam => "Ashlesha",
            Self::Magam => "Magha",
            Self::Pooram => "Purva Phalguni",
            Self::Uthiram => "Uttara Phalguni",
            Self::Hastham => "Hasta",
            Self::Chithirai => "Chitra",
            Self::Swathi => "Swati",
            Self::Visakam => "Vishakha",
            Self::Anusham => "Anuradha",
            Self::Kettai => "Jyeshtha",
            Self::Moolam => "Mula",
            Self::Pooradam => "Purva Ashadha",
            Self::Uthiradam => "Uttara Ashadha",
            Self::Thiruvonam => "Shravana",
            Self::Avittam => "Dhanishtha",
            Self::Sadhayam => "Shatabhisha",
            Self::Poorattathi => "Purva Bhadrapada",
            Self::Uthirattathi => "Uttara Bhadrapada",
            Self::Revathi => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revathi = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra at a 0-based index, wrapping modulo 27.
    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }

    /// Inclusive count from `self` to `other` (1 = same star, 27 = star before).
    pub const fn count_to(self, other: Nakshatra) -> u8 {
        (other.index() + 27 - self.index()) % 27 + 1
    }
}

/// Resolved birth star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NakshatraInfo {
    #[serde(rename = "name")]
    pub nakshatra: Nakshatra,
    /// 0-based index, 0..=26.
    pub index: u8,
    /// Quarter within the nakshatra, 1..=4.
    pub pada: u8,
}

impl NakshatraInfo {
    pub const fn name(&self) -> &'static str {
        self.nakshatra.name()
    }
}

/// Padas in the full circle.
const PADAS_PER_CIRCLE: f64 = 108.0;

/// Pada-unit distance within which a longitude counts as sitting on a boundary.
const BOUNDARY_SNAP: f64 = 1e-10;

/// Nakshatra and pada for a Moon longitude in degrees.
///
/// Works in whole padas so that a longitude on a pada or nakshatra boundary,
/// including the nearest double to one such as `7.0 * NAKSHATRA_SPAN`,
/// falls into the division that begins there.
pub fn resolve_nakshatra(moon_longitude: f64) -> NakshatraInfo {
    let lon = normalize_deg(moon_longitude);
    let scaled = lon * PADAS_PER_CIRCLE / 360.0;
    let nearest = scaled.round();
    let padas = if (scaled - nearest).abs() < BOUNDARY_SNAP {
        nearest
    } else {
        scaled.floor()
    };
    let padas = (padas as u16) % 108;
    let idx = (padas / 4).min(26) as u8;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        index: idx,
        pada: (padas % 4) as u8 + 1,
    }
}
