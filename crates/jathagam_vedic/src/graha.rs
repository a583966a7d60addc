//! The nine grahas, raasi lordship and natural friendship.
//!
//! Lordship and friendship follow BPHS (Brihat Parashara Hora Shastra).

use serde::Serialize;

use jathagam_core::Body;

use crate::raasi::Raasi;

/// The 9 grahas, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart and report order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, without the nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
];

impl Graha {
    /// English name.
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
            Self::Ketu => "Ketu",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Budha",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Sun => "Suriyan",
            Self::Moon => "Chandiran",
            Self::Mars => "Sevvai",
            Self::Mercury => "Budhan",
            Self::Jupiter => "Guru",
            Self::Venus => "Sukkiran",
            Self::Saturn => "Sani",
            Self::Rahu => "Raagu",
            Self::Ketu => "Kethu",
        }
    }

    /// Lowercase key used in serialized charts.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mars => "mars",
            Self::Mercury => "mercury",
            Self::Jupiter => "jupiter",
            Self::Venus => "venus",
            Self::Saturn => "saturn",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ephemeris body for this graha. Ketu has none; it is derived from Rahu.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mars => Some(Body::Mars),
            Self::Mercury => Some(Body::Mercury),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Venus => Some(Body::Venus),
            Self::Saturn => Some(Body::Saturn),
            Self::Rahu => Some(Body::Rahu),
            Self::Ketu => None,
        }
    }
}

/// Lord of a raasi.
pub const fn raasi_lord(raasi: Raasi) -> Graha {
    match raasi {
        Raasi::Mesham | Raasi::Viruchigam => Graha::Mars,
        Raasi::Rishabam | Raasi::Thulam => Graha::Venus,
        Raasi::Mithunam | Raasi::Kanni => Graha::Mercury,
        Raasi::Kadagam => Graha::Moon,
        Raasi::Simmam => Graha::Sun,
        Raasi::Dhanusu | Raasi::Meenam => Graha::Jupiter,
        Raasi::Makaram | Raasi::Kumbam => Graha::Saturn,
    }
}

/// Natural (naisargika) relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalRelation {
    Friend,
    Neutral,
    Enemy,
}

/// How `graha` regards `other`. Not symmetric: the Moon has no enemies,
/// yet Mercury counts the Moon as one. Any pairing with a node is neutral.
pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    use Graha::*;
    use NaturalRelation::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,

        (Moon, Sun | Mercury) => Friend,

        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,

        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,

        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,

        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,

        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,

        _ => Neutral,
    }
}
