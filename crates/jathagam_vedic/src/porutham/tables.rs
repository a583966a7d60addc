//! Lookup tables for the ten poruthams.
//!
//! All tables are indexed by nakshatra index (0 = Ashwini .. 26 = Revathi)
//! or raasi index (0 = Mesham .. 11 = Meenam), following the classical
//! Tamil matching tables.

use crate::nakshatra::Nakshatra;
use crate::raasi::Raasi;

// ---------------------------------------------------------------------------
// Star counting
// ---------------------------------------------------------------------------

/// Inclusive count from the bride's star to the groom's star, 1..=27.
pub const fn star_count(bride: Nakshatra, groom: Nakshatra) -> u8 {
    bride.count_to(groom)
}

/// Counts from the bride's star that satisfy Mahendra porutham.
pub const MAHENDRA_COUNTS: [u8; 8] = [4, 7, 10, 13, 16, 19, 22, 25];

/// Stree Deergam requires the groom's star beyond this count from the bride's.
pub const STREE_DEERGA_MIN_COUNT: u8 = 13;

// ---------------------------------------------------------------------------
// Gana
// ---------------------------------------------------------------------------

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

#[rustfmt::skip]
const GANA: [Gana; 27] = {
    use Gana::*;
    [
        Deva,     Manushya, Rakshasa, Manushya, Deva,     Manushya, Deva,     Deva,     Rakshasa,
        Rakshasa, Manushya, Manushya, Deva,     Rakshasa, Deva,     Rakshasa, Deva,     Rakshasa,
        Rakshasa, Manushya, Manushya, Deva,     Rakshasa, Rakshasa, Manushya, Manushya, Deva,
    ]
};

pub const fn gana(star: Nakshatra) -> Gana {
    GANA[star.index() as usize]
}

// ---------------------------------------------------------------------------
// Yoni
// ---------------------------------------------------------------------------

/// Yoni animal of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YoniAnimal {
    Horse,
    Elephant,
    Goat,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

#[rustfmt::skip]
const YONI: [YoniAnimal; 27] = {
    use YoniAnimal::*;
    [
        Horse,    Elephant, Goat,    Serpent, Serpent, Dog,     Cat,     Goat,    Cat,
        Rat,      Rat,      Cow,     Buffalo, Tiger,   Buffalo, Tiger,   Deer,    Deer,
        Dog,      Monkey,   Mongoose, Monkey, Lion,    Horse,   Lion,    Cow,     Elephant,
    ]
};

/// Sworn-enemy animal pairs.
pub const YONI_ENEMIES: [(YoniAnimal, YoniAnimal); 7] = [
    (YoniAnimal::Horse, YoniAnimal::Buffalo),
    (YoniAnimal::Elephant, YoniAnimal::Lion),
    (YoniAnimal::Goat, YoniAnimal::Monkey),
    (YoniAnimal::Serpent, YoniAnimal::Mongoose),
    (YoniAnimal::Dog, YoniAnimal::Deer),
    (YoniAnimal::Cat, YoniAnimal::Rat),
    (YoniAnimal::Cow, YoniAnimal::Tiger),
];

pub const fn yoni(star: Nakshatra) -> YoniAnimal {
    YONI[star.index() as usize]
}

/// Whether two animals are sworn enemies (symmetric).
pub fn yoni_enemies(a: YoniAnimal, b: YoniAnimal) -> bool {
    YONI_ENEMIES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

// ---------------------------------------------------------------------------
// Rajju
// ---------------------------------------------------------------------------

/// Body part a nakshatra is tied to in the Rajju scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rajju {
    /// Head.
    Siro,
    /// Neck.
    Kantha,
    /// Navel.
    Nabhi,
    /// Waist.
    Kati,
    /// Feet.
    Pada,
}

pub const ALL_RAJJUS: [Rajju; 5] = [Rajju::Siro, Rajju::Kantha, Rajju::Nabhi, Rajju::Kati, Rajju::Pada];

#[rustfmt::skip]
const RAJJU: [Rajju; 27] = {
    use Rajju::*;
    [
        Pada, Kati, Nabhi, Kantha, Siro, Kantha, Nabhi, Kati, Pada,
        Pada, Kati, Nabhi, Kantha, Siro, Kantha, Nabhi, Kati, Pada,
        Pada, Kati, Nabhi, Kantha, Siro, Kantha, Nabhi, Kati, Pada,
    ]
};

pub const fn rajju(star: Nakshatra) -> Rajju {
    RAJJU[star.index() as usize]
}

// ---------------------------------------------------------------------------
// Vedha
// ---------------------------------------------------------------------------

/// Mutually afflicting star pairs (by index).
pub const VEDHA_PAIRS: [(u8, u8); 15] = [
    (0, 17),
    (1, 16),
    (2, 15),
    (3, 14),
    (5, 21),
    (6, 20),
    (7, 19),
    (8, 18),
    (9, 26),
    (10, 25),
    (11, 24),
    (12, 23),
    (4, 13),
    (13, 22),
    (4, 22),
];

/// Whether two stars afflict each other (symmetric).
pub fn is_vedha(a: Nakshatra, b: Nakshatra) -> bool {
    let (a, b) = (a.index(), b.index());
    VEDHA_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

// ---------------------------------------------------------------------------
// Rasi and Vasiya
// ---------------------------------------------------------------------------

/// Counts from the bride's raasi to the groom's raasi that satisfy Rasi porutham.
pub const RASI_GOOD_COUNTS: [u8; 5] = [7, 9, 10, 11, 12];

/// Signs each raasi holds in vasya (attraction).
pub const fn vasya(raasi: Raasi) -> &'static [Raasi] {
    use Raasi::*;
    match raasi {
        Mesham => &[Simmam, Viruchigam],
        Rishabam => &[Kadagam, Thulam],
        Mithunam => &[Kanni],
        Kadagam => &[Viruchigam, Dhanusu],
        Simmam => &[Thulam],
        Kanni => &[Rishabam, Meenam],
        Thulam => &[Kanni, Makaram],
        Viruchigam => &[Kadagam],
        Dhanusu => &[Meenam],
        Makaram => &[Mesham, Kumbam],
        Kumbam => &[Mesham],
        Meenam => &[Makaram],
    }
}
