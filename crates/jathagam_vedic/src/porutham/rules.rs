//! The ten standard porutham rules.
//!
//! Star counts run from the bride's nakshatra to the groom's, so the
//! directional rules (dina, mahendra, stree deergam, rasi) are not
//! symmetric in their arguments.

use crate::chart::HoroscopeProfile;
use crate::graha::{NaturalRelation, natural_relation, raasi_lord};

use super::tables::{
    Gana, MAHENDRA_COUNTS, RASI_GOOD_COUNTS, STREE_DEERGA_MIN_COUNT, gana, is_vedha, rajju,
    star_count, vasya, yoni, yoni_enemies,
};
use super::{PoruthamKind, PoruthamRule};

fn count(groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> u8 {
    star_count(bride.nakshatra.nakshatra, groom.nakshatra.nakshatra)
}

/// Dina: count mod 9 is even (0, 2, 4, 6 or 8).
#[derive(Debug, Clone, Copy, Default)]
pub struct DinaPorutham;

impl PoruthamRule for DinaPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Dina
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        count(groom, bride) % 9 % 2 == 0
    }
}

/// Gana: same temperament, or Deva with Manushya.
#[derive(Debug, Clone, Copy, Default)]
pub struct GanaPorutham;

impl PoruthamRule for GanaPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Gana
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        let g = gana(groom.nakshatra.nakshatra);
        let b = gana(bride.nakshatra.nakshatra);
        g == b || (g != Gana::Rakshasa && b != Gana::Rakshasa)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MahendraPorutham;

impl PoruthamRule for MahendraPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Mahendra
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        MAHENDRA_COUNTS.contains(&count(groom, bride))
    }
}

/// Stree Deergam: the groom's star lies well beyond the bride's.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreeDeergaPorutham;

impl PoruthamRule for StreeDeergaPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::StreeDeerga
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        count(groom, bride) > STREE_DEERGA_MIN_COUNT
    }
}

/// Yoni: the stars' animals are not sworn enemies.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoniPorutham;

impl PoruthamRule for YoniPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Yoni
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        !yoni_enemies(yoni(groom.nakshatra.nakshatra), yoni(bride.nakshatra.nakshatra))
    }
}

/// Rasi: favourable sign count, or the same sign under different stars.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasiPorutham;

impl PoruthamRule for RasiPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Rasi
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        if groom.raasi == bride.raasi {
            return groom.nakshatra.nakshatra != bride.nakshatra.nakshatra;
        }
        RASI_GOOD_COUNTS.contains(&bride.raasi.count_to(groom.raasi))
    }
}

/// Rasi Adhipathi: the Moon-sign lords are not enemies either way round.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdhipathiPorutham;

impl PoruthamRule for AdhipathiPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Adhipathi
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        let g = raasi_lord(groom.raasi);
        let b = raasi_lord(bride.raasi);
        natural_relation(g, b) != NaturalRelation::Enemy
            && natural_relation(b, g) != NaturalRelation::Enemy
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VasiyaPorutham;

impl PoruthamRule for VasiyaPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Vasiya
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        vasya(bride.raasi).contains(&groom.raasi) || vasya(groom.raasi).contains(&bride.raasi)
    }
}

/// Rajju: the stars fall in different rajju groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct RajjuPorutham;

impl PoruthamRule for RajjuPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Rajju
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        rajju(groom.nakshatra.nakshatra) != rajju(bride.nakshatra.nakshatra)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VedhaPorutham;

impl PoruthamRule for VedhaPorutham {
    fn kind(&self) -> PoruthamKind {
        PoruthamKind::Vedha
    }

    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool {
        !is_vedha(groom.nakshatra.nakshatra, bride.nakshatra.nakshatra)
    }
}
