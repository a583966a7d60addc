//! Porutham (marriage compatibility) matching.
//!
//! Ten criteria, each a [`PoruthamRule`] held in a [`PoruthamRegistry`].
//! The result is ten named booleans plus their count; no weighting and no
//! acceptance threshold is applied here.

pub mod rules;
pub mod tables;

use std::sync::OnceLock;

use serde::Serialize;

use crate::chart::HoroscopeProfile;

use rules::{
    AdhipathiPorutham, DinaPorutham, GanaPorutham, MahendraPorutham, RajjuPorutham, RasiPorutham,
    StreeDeergaPorutham, VasiyaPorutham, VedhaPorutham, YoniPorutham,
};

/// The ten poruthams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoruthamKind {
    Dina,
    Gana,
    Mahendra,
    StreeDeerga,
    Yoni,
    Rasi,
    Adhipathi,
    Vasiya,
    Rajju,
    Vedha,
}

/// All kinds in result order.
pub const ALL_PORUTHAM_KINDS: [PoruthamKind; 10] = [
    PoruthamKind::Dina,
    PoruthamKind::Gana,
    PoruthamKind::Mahendra,
    PoruthamKind::StreeDeerga,
    PoruthamKind::Yoni,
    PoruthamKind::Rasi,
    PoruthamKind::Adhipathi,
    PoruthamKind::Vasiya,
    PoruthamKind::Rajju,
    PoruthamKind::Vedha,
];

impl PoruthamKind {
    /// snake_case key, as serialized.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dina => "dina",
            Self::Gana => "gana",
            Self::Mahendra => "mahendra",
            Self::StreeDeerga => "stree_deerga",
            Self::Yoni => "yoni",
            Self::Rasi => "rasi",
            Self::Adhipathi => "adhipathi",
            Self::Vasiya => "vasiya",
            Self::Rajju => "rajju",
            Self::Vedha => "vedha",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dina => "Dina",
            Self::Gana => "Gana",
            Self::Mahendra => "Mahendra",
            Self::StreeDeerga => "Stree Deergam",
            Self::Yoni => "Yoni",
            Self::Rasi => "Rasi",
            Self::Adhipathi => "Rasi Adhipathi",
            Self::Vasiya => "Vasiya",
            Self::Rajju => "Rajju",
            Self::Vedha => "Vedha",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// One compatibility criterion: a pure predicate over two profiles.
pub trait PoruthamRule: Send + Sync {
    fn kind(&self) -> PoruthamKind;

    /// Whether the pair satisfies this criterion.
    fn matches(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> bool;
}

/// Outcome of matching two profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoruthamResult {
    pub dina: bool,
    pub gana: bool,
    pub mahendra: bool,
    pub stree_deerga: bool,
    pub yoni: bool,
    pub rasi: bool,
    pub adhipathi: bool,
    pub vasiya: bool,
    pub rajju: bool,
    pub vedha: bool,
    /// Number of criteria satisfied, 0..=10.
    pub total: u8,
}

impl PoruthamResult {
    pub const fn get(&self, kind: PoruthamKind) -> bool {
        match kind {
            PoruthamKind::Dina => self.dina,
            PoruthamKind::Gana => self.gana,
            PoruthamKind::Mahendra => self.mahendra,
            PoruthamKind::StreeDeerga => self.stree_deerga,
            PoruthamKind::Yoni => self.yoni,
            PoruthamKind::Rasi => self.rasi,
            PoruthamKind::Adhipathi => self.adhipathi,
            PoruthamKind::Vasiya => self.vasiya,
            PoruthamKind::Rajju => self.rajju,
            PoruthamKind::Vedha => self.vedha,
        }
    }

    fn set(&mut self, kind: PoruthamKind, value: bool) {
        let slot = match kind {
            PoruthamKind::Dina => &mut self.dina,
            PoruthamKind::Gana => &mut self.gana,
            PoruthamKind::Mahendra => &mut self.mahendra,
            PoruthamKind::StreeDeerga => &mut self.stree_deerga,
            PoruthamKind::Yoni => &mut self.yoni,
            PoruthamKind::Rasi => &mut self.rasi,
            PoruthamKind::Adhipathi => &mut self.adhipathi,
            PoruthamKind::Vasiya => &mut self.vasiya,
            PoruthamKind::Rajju => &mut self.rajju,
            PoruthamKind::Vedha => &mut self.vedha,
        };
        *slot = value;
    }

    /// `(kind, satisfied)` in result order.
    pub fn iter(&self) -> impl Iterator<Item = (PoruthamKind, bool)> + '_ {
        ALL_PORUTHAM_KINDS.into_iter().map(|k| (k, self.get(k)))
    }

    /// Whether at least `threshold` criteria are satisfied.
    pub const fn is_acceptable(&self, threshold: u8) -> bool {
        self.total >= threshold
    }
}

/// Ordered set of porutham rules, at most one per kind.
///
/// A kind with no registered rule evaluates to `false`.
pub struct PoruthamRegistry {
    rules: Vec<Box<dyn PoruthamRule>>,
}

impl PoruthamRegistry {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// All ten standard rules.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry
            .register(DinaPorutham)
            .register(GanaPorutham)
            .register(MahendraPorutham)
            .register(StreeDeergaPorutham)
            .register(YoniPorutham)
            .register(RasiPorutham)
            .register(AdhipathiPorutham)
            .register(VasiyaPorutham)
            .register(RajjuPorutham)
            .register(VedhaPorutham);
        registry
    }

    /// Add a rule, replacing any existing rule of the same kind.
    pub fn register<R: PoruthamRule + 'static>(&mut self, rule: R) -> &mut Self {
        let kind = rule.kind();
        match self.rules.iter().position(|r| r.kind() == kind) {
            Some(i) => self.rules[i] = Box::new(rule),
            None => self.rules.push(Box::new(rule)),
        }
        self
    }

    pub fn kinds(&self) -> impl Iterator<Item = PoruthamKind> + '_ {
        self.rules.iter().map(|r| r.kind())
    }

    /// Run every rule over the pair.
    pub fn evaluate(&self, groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> PoruthamResult {
        let mut result = PoruthamResult::default();
        for rule in &self.rules {
            let ok = rule.matches(groom, bride);
            tracing::trace!(kind = rule.kind().name(), ok, "porutham rule");
            result.set(rule.kind(), ok);
        }
        result.total = ALL_PORUTHAM_KINDS
            .iter()
            .filter(|&&k| result.get(k))
            .count() as u8;
        result
    }
}

impl Default for PoruthamRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PoruthamRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

fn standard_registry() -> &'static PoruthamRegistry {
    static STANDARD: OnceLock<PoruthamRegistry> = OnceLock::new();
    STANDARD.get_or_init(PoruthamRegistry::standard)
}

/// Match two profiles with the standard rules.
pub fn calculate_porutham(groom: &HoroscopeProfile, bride: &HoroscopeProfile) -> PoruthamResult {
    let result = standard_registry().evaluate(groom, bride);
    tracing::debug!(
        groom = groom.nakshatra.name(),
        bride = bride.nakshatra.name(),
        total = result.total,
        "porutham evaluated"
    );
    result
}
