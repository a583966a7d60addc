//! Dosha (affliction) detection.
//!
//! Each dosha is a [`DoshaRule`]: a named, pure predicate over a chart.
//! A [`DoshaRegistry`] evaluates every registered rule and reports the
//! results as [`DoshaFlags`]. Adding a dosha means registering a new rule;
//! existing rules are untouched.

use std::collections::BTreeMap;

use serde::Serialize;

use jathagam_core::normalize_deg;

use crate::chart::HoroscopeChart;
use crate::graha::SAPTA_GRAHAS;
use crate::raasi::PlanetPosition;

/// Flag name for Chevvai (Mars) dosham.
pub const CHEVVAI: &str = "chevvai";

/// Flag name for Kala Sarpa dosham.
pub const KALA_SARPA: &str = "kala_sarpa";

/// Houses (counted from Mesham) that give Chevvai dosham.
pub const CHEVVAI_HOUSES: [u8; 5] = [1, 4, 7, 8, 12];

/// A single named dosha predicate.
pub trait DoshaRule: Send + Sync {
    /// Stable snake_case flag name.
    fn name(&self) -> &'static str;

    /// Whether the dosha is present in `chart`.
    fn detect(&self, chart: &HoroscopeChart) -> bool;
}

/// Mars in house 1, 4, 7, 8 or 12.
pub fn detect_chevvai_dosham(mars: &PlanetPosition) -> bool {
    CHEVVAI_HOUSES.contains(&mars.house)
}

/// All seven classical grahas strictly on one side of the Rahu–Ketu axis.
pub fn detect_kala_sarpa(chart: &HoroscopeChart) -> bool {
    let rahu = chart.rahu.longitude;
    let offsets = SAPTA_GRAHAS.map(|g| normalize_deg(chart.position(g).longitude - rahu));
    let rahu_side = offsets.iter().all(|&d| d > 0.0 && d < 180.0);
    let ketu_side = offsets.iter().all(|&d| d > 180.0);
    rahu_side || ketu_side
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChevvaiDosham;

impl DoshaRule for ChevvaiDosham {
    fn name(&self) -> &'static str {
        CHEVVAI
    }

    fn detect(&self, chart: &HoroscopeChart) -> bool {
        detect_chevvai_dosham(&chart.mars)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KalaSarpaDosham;

impl DoshaRule for KalaSarpaDosham {
    fn name(&self) -> &'static str {
        KALA_SARPA
    }

    fn detect(&self, chart: &HoroscopeChart) -> bool {
        detect_kala_sarpa(chart)
    }
}

/// Result of running a [`DoshaRegistry`] over one chart.
///
/// Serializes as a flat `{ name: bool }` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DoshaFlags(BTreeMap<&'static str, bool>);

impl DoshaFlags {
    /// Flag by name; `None` if no rule of that name ran.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn chevvai(&self) -> bool {
        self.get(CHEVVAI).unwrap_or(false)
    }

    pub fn kala_sarpa(&self) -> bool {
        self.get(KALA_SARPA).unwrap_or(false)
    }

    /// Whether any dosha is present.
    pub fn any(&self) -> bool {
        self.0.values().any(|&v| v)
    }

    /// `(name, present)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered set of dosha rules, unique by name.
pub struct DoshaRegistry {
    rules: Vec<Box<dyn DoshaRule>>,
}

impl DoshaRegistry {
    /// Registry with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Chevvai and Kala Sarpa.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(ChevvaiDosham);
        registry.register(KalaSarpaDosham);
        registry
    }

    /// Add a rule. A rule with the same name replaces the earlier one.
    pub fn register<R: DoshaRule + 'static>(&mut self, rule: R) -> &mut Self {
        let name = rule.name();
        match self.rules.iter().position(|r| r.name() == name) {
            Some(i) => self.rules[i] = Box::new(rule),
            None => self.rules.push(Box::new(rule)),
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    pub fn detect(&self, chart: &HoroscopeChart) -> DoshaFlags {
        DoshaFlags(self.rules.iter().map(|r| (r.name(), r.detect(chart))).collect())
    }
}

impl Default for DoshaRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for DoshaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Human-readable label for a flag name: `kala_sarpa` → `Kala Sarpa Dosham`.
pub fn dosha_label(name: &str) -> String {
    let words: Vec<String> = name
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("{} Dosham", words.join(" "))
}
