//! Rahu: the Moon's ascending node.
//!
//! Mean node: the 5th Delaunay argument Ω (IERS Conventions 2010).
//! True node: mean plus the five periodic terms of Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 47.
//!
//! Ketu is not computed here; it is always Rahu + 180°, derived by the chart.

use serde::{Deserialize, Serialize};

use crate::nutation::fundamental_arguments;
use crate::util::normalize_deg;

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean plus short-period perturbations (up to ~1.7°).
    True,
}

pub const ALL_NODE_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

/// `[l, l', F, D, Ω, amplitude (deg)]`
#[rustfmt::skip]
static PERTURBATIONS: [[f64; 6]; 5] = [
    [ 0.0,  0.0, -2.0,  2.0,  0.0, -1.4979],
    [ 0.0,  1.0,  0.0,  0.0,  0.0, -0.1500],
    [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.1226],
    [ 0.0,  0.0,  2.0,  0.0,  0.0,  0.1176],
    [ 2.0,  0.0, -2.0,  0.0,  0.0, -0.0801],
];

fn perturbation_deg(args: &[f64; 5]) -> f64 {
    PERTURBATIONS
        .iter()
        .map(|row| {
            let angle: f64 = row[..5].iter().zip(args).map(|(n, a)| n * a).sum();
            row[5] * angle.sin()
        })
        .sum()
}

/// Mean Rahu longitude (mean equinox of date), degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_deg(fundamental_arguments(t)[4].to_degrees())
}

/// True Rahu longitude, degrees in [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_deg(args[4].to_degrees() + perturbation_deg(&args))
}

/// Rahu longitude for the given mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}
