//! Geocentric longitude of the Moon.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47: the periodic
//! terms of Table 47.A for longitude, the eccentricity factor E on terms
//! involving the Sun's anomaly, and the three additive terms (Venus, Jupiter,
//! Earth flattening). Accurate to about 10″ in longitude.

use crate::nutation::nutation_longitude_deg;
use crate::util::normalize_deg;

/// Table 47.A longitude terms: `[D, M, M', F, Σl coefficient in 1e-6 deg]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 59] = [
    //  D    M    M'   F        Σl
    [  0,   0,   1,   0,   6288774],
    [  2,   0,  -1,   0,   1274027],
    [  2,   0,   0,   0,    658314],
    [  0,   0,   2,   0,    213618],
    [  0,   1,   0,   0,   -185116],
    [  0,   0,   0,   2,   -114332],
    [  2,   0,  -2,   0,     58793],
    [  2,  -1,  -1,   0,     57066],
    [  2,   0,   1,   0,     53322],
    [  2,  -1,   0,   0,     45758],
    [  0,   1,  -1,   0,    -40923],
    [  1,   0,   0,   0,    -34720],
    [  0,   1,   1,   0,    -30383],
    [  2,   0,   0,  -2,     15327],
    [  0,   0,   1,   2,    -12528],
    [  0,   0,   1,  -2,     10980],
    [  4,   0,  -1,   0,     10675],
    [  0,   0,   3,   0,     10034],
    [  4,   0,  -2,   0,      8548],
    [  2,   1,  -1,   0,     -7888],
    [  2,   1,   0,   0,     -6766],
    [  1,   0,  -1,   0,     -5163],
    [  1,   1,   0,   0,      4987],
    [  2,  -1,   1,   0,      4036],
    [  2,   0,   2,   0,      3994],
    [  4,   0,   0,   0,      3861],
    [  2,   0,  -3,   0,      3665],
    [  0,   1,  -2,   0,     -2689],
    [  2,   0,  -1,   2,     -2602],
    [  2,  -1,  -2,   0,      2390],
    [  1,   0,   1,   0,     -2348],
    [  2,  -2,   0,   0,      2236],
    [  0,   1,   2,   0,     -2120],
    [  0,   2,   0,   0,     -2069],
    [  2,  -2,  -1,   0,      2048],
    [  2,   0,   1,  -2,     -1773],
    [  2,   0,   0,   2,     -1595],
    [  4,  -1,  -1,   0,      1215],
    [  0,   0,   2,   2,     -1110],
    [  3,   0,  -1,   0,      -892],
    [  2,   1,   1,   0,      -810],
    [  4,  -1,  -2,   0,       759],
    [  0,   2,  -1,   0,      -713],
    [  2,   2,  -1,   0,      -700],
    [  2,   1,  -2,   0,       691],
    [  2,  -1,   0,  -2,       596],
    [  4,   0,   1,   0,       549],
    [  0,   0,   4,   0,       537],
    [  4,  -1,   0,   0,       520],
    [  1,   0,  -2,   0,      -487],
    [  2,   1,   0,  -2,      -399],
    [  0,   0,   2,  -2,      -381],
    [  1,   1,   1,   0,       351],
    [  3,   0,  -2,   0,      -340],
    [  4,   0,  -3,   0,       330],
    [  2,  -1,   2,   0,       327],
    [  0,   2,   1,   0,      -323],
    [  1,   1,  -1,   0,       299],
    [  2,   0,   3,   0,       294],
];

/// Lunar mean arguments at `t`, in degrees: `(L', D, M, M', F)`.
fn mean_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (lp, d, m, mp, f)
}

/// Geometric longitude of the Moon referred to the mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_mean_equinox_longitude_deg(t: f64) -> f64 {
    let (lp, d, m, mp, f) = mean_arguments(t);
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let arg = (term[0] as f64 * d + term[1] as f64 * m + term[2] as f64 * mp + term[3] as f64 * f)
            .to_radians();
        let ecc = e.powi(term[1].abs());
        sum += term[4] as f64 * ecc * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_deg(lp + sum / 1e6)
}

/// Apparent longitude of the Moon (true equinox of date), in degrees.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    normalize_deg(moon_mean_equinox_longitude_deg(t) + nutation_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_1992_APR_12: f64 = (2_448_724.5 - 2_451_545.0) / 36_525.0;

    #[test]
    fn meeus_example_47a_geometric() {
        let lon = moon_mean_equinox_longitude_deg(T_1992_APR_12);
        assert!((lon - 133.162655).abs() < 0.001, "λ = {lon}");
    }

    #[test]
    fn meeus_example_47a_apparent() {
        let lon = moon_apparent_longitude_deg(T_1992_APR_12);
        assert!((lon - 133.167265).abs() < 0.001, "λ = {lon}");
    }

    #[test]
    fn moves_about_thirteen_degrees_a_day() {
        let day = 1.0 / 36_525.0;
        for i in 0..30 {
            let t = -0.1 + i as f64 * 0.0071;
            let a = moon_apparent_longitude_deg(t);
            let b = moon_apparent_longitude_deg(t + day);
            let step = normalize_deg(b - a);
            assert!((11.5..15.5).contains(&step), "t={t}: {step}°/day");
        }
    }
}
