//! Delaunay fundamental arguments and low-precision nutation in longitude.
//!
//! Fundamental arguments from IERS Conventions 2010, Table 5.2e.
//! Δψ from the four dominant terms given in Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 22, good to about 0.5″. That is far below
//! the resolution of any sign, nakshatra or pada boundary decision.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // l: mean anomaly of the Moon
    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    // l': mean anomaly of the Sun
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    // F: Moon's mean argument of latitude
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    // D: mean elongation of the Moon from the Sun
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    // Ω: mean longitude of the Moon's ascending node
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Nutation in longitude Δψ, in arcseconds.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let om = (125.04452 - 1934.136261 * t).to_radians();
    let sun_l = (280.4665 + 36000.7698 * t).to_radians();
    let moon_l = (218.3165 + 481267.8813 * t).to_radians();
    -17.20 * om.sin() - 1.32 * (2.0 * sun_l).sin() - 0.23 * (2.0 * moon_l).sin()
        + 0.21 * (2.0 * om).sin()
}

/// Nutation in longitude Δψ, in degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    nutation_longitude_arcsec(t) / 3600.0
}
