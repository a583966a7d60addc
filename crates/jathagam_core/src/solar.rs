//! Apparent geocentric longitude of the Sun.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25, low-accuracy
//! method: geometric mean longitude plus the equation of centre, then
//! aberration and nutation. Accurate to about 0.01°.

use crate::util::normalize_deg;

/// Apparent ecliptic longitude of the Sun (equinox of date), in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let centre = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let true_longitude = mean_longitude + centre;

    // aberration (-20.4898″ ≈ 0.00569°) and the dominant nutation term
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(true_longitude - 0.00569 - 0.00478 * omega.sin())
}
