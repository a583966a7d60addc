//! ΔT = TT − UT, in seconds.
//!
//! Piecewise polynomials from Espenak & Meeus, *Five Millennium Canon of
//! Solar Eclipses* (NASA/TP-2006-214141), covering 1800–2150 segment by
//! segment, with the long-term parabola outside that range.

use crate::julian::J2000_JD;

/// Decimal year of a Julian Day (e.g. 1990.45), as used by the ΔT segments.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if !(1800.0..2150.0).contains(&year) {
        return long_term(year);
    }
    if year < 1860.0 {
        let t = year - 1800.0;
        return 13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7);
    }
    if year < 1900.0 {
        let t = year - 1860.0;
        return 7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0;
    }
    if year < 1920.0 {
        let t = year - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4);
    }
    if year < 1941.0 {
        let t = year - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3);
    }
    if year < 1961.0 {
        let t = year - 1950.0;
        return 29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0;
    }
    if year < 1986.0 {
        let t = year - 1975.0;
        return 45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0;
    }
    if year < 2005.0 {
        let t = year - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5);
    }
    if year < 2050.0 {
        let t = year - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t.powi(2);
    }
    long_term(year) - 0.5628 * (2150.0 - year)
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_value() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn year_1990_value() {
        // Observed ΔT in 1990 was ~56.9 s
        let dt = delta_t_seconds(1990.0);
        assert!((dt - 56.9).abs() < 0.5, "ΔT(1990) = {dt}");
    }

    #[test]
    fn year_1900_near_zero() {
        let dt = delta_t_seconds(1900.0);
        assert!((dt - (-2.79)).abs() < 0.1, "ΔT(1900) = {dt}");
    }

    #[test]
    fn segments_are_continuous() {
        for &boundary in &[1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary);
            assert!(
                (before - after).abs() < 1.0,
                "jump at {boundary}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn long_term_outside_table() {
        assert_eq!(delta_t_seconds(1700.0), long_term(1700.0));
        assert_eq!(delta_t_seconds(2200.0), long_term(2200.0));
    }

    #[test]
    fn decimal_year_at_j2000() {
        assert_eq!(decimal_year(J2000_JD), 2000.0);
    }
}
