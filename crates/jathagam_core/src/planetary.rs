//! Geocentric longitudes of Mercury through Saturn from Keplerian elements.
//!
//! Mean orbital elements and their linear rates from Standish, *Keplerian
//! Elements for Approximate Positions of the Major Planets* (JPL), Table 1
//! (valid 1800–2050, J2000 ecliptic and equinox). Heliocentric positions are
//! differenced against the Earth–Moon barycentre with light-time correction,
//! then carried to the equinox of date by general precession and nutation.
//!
//! Typical error is well under 0.05° for the inner planets and a few
//! hundredths of a degree for Jupiter and Saturn across the table's range.

use crate::nutation::nutation_longitude_deg;
use crate::precession::general_precession_deg;
use crate::util::normalize_deg;

/// Light time for 1 AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Planets covered by the Keplerian element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// `[a (AU), e, I (deg), L (deg), ϖ (deg), Ω (deg)]` at J2000 and per century.
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

#[rustfmt::skip]
static MERCURY: Elements = Elements {
    base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};

#[rustfmt::skip]
static VENUS: Elements = Elements {
    base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};

#[rustfmt::skip]
static EARTH_MOON_BARYCENTRE: Elements = Elements {
    base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};

#[rustfmt::skip]
static MARS: Elements = Elements {
    base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};

#[rustfmt::skip]
static JUPITER: Elements = Elements {
    base: [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
    rate: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};

#[rustfmt::skip]
static SATURN: Elements = Elements {
    base: [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
    rate: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
};

impl Planet {
    fn elements(self) -> &'static Elements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }
}

/// Solve Kepler's equation `M = E - e sin E` by Newton iteration (radians).
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (mean_anomaly - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric J2000 ecliptic rectangular coordinates in AU.
fn heliocentric(elements: &Elements, t: f64) -> [f64; 3] {
    let mut el = [0.0; 6];
    for (i, slot) in el.iter_mut().enumerate() {
        *slot = elements.base[i] + elements.rate[i] * t;
    }
    let [a, e, incl, mean_longitude, perihelion, node] = el;

    let arg_perihelion = (perihelion - node).to_radians();
    // M reduced to [-180, 180)
    let m = (normalize_deg(mean_longitude - perihelion + 180.0) - 180.0).to_radians();
    let ecc = eccentric_anomaly(m, e);

    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_perihelion.sin_cos();
    let (so, co) = node.to_radians().sin_cos();
    let (si, ci) = incl.to_radians().sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geometric geocentric longitude referred to the J2000 ecliptic and equinox.
pub fn planet_j2000_longitude_deg(planet: Planet, t: f64) -> f64 {
    let earth = heliocentric(&EARTH_MOON_BARYCENTRE, t);
    let elements = planet.elements();

    let mut tau = 0.0_f64;
    let mut dx = 0.0;
    let mut dy = 0.0;
    for _ in 0..2 {
        let p = heliocentric(elements, t - tau / DAYS_PER_CENTURY);
        dx = p[0] - earth[0];
        dy = p[1] - earth[1];
        let dz = p[2] - earth[2];
        let distance = (dx * dx + dy * dy + dz * dz).sqrt();
        tau = LIGHT_TIME_DAYS_PER_AU * distance;
    }
    normalize_deg(dy.atan2(dx).to_degrees())
}

/// Apparent geocentric longitude (true equinox of date), in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn planet_apparent_longitude_deg(planet: Planet, t: f64) -> f64 {
    normalize_deg(
        planet_j2000_longitude_deg(planet, t) + general_precession_deg(t) + nutation_longitude_deg(t),
    )
}
