//! Plain-text horoscope and porutham reports.
//!
//! Purely presentational: every value shown is computed elsewhere.

use std::fmt;

use jathagam_core::Zodiac;

use crate::chart::HoroscopeChart;
use crate::dosha::{DoshaFlags, dosha_label};
use crate::graha::{ALL_GRAHAS, Graha};
use crate::porutham::PoruthamResult;
use crate::raasi::{PlanetPosition, RAASI_SPAN, deg_to_dms};

const RULE: &str = "═══════════════════════════════════════════════════════";

/// Who and when the report is for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMeta {
    pub name: Option<String>,
    pub date_of_birth: String,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

impl ReportMeta {
    pub fn new(date_of_birth: impl Into<String>) -> Self {
        Self {
            date_of_birth: date_of_birth.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_birth_time(mut self, time: impl Into<String>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    pub fn with_birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }
}

/// Horoscope report, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct HoroscopeReport<'a> {
    pub chart: &'a HoroscopeChart,
    pub doshas: &'a DoshaFlags,
    pub meta: &'a ReportMeta,
}

/// Render a chart, its dosha flags and the birth details as text.
pub fn format_report(chart: &HoroscopeChart, doshas: &DoshaFlags, meta: &ReportMeta) -> String {
    HoroscopeReport {
        chart,
        doshas,
        meta,
    }
    .to_string()
}

/// Render a porutham result as text.
pub fn format_porutham(result: &PoruthamResult) -> String {
    PoruthamReport(result).to_string()
}

fn graha_label(graha: Graha) -> String {
    if graha.sanskrit_name() == graha.name() {
        format!("{}:", graha.name())
    } else {
        format!("{} ({}):", graha.name(), graha.sanskrit_name())
    }
}

/// Last within-sign value that still prints inside the sign: 29°59′59.99″.
const LAST_DEGREE_IN_SIGN: f64 = RAASI_SPAN - 1.0 / 360_000.0;

/// Longitude to two places, capped so it never rounds into the next sign.
fn longitude_2dp(p: &PlanetPosition) -> f64 {
    let sign_start = (p.house - 1) as f64 * RAASI_SPAN;
    ((p.longitude * 100.0).round() / 100.0).min(sign_start + 29.99)
}

fn zodiac_label(zodiac: Zodiac) -> String {
    match zodiac {
        Zodiac::Sidereal(system) => format!("Sidereal ({} ayanamsha)", system.name()),
        Zodiac::Tropical => "Tropical".to_string(),
    }
}

impl fmt::Display for HoroscopeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = self.meta;
        let chart = self.chart;

        writeln!(f, "VEDIC HOROSCOPE FOR {}", meta.name.as_deref().unwrap_or("User"))?;
        writeln!(f, "Date of Birth: {}", meta.date_of_birth)?;
        if let Some(time) = &meta.birth_time {
            writeln!(f, "Birth Time: {time}")?;
        }
        if let Some(place) = &meta.birth_place {
            writeln!(f, "Birth Place: {place}")?;
        }
        if !chart.certainty.is_exact() {
            writeln!(f, "Note: birth time unknown; positions computed for local noon.")?;
        }
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        writeln!(f, "PLANETARY POSITIONS")?;
        writeln!(f)?;
        for graha in ALL_GRAHAS {
            let p = chart.position(graha);
            writeln!(
                f,
                "{:<20}{} {} ({:.2}°) house {}",
                graha_label(graha),
                p.raasi.name(),
                deg_to_dms(p.degree.min(LAST_DEGREE_IN_SIGN)),
                longitude_2dp(p),
                p.house
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        let star = chart.nakshatra();
        let moon_sign = chart.moon_raasi();
        writeln!(
            f,
            "Moon Sign (Raasi): {} ({})",
            moon_sign.name(),
            moon_sign.western_name()
        )?;
        writeln!(f, "Nakshatra (Birth Star): {}, Pada {}", star.name(), star.pada)?;
        for (name, present) in self.doshas.iter() {
            let state = if present { "Present" } else { "Absent" };
            writeln!(f, "{}: {state}", dosha_label(name))?;
        }
        writeln!(f, "Zodiac: {}", zodiac_label(chart.zodiac))?;
        write!(f, "{RULE}")
    }
}

struct PoruthamReport<'a>(&'a PoruthamResult);

impl fmt::Display for PoruthamReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PORUTHAM (MARRIAGE COMPATIBILITY)")?;
        writeln!(f)?;
        for (kind, ok) in self.0.iter() {
            let state = if ok { "Match" } else { "No match" };
            writeln!(f, "{:<20}{state}", format!("{}:", kind.label()))?;
        }
        writeln!(f)?;
        write!(f, "Total: {}/10", self.0.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::HoroscopeProfile;
    use crate::dosha::DoshaRegistry;
    use crate::porutham::calculate_porutham;
    use crate::raasi::PlanetPosition;
    use jathagam_core::AyanamshaSystem;
    use jathagam_time::TimeCertainty;

    fn chart(certainty: TimeCertainty) -> HoroscopeChart {
        let p = PlanetPosition::from_longitude;
        HoroscopeChart {
            sun: p(60.134),
            moon: p(317.756),
            mars: p(347.106),
            mercury: p(41.480),
            jupiter: p(82.146),
            venus: p(24.721),
            saturn: p(270.258),
            rahu: p(285.990),
            ketu: p(105.990),
            certainty,
            zodiac: Zodiac::Sidereal(AyanamshaSystem::Lahiri),
        }
    }

    fn render(certainty: TimeCertainty, meta: &ReportMeta) -> String {
        let c = chart(certainty);
        let flags = DoshaRegistry::standard().detect(&c);
        format_report(&c, &flags, meta)
    }

    #[test]
    fn header_and_optional_fields() {
        let meta = ReportMeta::new("1990-06-15")
            .with_name("Meena")
            .with_birth_time("10:30")
            .with_birth_place("Chennai");
        let text = render(TimeCertainty::Exact, &meta);
        assert!(text.starts_with("VEDIC HOROSCOPE FOR Meena\nDate of Birth: 1990-06-15\n"));
        assert!(text.contains("Birth Time: 10:30\n"));
        assert!(text.contains("Birth Place: Chennai\n"));
        assert!(!text.contains("local noon"));

        let bare = render(TimeCertainty::Exact, &ReportMeta::new("1990-06-15"));
        assert!(bare.starts_with("VEDIC HOROSCOPE FOR User\n"));
        assert!(!bare.contains("Birth Time"));
        assert!(!bare.contains("Birth Place"));
    }

    #[test]
    fn planets_in_fixed_order() {
        let text = render(TimeCertainty::Exact, &ReportMeta::new("1990-06-15"));
        let labels = [
            "Sun (Surya):",
            "Moon (Chandra):",
            "Mars (Mangal):",
            "Mercury (Budha):",
            "Jupiter (Guru):",
            "Venus (Shukra):",
            "Saturn (Shani):",
            "Rahu:",
            "Ketu:",
        ];
        let mut last = 0;
        for label in labels {
            let at = text.find(label).unwrap_or_else(|| panic!("missing {label}"));
            assert!(at > last, "{label} out of order");
            last = at;
        }
        assert!(text.contains("Sun (Surya):        Mithunam 0°08′02″ (60.13°) house 3\n"));
        assert!(text.contains("Moon (Chandra):     Kumbam 17°45′21″ (317.76°) house 11\n"));
        assert!(text.contains("Mars (Mangal):      Meenam 17°06′21″ (347.11°) house 12\n"));
        assert!(text.contains("Mercury (Budha):    Rishabam 11°28′48″ (41.48°) house 2\n"));
        assert!(text.contains("Ketu:               Kadagam 15°59′24″ (105.99°) house 4\n"));
    }

    #[test]
    fn summary_lines() {
        let text = render(TimeCertainty::Exact, &ReportMeta::new("1990-06-15"));
        assert!(text.contains("Moon Sign (Raasi): Kumbam (Aquarius)\n"));
        assert!(text.contains("Nakshatra (Birth Star): Sadhayam, Pada 4\n"));
        assert!(text.contains("Chevvai Dosham: Present\n"));
        assert!(text.contains("Kala Sarpa Dosham: Absent\n"));
        assert!(text.contains("Zodiac: Sidereal (Lahiri ayanamsha)\n"));
    }

    #[test]
    fn noon_assumption_is_disclosed() {
        let text = render(TimeCertainty::AssumedNoon, &ReportMeta::new("1990-06-15"));
        assert!(text.contains("birth time unknown; positions computed for local noon"));
    }

    #[test]
    fn sign_end_stays_inside_the_sign() {
        let mut c = chart(TimeCertainty::Exact);
        c.saturn = PlanetPosition::from_longitude(299.999_999_9);
        let flags = DoshaRegistry::standard().detect(&c);
        let text = format_report(&c, &flags, &ReportMeta::new("1990-06-15"));
        assert!(text.contains("Saturn (Shani):     Makaram 29°59′59″ (299.99°) house 10\n"), "{text}");
        let last = PlanetPosition::from_longitude(359.999);
        assert_eq!(format!("{:.2}", longitude_2dp(&last)), "359.99");
    }

    #[test]
    fn deterministic() {
        let meta = ReportMeta::new("1990-06-15").with_name("A");
        assert_eq!(
            render(TimeCertainty::Exact, &meta),
            render(TimeCertainty::Exact, &meta)
        );
    }

    #[test]
    fn porutham_lists_all_criteria() {
        let groom = HoroscopeProfile::from_longitudes(317.756, 347.106);
        let bride = HoroscopeProfile::from_longitudes(5.0, 100.0);
        let result = calculate_porutham(&groom, &bride);
        let text = format_porutham(&result);
        for (kind, _) in result.iter() {
            assert!(text.contains(&format!("{}:", kind.label())), "{}", kind.name());
        }
        assert!(text.ends_with(&format!("Total: {}/10", result.total)));
    }
}
