//! End-to-end chart for 1990-06-15 10:30 IST, Chennai (05:00 UT).

use jathagam_core::{AnalyticEphemeris, EphemerisConfig, NodeMode, Zodiac, normalize_deg};
use jathagam_time::{JulianDay, TimeCertainty, calendar_to_jd};
use jathagam_vedic::{
    ALL_GRAHAS, DoshaRegistry, Graha, Nakshatra, Raasi, ReportMeta, build_chart,
    build_chart_with_certainty, format_report,
};

fn chennai_1990() -> JulianDay {
    JulianDay::new(calendar_to_jd(1990, 6, 15.0 + 5.0 / 24.0))
}

#[test]
fn chennai_chart() {
    let chart = build_chart(&AnalyticEphemeris::default(), chennai_1990()).unwrap();

    let expected = [
        (Graha::Sun, Raasi::Mithunam, 3),
        (Graha::Moon, Raasi::Kumbam, 11),
        (Graha::Mars, Raasi::Meenam, 12),
        (Graha::Mercury, Raasi::Rishabam, 2),
        (Graha::Jupiter, Raasi::Mithunam, 3),
        (Graha::Venus, Raasi::Mesham, 1),
        (Graha::Saturn, Raasi::Makaram, 10),
        (Graha::Rahu, Raasi::Makaram, 10),
        (Graha::Ketu, Raasi::Kadagam, 4),
    ];
    for (graha, raasi, house) in expected {
        let p = chart.position(graha);
        assert_eq!(p.raasi, raasi, "{}", graha.name());
        assert_eq!(p.house, house, "{}", graha.name());
    }
    assert_eq!(chart.zodiac, Zodiac::default());
    assert_eq!(chart.certainty, TimeCertainty::Exact);
}

#[test]
fn chennai_birth_star() {
    let chart = build_chart(&AnalyticEphemeris::default(), chennai_1990()).unwrap();
    let star = chart.nakshatra();
    assert_eq!(star.nakshatra, Nakshatra::Sadhayam);
    assert_eq!(star.index, 23);
    assert_eq!(star.pada, 4);
    assert_eq!(chart.moon_raasi(), Raasi::Kumbam);
}

#[test]
fn chennai_doshas() {
    let chart = build_chart(&AnalyticEphemeris::default(), chennai_1990()).unwrap();
    let flags = DoshaRegistry::standard().detect(&chart);
    assert!(flags.chevvai());
    assert!(!flags.kala_sarpa());
}

#[test]
fn chart_invariants_hold_for_every_graha() {
    let chart = build_chart(&AnalyticEphemeris::default(), chennai_1990()).unwrap();
    for graha in ALL_GRAHAS {
        let p = chart.position(graha);
        assert!((0.0..360.0).contains(&p.longitude));
        assert!((0.0..30.0).contains(&p.degree));
        assert_eq!(p.house as f64, (p.longitude / 30.0).floor() + 1.0);
        assert_eq!(p.raasi.index() + 1, p.house);
    }
    let gap = normalize_deg(chart.ketu.longitude - chart.rahu.longitude);
    assert!((gap - 180.0).abs() < 1e-9);
}

#[test]
fn true_node_moves_rahu_only() {
    let jd = chennai_1990();
    let mean = build_chart(&AnalyticEphemeris::default(), jd).unwrap();
    let true_node = AnalyticEphemeris::new(EphemerisConfig::new(NodeMode::True, Zodiac::default()));
    let tru = build_chart(&true_node, jd).unwrap();
    assert_eq!(mean.moon, tru.moon);
    assert_eq!(mean.saturn, tru.saturn);
    assert!((mean.rahu.longitude - tru.rahu.longitude).abs() > 0.5);
    assert!((mean.rahu.longitude - tru.rahu.longitude).abs() < 2.0);
}

#[test]
fn report_for_unknown_time() {
    let chart = build_chart_with_certainty(
        &AnalyticEphemeris::default(),
        chennai_1990(),
        TimeCertainty::AssumedNoon,
    )
    .unwrap();
    let flags = DoshaRegistry::standard().detect(&chart);
    let text = format_report(&chart, &flags, &ReportMeta::new("1990-06-15"));
    assert!(text.contains("local noon"));
    assert!(text.contains("Nakshatra (Birth Star): Sadhayam, Pada 4"));
    assert!(text.contains("Chevvai Dosham: Present"));
}

#[test]
fn chart_json_shape() {
    let chart = build_chart(&AnalyticEphemeris::default(), chennai_1990()).unwrap();
    let json = serde_json::to_value(chart).unwrap();
    for graha in ALL_GRAHAS {
        let entry = &json[graha.key()];
        assert!(entry["raasi"].is_string(), "{}", graha.key());
        assert!(entry["degree"].is_number());
        assert!(entry["house"].is_number());
    }
}
