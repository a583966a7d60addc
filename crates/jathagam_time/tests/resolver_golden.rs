//! End-to-end resolution against the embedded timezone boundary data.

use jathagam_time::{
    BirthInput, GeoPoint, Resolver, TimeCertainty, TimeError, TzfFinder, ZoneFinder, ZoneSource,
    resolve_birth,
};

#[test]
fn chennai_is_kolkata() {
    let finder = TzfFinder::new();
    let point = GeoPoint::new(13.08, 80.27).unwrap();
    assert_eq!(finder.find_zone(&point), Some(chrono_tz::Asia::Kolkata));
}

#[test]
fn chennai_birth_resolves_to_golden_jd() {
    let resolver = Resolver::new();
    let jd = resolve_birth(&resolver, "1990-06-15", Some("10:30"), 13.08, 80.27).unwrap();
    assert!((jd.value() - 2_448_057.708_333_333).abs() < 1e-8, "jd = {}", jd.value());
}

#[test]
fn new_york_winter_birth() {
    // 1985-01-10 08:00 EST = 13:00 UTC
    let resolver = Resolver::new();
    let input = BirthInput::parse("1985-01-10", Some("08:00"), 40.7128, -74.006).unwrap();
    let r = resolver.resolve(&input).unwrap();
    assert_eq!(r.zone, ZoneSource::Named(chrono_tz::America::New_York));
    assert_eq!(r.utc.format("%H:%M").to_string(), "13:00");
    assert_eq!(r.certainty, TimeCertainty::Exact);
}

#[test]
fn invalid_inputs_fail_before_lookup() {
    let resolver = Resolver::new();
    assert!(matches!(
        resolve_birth(&resolver, "1990-02-30", Some("10:30"), 13.08, 80.27),
        Err(TimeError::InvalidInput(_))
    ));
    assert!(matches!(
        resolve_birth(&resolver, "1990-06-15", Some("10:30"), 999.0, 80.27),
        Err(TimeError::InvalidInput(_))
    ));
    assert!(matches!(
        resolve_birth(&resolver, "15/06/1990", Some("10:30"), 13.08, 80.27),
        Err(TimeError::InvalidInput(_))
    ));
}

#[test]
fn resolver_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resolver>();
}

#[test]
fn open_ocean_has_no_zone() {
    let finder = TzfFinder::new();
    for (lat, lng) in [(0.0, -140.0), (-40.0, -120.0), (30.0, -40.0), (-50.0, 90.0)] {
        let point = GeoPoint::new(lat, lng).unwrap();
        assert_eq!(finder.find_zone(&point), None, "({lat}, {lng})");
    }
}

#[test]
fn open_ocean_birth_needs_explicit_offset() {
    let resolver = Resolver::new();
    let err = resolve_birth(&resolver, "1990-06-15", Some("10:30"), 0.0, -140.0).unwrap_err();
    assert!(matches!(err, TimeError::TimezoneResolution { .. }), "{err:?}");

    // 10:30 at UTC-09:00 = 19:30 UTC
    let input = BirthInput::parse("1990-06-15", Some("10:30"), 0.0, -140.0)
        .unwrap()
        .with_utc_offset_minutes(-540)
        .unwrap();
    let r = resolver.resolve(&input).unwrap();
    assert_eq!(r.utc.format("%H:%M").to_string(), "19:30");
}
