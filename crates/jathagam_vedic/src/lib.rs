//! Tamil jathagam calculations on top of an [`Ephemeris`](jathagam_core::Ephemeris).
//!
//! This crate provides:
//! - Rasi charts of the nine grahas, with Ketu opposite Rahu
//! - Nakshatra and pada of the Moon
//! - Dosha detection through a registry of named rules
//! - Ten-criterion Porutham matching through a registry of rules
//! - Plain-text reports
//!
//! Everything here is pure and synchronous.

pub mod chart;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod porutham;
pub mod raasi;
pub mod report;

pub use chart::{
    HoroscopeChart, HoroscopeProfile, build_chart, build_chart_with_certainty, ketu_longitude,
};
pub use dosha::{
    CHEVVAI, CHEVVAI_HOUSES, ChevvaiDosham, DoshaFlags, DoshaRegistry, DoshaRule, KALA_SARPA,
    KalaSarpaDosham, detect_chevvai_dosham, detect_kala_sarpa, dosha_label,
};
pub use error::VedicError;
pub use graha::{
    ALL_GRAHAS, Graha, NaturalRelation, SAPTA_GRAHAS, natural_relation, raasi_lord,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, resolve_nakshatra,
};
pub use porutham::{
    ALL_PORUTHAM_KINDS, PoruthamKind, PoruthamRegistry, PoruthamResult, PoruthamRule,
    calculate_porutham,
};
pub use raasi::{ALL_RAASIS, Dms, PlanetPosition, RAASI_SPAN, Raasi, deg_to_dms};
pub use report::{HoroscopeReport, ReportMeta, format_porutham, format_report};

#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<HoroscopeChart>();
        assert_send_sync::<DoshaRegistry>();
        assert_send_sync::<PoruthamRegistry>();
    }
};
