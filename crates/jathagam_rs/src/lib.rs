//! Tamil jathagam engine.
//!
//! [`Jathagam`] bundles a timezone-aware birth-time resolver, the analytic
//! ephemeris and the dosha and porutham registries behind one value built
//! from a [`JathagamConfig`]. Build it once and share it; every method takes
//! `&self`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jathagam_rs::*;
//!
//! let engine = Jathagam::new(JathagamConfig::default());
//! let groom = engine.chart_from_strings("1990-06-15", Some("10:30"), 13.0827, 80.2707)?;
//! let bride = engine.chart_from_strings("1992-03-02", None, 9.9252, 78.1198)?;
//! let result = engine.match_charts(&groom, &bride);
//! println!("{}", format_porutham(&result));
//! ```

pub mod config;
pub mod error;

use serde::Serialize;

use jathagam_core::AnalyticEphemeris;
use jathagam_vedic::{DoshaRegistry, PoruthamRegistry, build_chart_with_certainty, format_report};

pub use config::{DEFAULT_MIN_PORUTHAM, JathagamConfig, PoruthamConfig, ResolverConfig};
pub use error::{ErrorKind, JathagamError};

// Re-export the types callers need so `use jathagam_rs::*` suffices.
pub use jathagam_core::{
    AyanamshaSystem, Body, Ephemeris, EphemerisConfig, EphemerisError, NodeMode, Zodiac,
};
pub use jathagam_time::{
    BirthInput, GeoPoint, JulianDay, MissingTimePolicy, ResolvedBirth, Resolver, TimeCertainty,
    TimeError, TzfFinder, ZoneFinder, ZoneSource,
};
pub use jathagam_vedic::{
    DoshaFlags, DoshaRule, Graha, HoroscopeChart, HoroscopeProfile, Nakshatra, NakshatraInfo,
    PlanetPosition, PoruthamKind, PoruthamResult, PoruthamRule, Raasi, ReportMeta,
    calculate_porutham, format_porutham,
};

/// Everything computed for one birth record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    #[serde(skip)]
    pub resolved: ResolvedBirth,
    pub chart: HoroscopeChart,
    pub nakshatra: NakshatraInfo,
    pub doshas: DoshaFlags,
}

impl BirthChart {
    pub fn profile(&self) -> HoroscopeProfile {
        self.chart.profile()
    }

    pub fn certainty(&self) -> TimeCertainty {
        self.resolved.certainty
    }
}

/// Chart and matching engine.
pub struct Jathagam<F = TzfFinder> {
    config: JathagamConfig,
    resolver: Resolver<F>,
    ephemeris: AnalyticEphemeris,
    doshas: DoshaRegistry,
    poruthams: PoruthamRegistry,
}

impl Jathagam<TzfFinder> {
    /// Engine with the embedded timezone boundary data.
    pub fn new(config: JathagamConfig) -> Self {
        Self::with_finder(config, TzfFinder::new())
    }

    /// Engine configured from a TOML file.
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, JathagamError> {
        Ok(Self::new(JathagamConfig::load(path)?))
    }
}

impl<F: ZoneFinder> Jathagam<F> {
    /// Engine with a custom timezone source.
    pub fn with_finder(config: JathagamConfig, finder: F) -> Self {
        Self {
            config,
            resolver: Resolver::with_finder(finder)
                .missing_time_policy(config.resolver.missing_time),
            ephemeris: AnalyticEphemeris::new(config.ephemeris),
            doshas: DoshaRegistry::standard(),
            poruthams: PoruthamRegistry::standard(),
        }
    }

    pub fn config(&self) -> &JathagamConfig {
        &self.config
    }

    pub fn ephemeris(&self) -> &AnalyticEphemeris {
        &self.ephemeris
    }

    pub fn resolver(&self) -> &Resolver<F> {
        &self.resolver
    }

    /// Register an extra dosha rule (or replace one by name).
    pub fn register_dosha<R: DoshaRule + 'static>(&mut self, rule: R) -> &mut Self {
        self.doshas.register(rule);
        self
    }

    /// Register an extra porutham rule (or replace one by kind).
    pub fn register_porutham<R: PoruthamRule + 'static>(&mut self, rule: R) -> &mut Self {
        self.poruthams.register(rule);
        self
    }

    /// Resolve a birth record to its UT instant.
    pub fn resolve(&self, input: &BirthInput) -> Result<ResolvedBirth, JathagamError> {
        Ok(self.resolver.resolve(input)?)
    }

    /// Resolve, build the chart, and detect doshas.
    #[tracing::instrument(level = "debug", skip(self, input), fields(date = %input.date()))]
    pub fn chart(&self, input: &BirthInput) -> Result<BirthChart, JathagamError> {
        let resolved = self.resolver.resolve(input)?;
        let chart =
            build_chart_with_certainty(&self.ephemeris, resolved.julian_day, resolved.certainty)?;
        let doshas = self.doshas.detect(&chart);
        tracing::debug!(zone = %resolved.zone, doshas = ?doshas, "birth chart ready");
        Ok(BirthChart {
            resolved,
            chart,
            nakshatra: chart.nakshatra(),
            doshas,
        })
    }

    /// [`Self::chart`] from persisted strings. An empty `time` counts as absent.
    pub fn chart_from_strings(
        &self,
        date: &str,
        time: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> Result<BirthChart, JathagamError> {
        let input = BirthInput::parse(date, time, latitude, longitude)?;
        self.chart(&input)
    }

    /// Porutham between two computed charts.
    pub fn match_charts(&self, groom: &BirthChart, bride: &BirthChart) -> PoruthamResult {
        self.match_profiles(&groom.profile(), &bride.profile())
    }

    #[tracing::instrument(
        level = "debug",
        skip(self, groom, bride),
        fields(groom = groom.nakshatra.name(), bride = bride.nakshatra.name())
    )]
    pub fn match_profiles(
        &self,
        groom: &HoroscopeProfile,
        bride: &HoroscopeProfile,
    ) -> PoruthamResult {
        let result = self.poruthams.evaluate(groom, bride);
        tracing::debug!(total = result.total, "porutham evaluated");
        result
    }

    /// Resolve and chart both records, then match them.
    pub fn match_births(
        &self,
        groom: &BirthInput,
        bride: &BirthInput,
    ) -> Result<PoruthamResult, JathagamError> {
        let groom = self.chart(groom)?;
        let bride = self.chart(bride)?;
        Ok(self.match_charts(&groom, &bride))
    }

    /// Whether a result meets the configured minimum.
    pub fn is_acceptable(&self, result: &PoruthamResult) -> bool {
        result.is_acceptable(self.config.porutham.min_total)
    }

    /// Plain-text report for a computed chart.
    pub fn report(&self, chart: &BirthChart, meta: &ReportMeta) -> String {
        format_report(&chart.chart, &chart.doshas, meta)
    }
}

impl Default for Jathagam<TzfFinder> {
    fn default() -> Self {
        Self::new(JathagamConfig::default())
    }
}

impl<F> std::fmt::Debug for Jathagam<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Jathagam")
            .field("config", &self.config)
            .field("doshas", &self.doshas)
            .field("poruthams", &self.poruthams)
            .finish_non_exhaustive()
    }
}

#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<Jathagam>();
        assert_send_sync::<BirthChart>();
        assert_send_sync::<JathagamError>();
    }
};
