//! Coordinate → IANA timezone lookup.

use std::fmt;

use chrono_tz::Tz;

use crate::geo::GeoPoint;

/// Prefix of the fixed-offset zones tzf assigns to open sea.
const NAUTICAL_PREFIX: &str = "Etc/";

/// Source of the IANA zone governing civil time at a location.
///
/// Implementations must be shareable across threads; a resolver is built
/// once and used for every profile.
pub trait ZoneFinder: Send + Sync {
    /// The zone at `point`, or `None` when no zone is known there.
    fn find_zone(&self, point: &GeoPoint) -> Option<Tz>;
}

/// Offline lookup backed by the `tzf-rs` boundary polygons.
///
/// Open sea is covered only by nautical `Etc/GMT±N` zones, which say nothing
/// about the civil time a birth was recorded in; those count as no zone.
pub struct TzfFinder {
    inner: tzf_rs::DefaultFinder,
}

impl TzfFinder {
    /// Load the embedded boundary data. Do this once and reuse the finder.
    pub fn new() -> Self {
        Self {
            inner: tzf_rs::DefaultFinder::new(),
        }
    }
}

impl Default for TzfFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TzfFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TzfFinder").finish_non_exhaustive()
    }
}

impl ZoneFinder for TzfFinder {
    fn find_zone(&self, point: &GeoPoint) -> Option<Tz> {
        let name = self.inner.get_tz_name(point.longitude(), point.latitude());
        if name.is_empty() {
            return None;
        }
        if name.starts_with(NAUTICAL_PREFIX) {
            tracing::debug!(zone = name, "nautical zone, no civil time known");
            return None;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                tracing::warn!(zone = name, "finder returned a zone unknown to chrono-tz");
                None
            }
        }
    }
}

impl<T: ZoneFinder + ?Sized> ZoneFinder for Box<T> {
    fn find_zone(&self, point: &GeoPoint) -> Option<Tz> {
        (**self).find_zone(point)
    }
}
