//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [ephemeris]
//! node_mode = "true"
//! zodiac = { sidereal = "lahiri" }
//!
//! [resolver]
//! missing_time = "local_noon"
//!
//! [porutham]
//! min_total = 6
//! ```
//!
//! Every section and field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use jathagam_core::EphemerisConfig;
use jathagam_time::MissingTimePolicy;

use crate::error::JathagamError;

/// Conventional minimum number of matching poruthams.
pub const DEFAULT_MIN_PORUTHAM: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub missing_time: MissingTimePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoruthamConfig {
    /// Totals at or above this are reported as acceptable.
    pub min_total: u8,
}

impl Default for PoruthamConfig {
    fn default() -> Self {
        Self {
            min_total: DEFAULT_MIN_PORUTHAM,
        }
    }
}

/// Settings for a [`crate::Jathagam`] engine. Fixed once the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JathagamConfig {
    pub ephemeris: EphemerisConfig,
    pub resolver: ResolverConfig,
    pub porutham: PoruthamConfig,
}

impl JathagamConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JathagamError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            JathagamError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, JathagamError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| JathagamError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), JathagamError> {
        if self.porutham.min_total > 10 {
            return Err(JathagamError::Config(format!(
                "porutham.min_total {} exceeds the 10 criteria",
                self.porutham.min_total
            )));
        }
        Ok(())
    }
}
