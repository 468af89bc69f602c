//! Calculation Configuration
//!
//! Tenant-tunable defaults consumed by the formula library and the
//! material-balance engine: Archie parameters and analysis-quality grading
//! thresholds. Every field has a built-in default matching the engine
//! constants, so an absent or partial TOML file changes nothing.
//!
//! The configuration is an explicit value threaded into the calls that need
//! it — there is no process-global state, which keeps every calculation pure
//! and reentrant.
//!
//! ## Loading Order
//!
//! 1. `RESBAL_CONFIG` environment variable (path to a TOML file)
//! 2. `resbal.toml` in the current working directory
//! 3. Built-in defaults

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the calculation engine.
///
/// Load with [`CalculationConfig::load`], or construct directly when the
/// surrounding system supplies the values per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// Archie saturation-equation defaults
    #[serde(default)]
    pub archie: ArchieConfig,

    /// Regression quality-grading thresholds
    #[serde(default)]
    pub quality: QualityThresholds,
}

impl CalculationConfig {
    /// Load configuration using the standard search order:
    /// 1. `RESBAL_CONFIG` environment variable
    /// 2. `./resbal.toml` in the current working directory
    /// 3. Built-in defaults
    #[must_use]
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("RESBAL_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded calculation config from RESBAL_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from RESBAL_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "RESBAL_CONFIG points to non-existent file, falling back");
            }
        }

        let local = Path::new("resbal.toml");
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!(path = %local.display(), "Loaded calculation config from working directory");
                    return config;
                }
                Err(e) => {
                    warn!(path = %local.display(), error = %e, "Failed to load local config, using defaults");
                }
            }
        }

        Self::default()
    }

    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or does not parse
    /// as TOML.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the string does not parse as TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config TOML: {message}")]
    Parse { message: String },
}

// ============================================================================
// Archie Parameters
// ============================================================================

/// Archie saturation-equation parameters.
///
/// `Sw = ((a · Rw) / (φ^m · Rt))^(1/n)` — the tortuosity factor `a`,
/// cementation exponent `m`, and saturation exponent `n` are rock-dependent
/// and typically tenant-configured; the defaults are the standard clean-sand
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchieConfig {
    /// Tortuosity factor `a`
    #[serde(default = "default_archie_a")]
    pub a: Decimal,

    /// Cementation exponent `m`
    #[serde(default = "default_archie_m")]
    pub m: Decimal,

    /// Saturation exponent `n`
    #[serde(default = "default_archie_n")]
    pub n: Decimal,

    /// How far above 1.0 a raw Archie saturation may land before it is
    /// rejected instead of clamped. Log noise commonly pushes the raw result
    /// slightly past 1; anything beyond this tolerance is treated as a bad
    /// input rather than silently clamped.
    #[serde(default = "default_sw_clamp_tolerance")]
    pub sw_clamp_tolerance: Decimal,
}

fn default_archie_a() -> Decimal {
    dec!(1.0)
}

fn default_archie_m() -> Decimal {
    dec!(2.0)
}

fn default_archie_n() -> Decimal {
    dec!(2.0)
}

fn default_sw_clamp_tolerance() -> Decimal {
    dec!(0.05)
}

impl Default for ArchieConfig {
    fn default() -> Self {
        Self {
            a: default_archie_a(),
            m: default_archie_m(),
            n: default_archie_n(),
            sw_clamp_tolerance: default_sw_clamp_tolerance(),
        }
    }
}

// ============================================================================
// Quality Thresholds
// ============================================================================

/// R² thresholds for grading a material-balance regression.
///
/// A fit is graded against these in descending order: EXCELLENT, GOOD, FAIR,
/// otherwise POOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Minimum R² for an EXCELLENT grade
    #[serde(default = "default_quality_excellent")]
    pub excellent: Decimal,

    /// Minimum R² for a GOOD grade
    #[serde(default = "default_quality_good")]
    pub good: Decimal,

    /// Minimum R² for a FAIR grade
    #[serde(default = "default_quality_fair")]
    pub fair: Decimal,
}

fn default_quality_excellent() -> Decimal {
    dec!(0.95)
}

fn default_quality_good() -> Decimal {
    dec!(0.80)
}

fn default_quality_fair() -> Decimal {
    dec!(0.50)
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            excellent: default_quality_excellent(),
            good: default_quality_good(),
            fair: default_quality_fair(),
        }
    }
}
