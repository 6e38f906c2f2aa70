//! Configuration management for PoliSim crates.
//!
//! Configuration lives in a single JSON file at `~/.polisim/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Explicit config file values
//! 2. Environment variables (POLISIM_* prefix)
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `POLISIM_LOG_LEVEL` → logging.level
//! - `POLISIM_LOG_FORMAT` → logging.format
//! - `POLISIM_DATA_DIR` → data.data_dir
//! - `POLISIM_SCENARIO_TIMEOUT_SECS` → engine.scenario_timeout_secs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::validation::Validate;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".polisim"),
        |dirs| dirs.home_dir().join(".polisim"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Weights combining the four risk components into the composite score.
///
/// Must sum to 1.0 (validated at load).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskWeights {
    #[serde(default = "default_economic_weight")]
    pub economic: f64,
    #[serde(default = "default_sector_weight")]
    pub sector_disruption: f64,
    #[serde(default = "default_unrest_weight")]
    pub social_unrest: f64,
    #[serde(default = "default_inequality_weight")]
    pub inequality: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            economic: default_economic_weight(),
            sector_disruption: default_sector_weight(),
            social_unrest: default_unrest_weight(),
            inequality: default_inequality_weight(),
        }
    }
}

fn default_economic_weight() -> f64 {
    0.35
}
fn default_sector_weight() -> f64 {
    0.25
}
fn default_unrest_weight() -> f64 {
    0.25
}
fn default_inequality_weight() -> f64 {
    0.15
}

/// Numeric constants of the simulation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Damping factor applied to each ripple-propagation round.
    /// Must stay below 1.0 so the propagation converges.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Size of the synthetic reaction population per simulation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Wall-clock budget for a single scenario inside a comparison.
    #[serde(default = "default_scenario_timeout_secs")]
    pub scenario_timeout_secs: u64,

    /// Composite risk weights.
    #[serde(default)]
    pub risk_weights: RiskWeights,

    /// Scale applied to |inflation change from baseline| before the
    /// confidence discount.
    #[serde(default = "default_economic_risk_scale")]
    pub economic_risk_scale: f64,

    /// Confidence-independent floor of the economic risk component.
    #[serde(default = "default_economic_risk_floor")]
    pub economic_risk_floor: f64,

    /// Effective-magnitude value at which unrest probability saturates.
    #[serde(default = "default_unrest_magnitude_norm")]
    pub unrest_magnitude_norm: f64,

    /// Scale applied to unrest probability in the social risk component.
    #[serde(default = "default_unrest_scale")]
    pub unrest_scale: f64,

    /// Weight of the negative-sentiment ratio in the social risk component.
    #[serde(default = "default_negative_ratio_weight")]
    pub negative_ratio_weight: f64,

    /// Inequality risk gain for regressive policies.
    #[serde(default = "default_regressive_gain")]
    pub regressive_gain: f64,

    /// Inequality risk gain for progressive policies.
    #[serde(default = "default_progressive_gain")]
    pub progressive_gain: f64,

    /// Maximum number of recommendations emitted per simulation.
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            population_size: default_population_size(),
            scenario_timeout_secs: default_scenario_timeout_secs(),
            risk_weights: RiskWeights::default(),
            economic_risk_scale: default_economic_risk_scale(),
            economic_risk_floor: default_economic_risk_floor(),
            unrest_magnitude_norm: default_unrest_magnitude_norm(),
            unrest_scale: default_unrest_scale(),
            negative_ratio_weight: default_negative_ratio_weight(),
            regressive_gain: default_regressive_gain(),
            progressive_gain: default_progressive_gain(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

fn default_damping() -> f64 {
    0.5
}
fn default_population_size() -> usize {
    10
}
fn default_scenario_timeout_secs() -> u64 {
    30
}
fn default_economic_risk_scale() -> f64 {
    25.0
}
fn default_economic_risk_floor() -> f64 {
    10.0
}
fn default_unrest_magnitude_norm() -> f64 {
    20.0
}
fn default_unrest_scale() -> f64 {
    70.0
}
fn default_negative_ratio_weight() -> f64 {
    0.3
}
fn default_regressive_gain() -> f64 {
    2.5
}
fn default_progressive_gain() -> f64 {
    1.0
}
fn default_max_recommendations() -> usize {
    6
}

// ============================================================================
// Data Configuration
// ============================================================================

/// Location of the bundled datasets (baseline snapshot, sector graph).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the JSON datasets. `None` uses the engine's
    /// bundled `data/` directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration shared by PoliSim crates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when the file does not exist, then apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut config: Self = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("POLISIM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("POLISIM_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(dir) = std::env::var("POLISIM_DATA_DIR") {
            self.data.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(secs) = std::env::var("POLISIM_SCENARIO_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.engine.scenario_timeout_secs = secs;
            }
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        let engine = &self.engine;
        if !(engine.damping > 0.0 && engine.damping < 1.0) {
            return Err(Error::Config(format!(
                "damping must be in (0, 1), got {}",
                engine.damping
            )));
        }
        if engine.population_size == 0 {
            return Err(Error::Config("population_size must be positive".into()));
        }
        if engine.scenario_timeout_secs == 0 {
            return Err(Error::Config("scenario_timeout_secs must be positive".into()));
        }
        let w = &engine.risk_weights;
        let sum = w.economic + w.sector_disruption + w.social_unrest + w.inequality;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(Error::Config(format!(
                "risk weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}
