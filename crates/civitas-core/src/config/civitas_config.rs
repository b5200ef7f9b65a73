//! Top-level Civitas configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CostOverride, LoggingConfig, PeerConfig, RegionConfig};
use crate::catalog::{CostTable, RegionalFactors};
use crate::constants;
use crate::errors::{CatalogError, ConfigError};
use crate::types::{IndicatorCode, MacroRegion};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CIVITAS_*`)
/// 3. Project config (`civitas.toml` in the project root)
/// 4. User config (`~/.civitas/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CivitasConfig {
    pub peers: PeerConfig,
    /// Per-indicator cost overrides, keyed by indicator code.
    pub costs: BTreeMap<String, CostOverride>,
    pub regions: RegionConfig,
    pub logging: LoggingConfig,
}

/// Overrides supplied by the host application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub similar_k: Option<usize>,
    pub model_city_limit: Option<usize>,
    pub composite_index_min: Option<f64>,
    pub log_filter: Option<String>,
}

impl CivitasConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("civitas.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): host overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CivitasConfig) -> Result<(), ConfigError> {
        let peers = &config.peers;
        if peers.similar_k == Some(0) {
            return Err(invalid("peers.similar_k", "must be at least 1"));
        }
        if peers.model_city_limit == Some(0) {
            return Err(invalid("peers.model_city_limit", "must be at least 1"));
        }
        let min = peers.effective_population_min_pct();
        let max = peers.effective_population_max_pct();
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(invalid(
                "peers.population_min_pct",
                "population band must satisfy 0 <= min <= max",
            ));
        }
        if let Some(v) = peers.composite_index_min {
            if !(0.0..=1.0).contains(&v) {
                return Err(invalid("peers.composite_index_min", "must be between 0.0 and 1.0"));
            }
        }
        for (key, cost) in &config.costs {
            if IndicatorCode::parse(key).is_none() {
                return Err(invalid(&format!("costs.{key}"), "unknown indicator code"));
            }
            if let Some(e) = cost.elasticity {
                if !e.is_finite() || e <= 0.0 {
                    return Err(invalid(&format!("costs.{key}.elasticity"), "must be positive"));
                }
            }
            if let Some(b) = cost.base_cost {
                if !b.is_finite() || b < 0.0 {
                    return Err(invalid(&format!("costs.{key}.base_cost"), "must be non-negative"));
                }
            }
            if let Some(m) = cost.implementation_months {
                if m == 0 || m > constants::MAX_IMPLEMENTATION_MONTHS {
                    return Err(invalid(
                        &format!("costs.{key}.implementation_months"),
                        "must be between 1 and 1200",
                    ));
                }
            }
        }
        for (region, factor) in config.regions.overrides() {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(invalid(&format!("regions.{region}"), "must be positive"));
            }
        }
        Ok(())
    }

    /// Standard cost table with configured overrides applied.
    pub fn cost_table(&self) -> Result<CostTable, CatalogError> {
        let mut table = CostTable::standard();
        for (key, cost) in &self.costs {
            let Some(code) = IndicatorCode::parse(key) else {
                continue;
            };
            if let Some(params) = table.get_mut(code) {
                cost.apply(params);
            }
        }
        table.validate()?;
        Ok(table)
    }

    /// Standard regional factors with configured overrides applied.
    pub fn regional_factors(&self) -> Result<RegionalFactors, CatalogError> {
        let mut factors = RegionalFactors::standard();
        for (region, factor) in self.regions.overrides() {
            factors.set(region, factor)?;
        }
        Ok(factors)
    }

    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CivitasConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CivitasConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut CivitasConfig, other: &CivitasConfig) {
        // Peers
        if other.peers.similar_k.is_some() {
            base.peers.similar_k = other.peers.similar_k;
        }
        if other.peers.model_city_limit.is_some() {
            base.peers.model_city_limit = other.peers.model_city_limit;
        }
        if other.peers.population_min_pct.is_some() {
            base.peers.population_min_pct = other.peers.population_min_pct;
        }
        if other.peers.population_max_pct.is_some() {
            base.peers.population_max_pct = other.peers.population_max_pct;
        }
        if other.peers.composite_index_min.is_some() {
            base.peers.composite_index_min = other.peers.composite_index_min;
        }

        // Costs merge per field, so a project file can tweak one parameter
        // of an indicator the user file already overrides.
        for (key, cost) in &other.costs {
            base.costs.entry(key.clone()).or_default().merge(cost);
        }

        base.regions.merge(&other.regions);

        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CIVITAS_PEERS_SIMILAR_K`, `CIVITAS_REGION_NORTH`, etc.
    fn apply_env_overrides(config: &mut CivitasConfig) {
        if let Ok(val) = std::env::var("CIVITAS_PEERS_SIMILAR_K") {
            if let Ok(v) = val.parse::<usize>() {
                config.peers.similar_k = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CIVITAS_PEERS_MODEL_CITY_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.peers.model_city_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CIVITAS_PEERS_POPULATION_MIN_PCT") {
            if let Ok(v) = val.parse::<f64>() {
                config.peers.population_min_pct = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CIVITAS_PEERS_POPULATION_MAX_PCT") {
            if let Ok(v) = val.parse::<f64>() {
                config.peers.population_max_pct = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CIVITAS_PEERS_COMPOSITE_INDEX_MIN") {
            if let Ok(v) = val.parse::<f64>() {
                config.peers.composite_index_min = Some(v);
            }
        }
        for region in MacroRegion::ALL {
            let key = format!("CIVITAS_REGION_{}", region.name().to_ascii_uppercase());
            if let Ok(val) = std::env::var(&key) {
                if let Ok(v) = val.parse::<f64>() {
                    config.regions.set(region, v);
                }
            }
        }
        if let Ok(val) = std::env::var("CIVITAS_LOG") {
            config.logging.filter = Some(val);
        }
    }

    fn apply_overrides(config: &mut CivitasConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.similar_k {
            config.peers.similar_k = Some(v);
        }
        if let Some(v) = overrides.model_city_limit {
            config.peers.model_city_limit = Some(v);
        }
        if let Some(v) = overrides.composite_index_min {
            config.peers.composite_index_min = Some(v);
        }
        if let Some(ref v) = overrides.log_filter {
            config.logging.filter = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Returns the user-level config directory: `~/.civitas/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".civitas"))
}

fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
