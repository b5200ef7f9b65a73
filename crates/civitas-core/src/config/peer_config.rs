//! Peer matching configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for similar-peer and model-city selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PeerConfig {
    /// Similar peers returned by a diagnosis. Default: 10.
    pub similar_k: Option<usize>,
    /// Model cities returned by discovery. Default: 10.
    pub model_city_limit: Option<usize>,
    /// Lower population bound for model cities, percent of target. Default: 50.
    pub population_min_pct: Option<f64>,
    /// Upper population bound for model cities, percent of target. Default: 200.
    pub population_max_pct: Option<f64>,
    /// Minimum composite index for model cities. Default: 0.0.
    pub composite_index_min: Option<f64>,
}

impl PeerConfig {
    pub fn effective_similar_k(&self) -> usize {
        self.similar_k.unwrap_or(constants::DEFAULT_SIMILAR_PEERS)
    }

    pub fn effective_model_city_limit(&self) -> usize {
        self.model_city_limit
            .unwrap_or(constants::DEFAULT_MODEL_CITY_LIMIT)
    }

    pub fn effective_population_min_pct(&self) -> f64 {
        self.population_min_pct
            .unwrap_or(constants::DEFAULT_POPULATION_MIN_PCT)
    }

    pub fn effective_population_max_pct(&self) -> f64 {
        self.population_max_pct
            .unwrap_or(constants::DEFAULT_POPULATION_MAX_PCT)
    }

    pub fn effective_composite_index_min(&self) -> f64 {
        self.composite_index_min.unwrap_or(0.0)
    }
}
