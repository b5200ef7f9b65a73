//! Peer matching types.

use civitas_core::config::PeerConfig;
use civitas_core::types::Municipality;
use serde::{Deserialize, Serialize};

/// A similar peer with its score breakdown.
#[derive(Debug, Clone, Copy)]
pub struct SimilarPeer<'a> {
    pub municipality: &'a Municipality,
    /// `1 - |Δlog10(pop)| / 3`.
    pub population_score: f64,
    /// `1 - |Δcomposite| * 10`.
    pub index_score: f64,
    /// `0.4 * population_score + 0.6 * index_score`.
    pub similarity: f64,
}

/// Flat, serializable view of a peer for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerSummary {
    pub id: String,
    pub name: String,
    pub state: String,
    pub population: i64,
    pub composite_index: f64,
    pub similarity: f64,
}

impl From<&SimilarPeer<'_>> for PeerSummary {
    fn from(peer: &SimilarPeer<'_>) -> Self {
        let m = peer.municipality;
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            state: m.state.clone(),
            population: m.population,
            composite_index: m.composite_index,
            similarity: peer.similarity,
        }
    }
}

/// Caller-supplied bounds for model-city discovery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCityFilters {
    /// Lower population bound, percent of the target's population.
    pub population_min_pct: f64,
    /// Upper population bound, percent of the target's population.
    pub population_max_pct: f64,
    pub composite_index_min: f64,
}

impl ModelCityFilters {
    pub fn from_config(config: &PeerConfig) -> Self {
        Self {
            population_min_pct: config.effective_population_min_pct(),
            population_max_pct: config.effective_population_max_pct(),
            composite_index_min: config.effective_composite_index_min(),
        }
    }

    pub fn accepts_population(&self, target_population: i64, peer_population: i64) -> bool {
        let target = target_population as f64;
        let peer = peer_population as f64;
        peer >= target * self.population_min_pct / 100.0
            && peer <= target * self.population_max_pct / 100.0
    }
}

impl Default for ModelCityFilters {
    fn default() -> Self {
        Self::from_config(&PeerConfig::default())
    }
}

/// A model city that passed the filters, with its ranking terms.
#[derive(Debug, Clone, Copy)]
pub struct ModelCityCandidate<'a> {
    pub municipality: &'a Municipality,
    /// `max(0, 100 - |Δpop| / pop_target * 100)`.
    pub population_similarity: f64,
    /// `peer_index - target_index`, always positive.
    pub index_advantage: f64,
    /// Ascending: smaller ranks first.
    pub ranking_score: f64,
}
