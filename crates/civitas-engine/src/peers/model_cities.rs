//! Model-city discovery: strictly better peers of comparable size.

use civitas_core::constants::{MODEL_CITY_ADVANTAGE_WEIGHT, MODEL_CITY_DISSIMILARITY_WEIGHT};
use civitas_core::types::Municipality;

use super::types::{ModelCityCandidate, ModelCityFilters};

/// Find peers with a strictly higher composite index than `target` that
/// pass `filters`, ranked ascending by
/// `index_advantage * 0.6 + (100 - population_similarity) * 0.004`,
/// truncated to `limit`.
///
/// An empty result means no comparison is available; it is not an error.
pub fn find_model_cities<'a>(
    target: &Municipality,
    all: &'a [Municipality],
    filters: &ModelCityFilters,
    limit: usize,
) -> Vec<ModelCityCandidate<'a>> {
    if !target.has_valid_population() {
        return Vec::new();
    }
    let target_population = target.population as f64;

    let mut candidates: Vec<ModelCityCandidate<'a>> = all
        .iter()
        .filter(|m| m.id != target.id)
        .filter(|m| m.composite_index > target.composite_index)
        .filter(|m| m.composite_index >= filters.composite_index_min)
        .filter(|m| filters.accepts_population(target.population, m.population))
        .map(|m| {
            let delta = (m.population as f64 - target_population).abs();
            let population_similarity = (100.0 - delta / target_population * 100.0).max(0.0);
            let index_advantage = m.composite_index - target.composite_index;
            ModelCityCandidate {
                municipality: m,
                population_similarity,
                index_advantage,
                ranking_score: index_advantage * MODEL_CITY_ADVANTAGE_WEIGHT
                    + (100.0 - population_similarity) * MODEL_CITY_DISSIMILARITY_WEIGHT,
            }
        })
        .collect();

    candidates.sort_by(|a, b| a.ranking_score.total_cmp(&b.ranking_score));
    candidates.truncate(limit);

    if candidates.is_empty() {
        tracing::debug!(municipality = %target.id, "no model cities pass filters");
    }
    candidates
}
