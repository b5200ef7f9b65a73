//! Generic similar-peer ranking.

use civitas_core::constants::{
    SIMILAR_INDEX_SCALE, SIMILAR_INDEX_WEIGHT, SIMILAR_LOG_SPAN, SIMILAR_POPULATION_WEIGHT,
};
use civitas_core::types::Municipality;

use super::types::SimilarPeer;

/// Rank every other municipality by population and composite-index
/// closeness to `target` and return the top `k`, best first.
///
/// Peers without a positive population cannot be placed on the log scale
/// and are skipped. Ties keep dataset order.
pub fn find_similar<'a>(
    target: &Municipality,
    all: &'a [Municipality],
    k: usize,
) -> Vec<SimilarPeer<'a>> {
    if !target.has_valid_population() {
        return Vec::new();
    }
    let target_log = (target.population as f64).log10();

    let mut peers: Vec<SimilarPeer<'a>> = all
        .iter()
        .filter(|m| m.id != target.id && m.has_valid_population())
        .map(|m| {
            let population_score =
                1.0 - ((m.population as f64).log10() - target_log).abs() / SIMILAR_LOG_SPAN;
            let index_score =
                1.0 - (m.composite_index - target.composite_index).abs() * SIMILAR_INDEX_SCALE;
            SimilarPeer {
                municipality: m,
                population_score,
                index_score,
                similarity: SIMILAR_POPULATION_WEIGHT * population_score
                    + SIMILAR_INDEX_WEIGHT * index_score,
            }
        })
        .collect();

    peers.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    peers.truncate(k);
    peers
}
