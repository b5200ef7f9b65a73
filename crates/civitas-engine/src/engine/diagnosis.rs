//! Diagnosis: where a municipality stands against the population and its
//! similar peers.

use civitas_core::errors::{EngineError, EngineResult};
use civitas_core::types::{Category, Municipality};
use civitas_core::Dataset;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::BenchmarkEngine;
use crate::gaps::{self, GapRecord, TargetSource};
use crate::peers::{self, PeerSummary};
use crate::statistics::{PopulationStatistics, ZScoreResult};

/// Mean polarity-adjusted z-score of one category. Positive is better
/// than the population average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub indicator_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub municipality_id: String,
    pub name: String,
    pub state: String,
    pub population: i64,
    pub composite_index: f64,
    pub category_scores: Vec<CategoryScore>,
    /// Catalog order.
    pub indicators: Vec<ZScoreResult>,
    /// 1-based, by composite index among municipalities of the same state.
    pub state_rank: usize,
    pub state_total: usize,
    pub similar_peers: Vec<PeerSummary>,
    /// Costed gaps against the similar peers' top quartile.
    pub gaps: Vec<GapRecord>,
}

impl BenchmarkEngine {
    /// Diagnose one municipality against the whole dataset.
    pub fn diagnose(&self, dataset: &Dataset, id: &str) -> EngineResult<Diagnosis> {
        let stats = PopulationStatistics::compute(&self.catalog, dataset.municipalities());
        self.diagnose_with(&stats, dataset, id)
    }

    /// Diagnose several municipalities in parallel. Population statistics
    /// are computed once; results keep the order of `ids`.
    pub fn diagnose_many(
        &self,
        dataset: &Dataset,
        ids: &[&str],
    ) -> Vec<(String, Result<Diagnosis, EngineError>)> {
        let stats = PopulationStatistics::compute(&self.catalog, dataset.municipalities());
        let results: Vec<_> = ids
            .par_iter()
            .map(|id| (id.to_string(), self.diagnose_with(&stats, dataset, id)))
            .collect();
        info!(
            requested = ids.len(),
            failed = results.iter().filter(|(_, r)| r.is_err()).count(),
            "batch diagnosis complete"
        );
        results
    }

    fn diagnose_with(
        &self,
        stats: &PopulationStatistics,
        dataset: &Dataset,
        id: &str,
    ) -> EngineResult<Diagnosis> {
        let _span = civitas_core::diagnosis_span!(id).entered();
        let target = self.resolve(dataset, id)?;
        let all = dataset.municipalities();

        let indicators = stats.score_municipality(&self.catalog, target);
        let category_scores = category_scores(&self.catalog, &indicators);
        let (state_rank, state_total) = state_rank(target, all);

        let similar = peers::find_similar(target, all, self.peers.effective_similar_k());
        if similar.is_empty() {
            debug!("no similar peers");
        }
        let mut gaps = gaps::analyze(&self.catalog, target, TargetSource::TopQuartile(&similar));
        self.cost_model.cost_gaps(&mut gaps, target);

        debug!(
            indicators = indicators.len(),
            peers = similar.len(),
            gaps = gaps.len(),
            "diagnosis complete"
        );

        Ok(Diagnosis {
            municipality_id: target.id.clone(),
            name: target.name.clone(),
            state: target.state.clone(),
            population: target.population,
            composite_index: target.composite_index,
            category_scores,
            indicators,
            state_rank,
            state_total,
            similar_peers: similar.iter().map(PeerSummary::from).collect(),
            gaps,
        })
    }
}

/// Per-category mean of polarity-adjusted z-scores, in `Category::ORDER`.
/// Categories with no scored indicator are omitted.
fn category_scores(
    catalog: &civitas_core::IndicatorCatalog,
    results: &[ZScoreResult],
) -> Vec<CategoryScore> {
    Category::ORDER
        .iter()
        .filter_map(|&category| {
            let adjusted: Vec<f64> = results
                .iter()
                .filter(|r| r.category == category)
                .map(|r| {
                    let higher_is_better = catalog
                        .get(r.indicator)
                        .map_or(true, |d| d.higher_is_better);
                    r.adjusted_score(higher_is_better)
                })
                .collect();
            if adjusted.is_empty() {
                return None;
            }
            Some(CategoryScore {
                category,
                score: adjusted.iter().sum::<f64>() / adjusted.len() as f64,
                indicator_count: adjusted.len(),
            })
        })
        .collect()
}

/// 1-based rank by composite index (descending, ties by id) among
/// municipalities sharing the target's state, and the size of that group.
fn state_rank(target: &Municipality, all: &[Municipality]) -> (usize, usize) {
    let same_state = |m: &&Municipality| m.state.trim().eq_ignore_ascii_case(target.state.trim());
    let total = all.iter().filter(same_state).count();
    let ahead = all
        .iter()
        .filter(same_state)
        .filter(|m| m.id != target.id)
        .filter(|m| {
            m.composite_index
                .total_cmp(&target.composite_index)
                .reverse()
                .then_with(|| m.id.cmp(&target.id))
                .is_lt()
        })
        .count();
    (ahead + 1, total.max(1))
}
