//! Per-indicator population statistics and z-score computation.

use std::collections::BTreeMap;

use civitas_core::types::{IndicatorCode, IndicatorDefinition, Municipality};
use civitas_core::IndicatorCatalog;
use statrs::statistics::Statistics;

use super::classify::classify;
use super::normal::percentile;
use super::types::{Classification, IndicatorStats, ZScoreResult};

/// Mean and population standard deviation of `code` across `population`.
///
/// Municipalities without a finite value are ignored. With no valid values
/// the result is [`IndicatorStats::degenerate`] (mean 0, stddev 1).
pub fn compute_statistics(code: IndicatorCode, population: &[Municipality]) -> IndicatorStats {
    let values: Vec<f64> = population.iter().filter_map(|m| m.value(code)).collect();
    if values.is_empty() {
        return IndicatorStats::degenerate();
    }

    let mean = values.iter().mean();
    let stddev = if values.len() > 1 {
        values.iter().population_std_dev()
    } else {
        0.0
    };

    IndicatorStats {
        mean,
        stddev: if stddev.is_finite() { stddev } else { 0.0 },
        sample_size: values.len(),
    }
}

/// `(value - mean) / stddev`, or 0 when the spread is zero or undefined.
pub fn z_score(value: f64, mean: f64, stddev: f64) -> f64 {
    if stddev == 0.0 || !stddev.is_finite() {
        return 0.0;
    }
    let z = (value - mean) / stddev;
    if z.is_finite() {
        z
    } else {
        0.0
    }
}

/// Score one indicator value against population statistics.
///
/// Degenerate statistics report z = 0, `average`, and percentile 50.
pub fn score_indicator(
    definition: &IndicatorDefinition,
    value: f64,
    stats: &IndicatorStats,
) -> ZScoreResult {
    let degenerate = stats.is_degenerate();
    let (z, classification, pct) = if degenerate {
        (0.0, Classification::Average, 50)
    } else {
        let z = z_score(value, stats.mean, stats.stddev);
        (z, classify(z, definition.higher_is_better), percentile(z))
    };

    ZScoreResult {
        indicator: definition.code,
        value,
        mean: stats.mean,
        stddev: stats.stddev,
        z_score: z,
        classification,
        percentile: pct,
        category: definition.category,
        degenerate,
    }
}

/// Statistics for every catalog indicator over one dataset snapshot.
///
/// Computed once and shared across all municipalities analysed against
/// the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct PopulationStatistics {
    stats: BTreeMap<IndicatorCode, IndicatorStats>,
}

impl PopulationStatistics {
    pub fn compute(catalog: &IndicatorCatalog, population: &[Municipality]) -> Self {
        let stats = catalog
            .definitions()
            .iter()
            .map(|def| (def.code, compute_statistics(def.code, population)))
            .collect();
        Self { stats }
    }

    /// Stats for `code`; degenerate if the indicator was not computed.
    pub fn get(&self, code: IndicatorCode) -> IndicatorStats {
        self.stats
            .get(&code)
            .copied()
            .unwrap_or_else(IndicatorStats::degenerate)
    }

    /// Score every catalog indicator the municipality has a value for,
    /// in catalog order.
    pub fn score_municipality(
        &self,
        catalog: &IndicatorCatalog,
        municipality: &Municipality,
    ) -> Vec<ZScoreResult> {
        catalog
            .definitions()
            .iter()
            .filter_map(|def| {
                let value = municipality.value(def.code)?;
                Some(score_indicator(def, value, &self.get(def.code)))
            })
            .collect()
    }
}
