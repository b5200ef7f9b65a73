//! What-if simulation: caller-chosen improvements on chosen indicators.

use civitas_core::errors::{EngineError, EngineResult};
use civitas_core::types::collections::FxHashSet;
use civitas_core::types::IndicatorCode;
use civitas_core::Dataset;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{BenchmarkEngine, InvestmentPlan};
use crate::gaps::{self, GapOrdering};

/// Force an improvement of `delta` on `indicator`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationTarget {
    pub indicator: IndicatorCode,
    /// Improvement magnitude in the indicator's own unit, always positive.
    pub delta: f64,
}

impl SimulationTarget {
    pub fn new(indicator: IndicatorCode, delta: f64) -> Self {
        Self { indicator, delta }
    }
}

impl BenchmarkEngine {
    /// Plan the cost of the requested improvements.
    ///
    /// Indicators the municipality has no value for are skipped. When a code
    /// repeats, its first occurrence wins. Lower-is-better targets stop at 0.
    pub fn simulate(
        &self,
        dataset: &Dataset,
        id: &str,
        targets: &[SimulationTarget],
    ) -> EngineResult<InvestmentPlan> {
        let _span = civitas_core::simulation_span!(id, targets.len()).entered();
        let municipality = self.resolve(dataset, id)?;
        if let Some(bad) = targets
            .iter()
            .find(|t| !t.delta.is_finite() || t.delta <= 0.0)
        {
            warn!(indicator = %bad.indicator, delta = bad.delta, "rejecting simulation delta");
            return Err(EngineError::InvalidSimulationDelta {
                indicator: bad.indicator,
                delta: bad.delta,
            });
        }

        let mut seen = FxHashSet::default();
        let mut gap_list = Vec::with_capacity(targets.len());
        for target in targets {
            if !seen.insert(target.indicator) {
                debug!(indicator = %target.indicator, "repeated simulation target ignored");
                continue;
            }
            let Some(definition) = self.catalog.get(target.indicator) else {
                debug!(indicator = %target.indicator, "indicator not in catalog, skipping");
                continue;
            };
            let Some(current) = municipality.value(target.indicator) else {
                debug!(indicator = %target.indicator, "no current value, skipping");
                continue;
            };
            let goal = if definition.higher_is_better {
                current + target.delta
            } else {
                (current - target.delta).max(0.0)
            };
            if let Some(gap) = gaps::compute_gap(definition, current, goal) {
                gap_list.push(gap);
            }
        }
        gaps::sort_gaps(&mut gap_list, GapOrdering::PriorityThenPercentage);
        Ok(self.plan_from_gaps(municipality, None, gap_list))
    }
}
