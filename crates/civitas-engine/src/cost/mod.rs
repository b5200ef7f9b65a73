//! CostModel: converts a gap magnitude into a currency estimate.
//!
//! ```text
//! cost = base_cost * (population / 50_000)^0.7 * regional_factor
//!        * |increments(gap)| / elasticity
//! ```
//!
//! The cost table and regional factors are injected so a synthetic
//! catalog can be costed without touching the standard reference data.

use civitas_core::constants::{POPULATION_EXPONENT, REFERENCE_POPULATION};
use civitas_core::types::{IndicatorCode, Municipality};
use civitas_core::{CostTable, RegionalFactors};
use tracing::debug;

use crate::gaps::GapRecord;

#[derive(Debug, Clone)]
pub struct CostModel {
    costs: CostTable,
    regions: RegionalFactors,
}

impl CostModel {
    pub fn new(costs: CostTable, regions: RegionalFactors) -> Self {
        Self { costs, regions }
    }

    /// Standard cost table and regional factors.
    pub fn standard() -> Self {
        Self::new(CostTable::standard(), RegionalFactors::standard())
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn regions(&self) -> &RegionalFactors {
        &self.regions
    }

    /// `(population / 50_000)^0.7`, or 0 for a non-positive population.
    pub fn population_factor(population: i64) -> f64 {
        if population <= 0 {
            return 0.0;
        }
        (population as f64 / REFERENCE_POPULATION).powf(POPULATION_EXPONENT)
    }

    pub fn regional_factor(&self, state: &str) -> f64 {
        self.regions.for_state(state)
    }

    /// Estimated cost of closing `gap` on `indicator`.
    ///
    /// Indicators without cost parameters, and non-finite gaps, cost 0.
    pub fn estimate_cost(
        &self,
        indicator: IndicatorCode,
        gap: f64,
        population: i64,
        state: &str,
    ) -> f64 {
        let Some(params) = self.costs.get(indicator) else {
            debug!(indicator = %indicator, "no cost parameters, costing at zero");
            return 0.0;
        };
        if !gap.is_finite() {
            return 0.0;
        }
        params.base_cost
            * Self::population_factor(population)
            * self.regional_factor(state)
            * params.unit_scale.increments(gap).abs()
            / params.elasticity
    }

    /// Implementation time for `indicator`, 0 when unknown.
    pub fn implementation_months(&self, indicator: IndicatorCode) -> u32 {
        self.costs
            .get(indicator)
            .map(|p| p.implementation_months)
            .unwrap_or(0)
    }

    /// Fill `estimated_cost` on every gap for `municipality`.
    pub fn cost_gaps(&self, gaps: &mut [GapRecord], municipality: &Municipality) {
        for gap in gaps.iter_mut() {
            gap.estimated_cost = self.estimate_cost(
                gap.indicator,
                gap.gap,
                municipality.population,
                &municipality.state,
            );
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::standard()
    }
}
