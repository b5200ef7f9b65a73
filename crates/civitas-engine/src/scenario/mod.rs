//! ScenarioProjector: cost scenarios and second-order impact.

use civitas_core::constants::{
    BENEFIT_SHARE_BASELINE, BENEFIT_SHARE_HEALTH, BENEFIT_SHARE_INFRASTRUCTURE,
    IMPACT_CATEGORY_SHARE, IMPACT_FALLBACK_PER_GAP, IMPACT_INCOME_PER_100,
    IMPACT_LIFE_EXPECTANCY_PER_YEAR, IMPACT_LITERACY_PER_POINT, INVESTMENT_PER_JOB,
    MAX_COMPOSITE_DELTA, OPTIMISTIC_MULTIPLIER, PESSIMISTIC_MULTIPLIER,
};
use civitas_core::types::{Category, IndicatorCode};
use serde::{Deserialize, Serialize};

use crate::gaps::GapRecord;

/// Three total-cost projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostScenarios {
    pub optimistic: f64,
    pub base: f64,
    pub pessimistic: f64,
}

impl CostScenarios {
    pub fn from_total(total: f64) -> Self {
        Self {
            optimistic: total * OPTIMISTIC_MULTIPLIER,
            base: total,
            pessimistic: total * PESSIMISTIC_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    /// Projected composite-index gain, at most 0.05.
    pub composite_index_delta: f64,
    pub jobs_created: u64,
    pub population_benefited: u64,
}

impl ImpactEstimate {
    /// Project the impact of closing `gaps` with `total_investment` in a
    /// municipality of `population` inhabitants.
    ///
    /// An empty gap list benefits nobody.
    pub fn project(gaps: &[GapRecord], total_investment: f64, population: i64) -> Self {
        if gaps.is_empty() {
            return Self::default();
        }
        Self {
            composite_index_delta: composite_index_delta(gaps),
            jobs_created: jobs_created(total_investment),
            population_benefited: (population.max(0) as f64 * benefit_share(gaps)).round() as u64,
        }
    }
}

/// Contribution of one gap to the composite index.
fn indicator_weight(gap: &GapRecord) -> f64 {
    match gap.indicator {
        IndicatorCode::LifeExpectancy => {
            gap.gap * IMPACT_CATEGORY_SHARE * IMPACT_LIFE_EXPECTANCY_PER_YEAR
        }
        IndicatorCode::LiteracyRate => gap.gap * IMPACT_CATEGORY_SHARE * IMPACT_LITERACY_PER_POINT,
        IndicatorCode::AverageIncome => {
            gap.gap / 100.0 * IMPACT_CATEGORY_SHARE * IMPACT_INCOME_PER_100
        }
        _ => IMPACT_FALLBACK_PER_GAP,
    }
}

pub fn composite_index_delta(gaps: &[GapRecord]) -> f64 {
    gaps.iter()
        .map(indicator_weight)
        .filter(|w| w.is_finite())
        .sum::<f64>()
        .min(MAX_COMPOSITE_DELTA)
}

pub fn jobs_created(total_investment: f64) -> u64 {
    if !total_investment.is_finite() || total_investment <= 0.0 {
        return 0;
    }
    (total_investment / INVESTMENT_PER_JOB).round() as u64
}

/// Largest applicable share of the population reached by the plan.
pub fn benefit_share(gaps: &[GapRecord]) -> f64 {
    let mut share = BENEFIT_SHARE_BASELINE;
    if gaps.iter().any(|g| g.category == Category::Infrastructure) {
        share = share.max(BENEFIT_SHARE_INFRASTRUCTURE);
    }
    if gaps.iter().any(|g| g.category == Category::Health) {
        share = share.max(BENEFIT_SHARE_HEALTH);
    }
    share
}
