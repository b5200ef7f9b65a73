//! Investment plans against a model city.

use civitas_core::errors::{EngineError, EngineResult};
use civitas_core::types::Municipality;
use civitas_core::Dataset;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::BenchmarkEngine;
use crate::gaps::{self, GapRecord, TargetSource};
use crate::peers::{self, ModelCityFilters};
use crate::scenario::{CostScenarios, ImpactEstimate};
use crate::schedule::{self, Phase};

/// Plan request options. Without an explicit model city the best-ranked
/// candidate under `filters` (or the configured defaults) is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub model_city_id: Option<String>,
    pub filters: Option<ModelCityFilters>,
}

impl PlanRequest {
    pub fn with_model_city(id: impl Into<String>) -> Self {
        Self {
            model_city_id: Some(id.into()),
            filters: None,
        }
    }

    pub fn with_filters(filters: ModelCityFilters) -> Self {
        Self {
            model_city_id: None,
            filters: Some(filters),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCityRef {
    pub id: String,
    pub name: String,
    pub state: String,
    pub population: i64,
    pub composite_index: f64,
}

impl From<&Municipality> for ModelCityRef {
    fn from(m: &Municipality) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            state: m.state.clone(),
            population: m.population,
            composite_index: m.composite_index,
        }
    }
}

/// Flat, fully precomputed plan for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    pub municipality_id: String,
    pub municipality_name: String,
    pub model_city: Option<ModelCityRef>,
    pub gaps: Vec<GapRecord>,
    pub total_cost: f64,
    /// Capped at 60.
    pub duration_months: u32,
    pub composite_index_delta: f64,
    pub jobs_created: u64,
    pub population_benefited: u64,
    pub scenarios: CostScenarios,
    pub phases: Vec<Phase>,
}

impl InvestmentPlan {
    /// No gaps to close: nothing to invest, nothing to schedule.
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl BenchmarkEngine {
    /// Plan the investment needed to reach a model city.
    ///
    /// When no model city passes the filters the result is an empty plan,
    /// not an error.
    pub fn generate_plan(
        &self,
        dataset: &Dataset,
        id: &str,
        request: &PlanRequest,
    ) -> EngineResult<InvestmentPlan> {
        let _span = civitas_core::plan_span!(id, request.model_city_id).entered();
        let target = self.resolve(dataset, id)?;

        let model = match &request.model_city_id {
            Some(model_id) => match dataset.get(model_id) {
                Some(model) => Some(model),
                None => {
                    warn!(model_city = %model_id, "unknown model city");
                    return Err(EngineError::UnknownMunicipality(model_id.clone()));
                }
            },
            None => {
                let filters = request.filters.unwrap_or_else(|| self.default_filters());
                peers::find_model_cities(
                    target,
                    dataset.municipalities(),
                    &filters,
                    self.peers.effective_model_city_limit(),
                )
                .first()
                .map(|c| c.municipality)
            }
        };

        let Some(model) = model else {
            debug!("no model city available, returning empty plan");
            return Ok(self.plan_from_gaps(target, None, Vec::new()));
        };

        let gaps = gaps::analyze(&self.catalog, target, TargetSource::ModelCity(model));
        let plan = self.plan_from_gaps(target, Some(ModelCityRef::from(model)), gaps);
        info!(
            model_city = %model.id,
            gaps = plan.gaps.len(),
            total_cost = plan.total_cost,
            duration_months = plan.duration_months,
            "plan generated"
        );
        Ok(plan)
    }

    /// Cost, schedule, and project an already ordered gap list.
    pub fn plan_from_gaps(
        &self,
        municipality: &Municipality,
        model_city: Option<ModelCityRef>,
        mut gaps: Vec<GapRecord>,
    ) -> InvestmentPlan {
        self.cost_model.cost_gaps(&mut gaps, municipality);
        let total_cost: f64 = gaps.iter().map(|g| g.estimated_cost).sum();
        let schedule = schedule::generate(&gaps, self.cost_model.costs());
        let impact = ImpactEstimate::project(&gaps, total_cost, municipality.population);

        InvestmentPlan {
            municipality_id: municipality.id.clone(),
            municipality_name: municipality.name.clone(),
            model_city,
            total_cost,
            duration_months: schedule.total_months,
            composite_index_delta: impact.composite_index_delta,
            jobs_created: impact.jobs_created,
            population_benefited: impact.population_benefited,
            scenarios: CostScenarios::from_total(total_cost),
            phases: schedule.phases,
            gaps,
        }
    }
}
