//! BenchmarkEngine: the entry points the presentation layer calls.
//!
//! The engine owns only immutable configuration (catalog, cost model,
//! peer settings). Every call takes the dataset snapshot explicitly, so one
//! engine can serve concurrent requests against whichever snapshot each
//! caller holds.

mod diagnosis;
mod plan;
mod simulator;

pub use diagnosis::{CategoryScore, Diagnosis};
pub use plan::{InvestmentPlan, ModelCityRef, PlanRequest};
pub use simulator::SimulationTarget;

use civitas_core::config::PeerConfig;
use civitas_core::errors::{CatalogError, EngineError, EngineResult};
use civitas_core::types::Municipality;
use civitas_core::{CivitasConfig, CostTable, Dataset, IndicatorCatalog, RegionalFactors};
use tracing::warn;

use crate::cost::CostModel;
use crate::peers::{self, ModelCityCandidate, ModelCityFilters};

#[derive(Debug, Clone)]
pub struct BenchmarkEngine {
    catalog: IndicatorCatalog,
    cost_model: CostModel,
    peers: PeerConfig,
}

impl BenchmarkEngine {
    /// Build an engine from injected reference data.
    ///
    /// Every catalog indicator must have valid cost parameters.
    pub fn new(
        catalog: IndicatorCatalog,
        costs: CostTable,
        regions: RegionalFactors,
        peers: PeerConfig,
    ) -> EngineResult<Self> {
        costs.validate()?;
        if let Some(missing) = catalog
            .definitions()
            .iter()
            .find(|def| costs.get(def.code).is_none())
        {
            return Err(CatalogError::MissingCostParameters(missing.code).into());
        }
        Ok(Self {
            catalog,
            cost_model: CostModel::new(costs, regions),
            peers,
        })
    }

    /// Standard catalog with the configured cost, region, and peer
    /// overrides applied.
    pub fn from_config(config: &CivitasConfig) -> EngineResult<Self> {
        Self::new(
            IndicatorCatalog::standard(),
            config.cost_table()?,
            config.regional_factors()?,
            config.peers.clone(),
        )
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn peer_config(&self) -> &PeerConfig {
        &self.peers
    }

    /// Model-city filters from configuration.
    pub fn default_filters(&self) -> ModelCityFilters {
        ModelCityFilters::from_config(&self.peers)
    }

    /// Model cities for `id`, best first.
    pub fn find_model_cities<'d>(
        &self,
        dataset: &'d Dataset,
        id: &str,
        filters: &ModelCityFilters,
    ) -> EngineResult<Vec<ModelCityCandidate<'d>>> {
        let _span = civitas_core::model_city_span!(id).entered();
        let target = self.resolve(dataset, id)?;
        Ok(peers::find_model_cities(
            target,
            dataset.municipalities(),
            filters,
            self.peers.effective_model_city_limit(),
        ))
    }

    /// Look up the target municipality and check its population.
    fn resolve<'d>(&self, dataset: &'d Dataset, id: &str) -> EngineResult<&'d Municipality> {
        let Some(municipality) = dataset.get(id) else {
            warn!(municipality = id, "unknown municipality");
            return Err(EngineError::UnknownMunicipality(id.to_string()));
        };
        if !municipality.has_valid_population() {
            warn!(
                municipality = id,
                population = municipality.population,
                "rejecting municipality with invalid population"
            );
            return Err(EngineError::InvalidPopulation {
                id: id.to_string(),
                population: municipality.population,
            });
        }
        Ok(municipality)
    }
}
