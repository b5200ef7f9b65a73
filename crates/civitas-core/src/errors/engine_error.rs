//! Engine entry-point errors.
//!
//! Only rejected preconditions surface here. Missing indicator values,
//! degenerate statistics, and empty peer sets are ordinary results.

use super::error_code::{self, CivitasErrorCode};
use super::CatalogError;
use crate::types::IndicatorCode;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("municipality '{0}' not found in dataset")]
    UnknownMunicipality(String),

    #[error("municipality '{id}' has invalid population {population}")]
    InvalidPopulation { id: String, population: i64 },

    #[error("simulation delta for '{indicator}' must be finite and positive, got {delta}")]
    InvalidSimulationDelta { indicator: IndicatorCode, delta: f64 },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl CivitasErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMunicipality(_) => error_code::UNKNOWN_MUNICIPALITY,
            Self::InvalidPopulation { .. } => error_code::INVALID_POPULATION,
            Self::InvalidSimulationDelta { .. } => error_code::INVALID_SIMULATION_DELTA,
            Self::Catalog(e) => e.error_code(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
