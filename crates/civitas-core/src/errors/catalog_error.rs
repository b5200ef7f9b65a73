//! Catalog and reference-table errors.

use super::error_code::{self, CivitasErrorCode};
use crate::types::{IndicatorCode, MacroRegion};

/// Errors raised while assembling the catalog, cost table, or regional factors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no cost parameters for indicator '{0}'")]
    MissingCostParameters(IndicatorCode),

    #[error("invalid cost parameters for '{indicator}': {message}")]
    InvalidCostParameters {
        indicator: IndicatorCode,
        message: String,
    },

    #[error("invalid regional factor {factor} for {region}")]
    InvalidRegionalFactor { region: MacroRegion, factor: f64 },

    #[error("indicator '{0}' listed twice in catalog")]
    DuplicateIndicator(IndicatorCode),
}

impl CivitasErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
