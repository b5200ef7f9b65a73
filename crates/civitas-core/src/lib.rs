//! # civitas-core
//!
//! Shared foundation for the Civitas municipal benchmarking engine:
//! domain types, the indicator catalog and cost reference tables, the
//! read-only dataset container, errors, configuration, and tracing.
//!
//! Nothing in this crate computes a benchmark; it only describes the
//! inputs the engine consumes.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use catalog::{CostParameters, CostTable, IndicatorCatalog, RegionalFactors, UnitScale};
pub use config::CivitasConfig;
pub use dataset::{Dataset, SharedDataset};
pub use types::{Category, IndicatorCode, IndicatorDefinition, MacroRegion, Municipality};
