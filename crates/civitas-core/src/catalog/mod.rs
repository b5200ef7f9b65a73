//! Static reference data: indicator definitions, cost parameters, and
//! regional cost factors.
//!
//! All three are immutable once built and injected into the engine, so
//! tests can substitute synthetic tables.

pub mod cost_table;
pub mod indicators;
pub mod regional;

pub use cost_table::{CostParameters, CostTable, UnitScale};
pub use indicators::IndicatorCatalog;
pub use regional::RegionalFactors;
