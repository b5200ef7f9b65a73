//! Domain types shared by the catalog, dataset, and engine.

pub mod collections;
pub mod indicator;
pub mod municipality;
pub mod region;

pub use indicator::{Category, IndicatorCode, IndicatorDefinition};
pub use municipality::{IndicatorValues, Municipality};
pub use region::MacroRegion;
