//! Stable, machine-readable error codes.
//!
//! Codes are part of the contract with the presentation layer and must not
//! change once published.

pub const UNKNOWN_MUNICIPALITY: &str = "UNKNOWN_MUNICIPALITY";
pub const INVALID_POPULATION: &str = "INVALID_POPULATION";
pub const INVALID_SIMULATION_DELTA: &str = "INVALID_SIMULATION_DELTA";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Every Civitas error maps to one stable code.
pub trait CivitasErrorCode {
    fn error_code(&self) -> &'static str;
}
