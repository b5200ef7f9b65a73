//! Error handling for Civitas.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod dataset_error;
pub mod engine_error;
pub mod error_code;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use engine_error::{EngineError, EngineResult};
pub use error_code::CivitasErrorCode;
