//! Dataset loading errors.

use super::error_code::{self, CivitasErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("municipality '{0}' appears more than once")]
    DuplicateMunicipality(String),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CivitasErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
