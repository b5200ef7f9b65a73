//! Atomic snapshot swap for the dataset.

use std::sync::{Arc, PoisonError, RwLock};

use super::Dataset;

/// Holds the current dataset behind an `Arc`.
///
/// Readers take a snapshot and keep it for a whole computation; a reload
/// replaces the `Arc` in one step. The lock is held only for the pointer
/// clone or swap, never during analysis.
#[derive(Debug, Default)]
pub struct SharedDataset {
    current: RwLock<Arc<Dataset>>,
}

impl SharedDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    pub fn snapshot(&self) -> Arc<Dataset> {
        // The guarded value is a plain Arc; a poisoned lock still holds a
        // complete dataset.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new dataset and return the previous one.
    pub fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let next = Arc::new(dataset);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            previous = previous.len(),
            current = guard.len(),
            "dataset replaced"
        );
        previous
    }
}
