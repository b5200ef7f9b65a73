//! Read-only municipality dataset.
//!
//! The dataset is owned by an external collaborator; the engine only reads
//! it. `SharedDataset` lets a host reload it without any computation seeing
//! a half-updated table.

pub mod shared;

pub use shared::SharedDataset;

use crate::errors::DatasetError;
use crate::types::collections::FxHashMap;
use crate::types::Municipality;

/// Ordered municipality table with an id index.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    municipalities: Vec<Municipality>,
    index: FxHashMap<String, usize>,
}

impl Dataset {
    /// Build from records, rejecting duplicate ids. Record order is kept.
    pub fn new(municipalities: Vec<Municipality>) -> Result<Self, DatasetError> {
        let mut index = FxHashMap::default();
        index.reserve(municipalities.len());
        for (i, m) in municipalities.iter().enumerate() {
            if index.insert(m.id.clone(), i).is_some() {
                return Err(DatasetError::DuplicateMunicipality(m.id.clone()));
            }
        }
        Ok(Self {
            municipalities,
            index,
        })
    }

    /// Parse a JSON array of municipality records.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Municipality> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn get(&self, id: &str) -> Option<&Municipality> {
        self.index.get(id).map(|&i| &self.municipalities[i])
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Municipality> {
        self.municipalities.iter()
    }

    pub fn len(&self) -> usize {
        self.municipalities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.municipalities.is_empty()
    }
}
