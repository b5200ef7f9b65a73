//! Municipality records as supplied by the dataset collaborator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::indicator::IndicatorCode;
use super::region::MacroRegion;

/// Sparse indicator values. Absent is not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorValues(BTreeMap<IndicatorCode, f64>);

impl IndicatorValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `code`, or `None` when absent or not finite.
    pub fn get(&self, code: IndicatorCode) -> Option<f64> {
        self.0.get(&code).copied().filter(|v| v.is_finite())
    }

    pub fn insert(&mut self, code: IndicatorCode, value: f64) {
        self.0.insert(code, value);
    }

    pub fn with(mut self, code: IndicatorCode, value: f64) -> Self {
        self.insert(code, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(IndicatorCode, f64)> for IndicatorValues {
    fn from_iter<I: IntoIterator<Item = (IndicatorCode, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A municipality. Immutable once loaded; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: String,
    pub name: String,
    /// State code (UF), e.g. "SP".
    pub state: String,
    /// Signed so that invalid source rows survive loading and are rejected
    /// at the entry point instead.
    pub population: i64,
    /// Human-development-style composite index in [0, 1].
    pub composite_index: f64,
    #[serde(default)]
    pub indicators: IndicatorValues,
}

impl Municipality {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        state: impl Into<String>,
        population: i64,
        composite_index: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: state.into(),
            population,
            composite_index,
            indicators: IndicatorValues::new(),
        }
    }

    pub fn with_indicator(mut self, code: IndicatorCode, value: f64) -> Self {
        self.indicators.insert(code, value);
        self
    }

    pub fn value(&self, code: IndicatorCode) -> Option<f64> {
        self.indicators.get(code)
    }

    pub fn region(&self) -> Option<MacroRegion> {
        MacroRegion::from_state(&self.state)
    }

    pub fn has_valid_population(&self) -> bool {
        self.population > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_values_read_as_absent() {
        let m = Municipality::new("1", "A", "SP", 1000, 0.7)
            .with_indicator(IndicatorCode::LiteracyRate, f64::NAN)
            .with_indicator(IndicatorCode::WaterSupply, f64::INFINITY)
            .with_indicator(IndicatorCode::PavedRoads, 42.0);
        assert_eq!(m.value(IndicatorCode::LiteracyRate), None);
        assert_eq!(m.value(IndicatorCode::WaterSupply), None);
        assert_eq!(m.value(IndicatorCode::PavedRoads), Some(42.0));
        assert_eq!(m.value(IndicatorCode::PovertyRate), None);
    }

    #[test]
    fn test_deserialize_with_sparse_indicators() {
        let json = r#"{
            "id": "3550308",
            "name": "Sao Paulo",
            "state": "SP",
            "population": 11451245,
            "composite_index": 0.805,
            "indicators": { "life_expectancy": 76.3, "hospital_beds_per_1000": 2.4 }
        }"#;
        let m: Municipality = serde_json::from_str(json).unwrap();
        assert_eq!(m.value(IndicatorCode::LifeExpectancy), Some(76.3));
        assert_eq!(m.value(IndicatorCode::HospitalBedsPer1000), Some(2.4));
        assert_eq!(m.indicators.len(), 2);
        assert_eq!(m.region(), Some(MacroRegion::Southeast));
    }

    #[test]
    fn test_missing_indicator_map_defaults_to_empty() {
        let json = r#"{"id":"1","name":"A","state":"AC","population":10,"composite_index":0.5}"#;
        let m: Municipality = serde_json::from_str(json).unwrap();
        assert!(m.indicators.is_empty());
    }
}
