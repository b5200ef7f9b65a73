//! Cost table overrides.

use serde::{Deserialize, Serialize};

use crate::catalog::{CostParameters, UnitScale};

/// Partial override of one indicator's cost parameters.
///
/// ```toml
/// [costs.sanitation_coverage]
/// base_cost = 2_600_000
/// elasticity = 0.45
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CostOverride {
    pub base_cost: Option<f64>,
    pub elasticity: Option<f64>,
    pub implementation_months: Option<u32>,
    pub unit_scale: Option<UnitScale>,
}

impl CostOverride {
    pub fn apply(&self, params: &mut CostParameters) {
        if let Some(v) = self.base_cost {
            params.base_cost = v;
        }
        if let Some(v) = self.elasticity {
            params.elasticity = v;
        }
        if let Some(v) = self.implementation_months {
            params.implementation_months = v;
        }
        if let Some(v) = self.unit_scale {
            params.unit_scale = v;
        }
    }

    /// Field-wise merge: `other` wins where it has a value.
    pub fn merge(&mut self, other: &CostOverride) {
        if other.base_cost.is_some() {
            self.base_cost = other.base_cost;
        }
        if other.elasticity.is_some() {
            self.elasticity = other.elasticity;
        }
        if other.implementation_months.is_some() {
            self.implementation_months = other.implementation_months;
        }
        if other.unit_scale.is_some() {
            self.unit_scale = other.unit_scale;
        }
    }
}
