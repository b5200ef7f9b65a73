//! Regional cost factors.

use std::collections::BTreeMap;

use crate::errors::CatalogError;
use crate::types::MacroRegion;

/// Cost multiplier per macro-region. States with no known region cost 1.0.
#[derive(Debug, Clone)]
pub struct RegionalFactors {
    factors: BTreeMap<MacroRegion, f64>,
}

impl RegionalFactors {
    pub const DEFAULT_FACTOR: f64 = 1.0;

    pub fn standard() -> Self {
        let factors = [
            (MacroRegion::North, 1.25),
            (MacroRegion::Northeast, 1.15),
            (MacroRegion::CenterWest, 1.10),
            (MacroRegion::Southeast, 1.00),
            (MacroRegion::South, 1.05),
        ];
        Self {
            factors: factors.into_iter().collect(),
        }
    }

    /// Every region at 1.0.
    pub fn uniform() -> Self {
        Self {
            factors: MacroRegion::ALL
                .iter()
                .map(|r| (*r, Self::DEFAULT_FACTOR))
                .collect(),
        }
    }

    pub fn set(&mut self, region: MacroRegion, factor: f64) -> Result<(), CatalogError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CatalogError::InvalidRegionalFactor { region, factor });
        }
        self.factors.insert(region, factor);
        Ok(())
    }

    pub fn for_region(&self, region: MacroRegion) -> f64 {
        self.factors
            .get(&region)
            .copied()
            .unwrap_or(Self::DEFAULT_FACTOR)
    }

    /// Factor for a state code, via the state → region table.
    pub fn for_state(&self, state: &str) -> f64 {
        MacroRegion::from_state(state)
            .map(|r| self.for_region(r))
            .unwrap_or(Self::DEFAULT_FACTOR)
    }
}

impl Default for RegionalFactors {
    fn default() -> Self {
        Self::standard()
    }
}
