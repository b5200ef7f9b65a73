//! Regional factor overrides.

use serde::{Deserialize, Serialize};

use crate::types::MacroRegion;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegionConfig {
    pub north: Option<f64>,
    pub northeast: Option<f64>,
    pub center_west: Option<f64>,
    pub southeast: Option<f64>,
    pub south: Option<f64>,
}

impl RegionConfig {
    pub fn get(&self, region: MacroRegion) -> Option<f64> {
        match region {
            MacroRegion::North => self.north,
            MacroRegion::Northeast => self.northeast,
            MacroRegion::CenterWest => self.center_west,
            MacroRegion::Southeast => self.southeast,
            MacroRegion::South => self.south,
        }
    }

    fn slot(&mut self, region: MacroRegion) -> &mut Option<f64> {
        match region {
            MacroRegion::North => &mut self.north,
            MacroRegion::Northeast => &mut self.northeast,
            MacroRegion::CenterWest => &mut self.center_west,
            MacroRegion::Southeast => &mut self.southeast,
            MacroRegion::South => &mut self.south,
        }
    }

    pub fn set(&mut self, region: MacroRegion, factor: f64) {
        *self.slot(region) = Some(factor);
    }

    /// Configured overrides as (region, factor) pairs.
    pub fn overrides(&self) -> impl Iterator<Item = (MacroRegion, f64)> + '_ {
        MacroRegion::ALL
            .into_iter()
            .filter_map(|r| self.get(r).map(|f| (r, f)))
    }

    pub fn merge(&mut self, other: &RegionConfig) {
        for (region, factor) in other.overrides() {
            self.set(region, factor);
        }
    }
}
