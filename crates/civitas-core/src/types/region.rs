//! Macro-regions and the state → region table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five Brazilian macro-regions used for regional cost factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroRegion {
    North,
    Northeast,
    CenterWest,
    Southeast,
    South,
}

/// State code (UF) → macro-region.
const STATE_REGIONS: &[(&str, MacroRegion)] = &[
    ("AC", MacroRegion::North),
    ("AM", MacroRegion::North),
    ("AP", MacroRegion::North),
    ("PA", MacroRegion::North),
    ("RO", MacroRegion::North),
    ("RR", MacroRegion::North),
    ("TO", MacroRegion::North),
    ("AL", MacroRegion::Northeast),
    ("BA", MacroRegion::Northeast),
    ("CE", MacroRegion::Northeast),
    ("MA", MacroRegion::Northeast),
    ("PB", MacroRegion::Northeast),
    ("PE", MacroRegion::Northeast),
    ("PI", MacroRegion::Northeast),
    ("RN", MacroRegion::Northeast),
    ("SE", MacroRegion::Northeast),
    ("DF", MacroRegion::CenterWest),
    ("GO", MacroRegion::CenterWest),
    ("MS", MacroRegion::CenterWest),
    ("MT", MacroRegion::CenterWest),
    ("ES", MacroRegion::Southeast),
    ("MG", MacroRegion::Southeast),
    ("RJ", MacroRegion::Southeast),
    ("SP", MacroRegion::Southeast),
    ("PR", MacroRegion::South),
    ("RS", MacroRegion::South),
    ("SC", MacroRegion::South),
];

impl MacroRegion {
    pub const ALL: [MacroRegion; 5] = [
        Self::North,
        Self::Northeast,
        Self::CenterWest,
        Self::Southeast,
        Self::South,
    ];

    /// Resolve a state code (case-insensitive). Unknown codes return `None`.
    pub fn from_state(state: &str) -> Option<Self> {
        let state = state.trim();
        STATE_REGIONS
            .iter()
            .find(|(uf, _)| uf.eq_ignore_ascii_case(state))
            .map(|(_, region)| *region)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::CenterWest => "center_west",
            Self::Southeast => "southeast",
            Self::South => "south",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == s)
    }
}

impl fmt::Display for MacroRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
