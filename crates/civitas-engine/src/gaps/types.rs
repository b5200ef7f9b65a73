//! Gap record types.

use std::fmt;

use civitas_core::types::{Category, IndicatorCode};
use serde::{Deserialize, Serialize};

/// Priority tier of a gap. Declaration order is sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a gap list is ordered. Observable in the default rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapOrdering {
    /// Priority tier, then gap percentage descending.
    PriorityThenPercentage,
    /// Priority tier only; catalog order within a tier.
    PriorityOnly,
}

/// One indicator where the municipality trails its target.
///
/// Only exists when the target is strictly better than the current value
/// in the indicator's direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    pub indicator: IndicatorCode,
    pub category: Category,
    pub higher_is_better: bool,
    pub current_value: f64,
    pub target_value: f64,
    /// Improvement needed, always positive.
    pub gap: f64,
    /// `gap / |current| * 100`; 100 when current is 0.
    pub gap_percentage: f64,
    pub priority: Priority,
    /// Filled by the cost model; 0 until costed.
    pub estimated_cost: f64,
}
