//! Target value resolution.

use civitas_core::types::{IndicatorDefinition, Municipality};

use crate::peers::SimilarPeer;

/// Where a gap's target value comes from.
#[derive(Debug, Clone, Copy)]
pub enum TargetSource<'a> {
    /// Top-quartile average of a similar-peer group.
    TopQuartile(&'a [SimilarPeer<'a>]),
    /// A chosen model city's own values.
    ModelCity(&'a Municipality),
}

impl TargetSource<'_> {
    /// Target value for one indicator, `None` if the source lacks it.
    pub fn resolve(&self, definition: &IndicatorDefinition) -> Option<f64> {
        match self {
            Self::TopQuartile(peers) => {
                let values: Vec<f64> = peers
                    .iter()
                    .filter_map(|p| p.municipality.value(definition.code))
                    .collect();
                top_quartile_average(values, definition.higher_is_better)
            }
            Self::ModelCity(m) => m.value(definition.code),
        }
    }

    pub fn ordering(&self) -> super::GapOrdering {
        match self {
            Self::TopQuartile(_) => super::GapOrdering::PriorityThenPercentage,
            Self::ModelCity(_) => super::GapOrdering::PriorityOnly,
        }
    }
}

/// Average of the best quarter of `values` (at least one value), where
/// "best" follows the indicator's polarity.
pub fn top_quartile_average(mut values: Vec<f64>, higher_is_better: bool) -> Option<f64> {
    values.retain(|v| v.is_finite());
    if values.is_empty() {
        return None;
    }
    if higher_is_better {
        values.sort_by(|a, b| b.total_cmp(a));
    } else {
        values.sort_by(|a, b| a.total_cmp(b));
    }
    let take = values.len().div_ceil(4).max(1);
    Some(values[..take].iter().sum::<f64>() / take as f64)
}
