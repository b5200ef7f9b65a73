//! Directional gap computation and ordering.

use civitas_core::constants::{
    HIGH_PRIORITY_GAP_PCT, MEDIUM_PRIORITY_GAP_PCT, ZERO_BASELINE_GAP_PCT,
};
use civitas_core::types::{IndicatorCode, IndicatorDefinition, Municipality};
use civitas_core::IndicatorCatalog;
use tracing::debug;

use super::targets::TargetSource;
use super::types::{GapOrdering, GapRecord, Priority};

/// Gap as a percentage of the current value. A zero baseline reports 100%.
pub fn gap_percentage(gap: f64, current: f64) -> f64 {
    if current == 0.0 {
        return ZERO_BASELINE_GAP_PCT;
    }
    gap.abs() / current.abs() * 100.0
}

/// Priority tier for a gap. The critical health indicator is always high.
pub fn priority_for(code: IndicatorCode, gap_pct: f64) -> Priority {
    if code.is_critical_health() || gap_pct > HIGH_PRIORITY_GAP_PCT {
        Priority::High
    } else if gap_pct > MEDIUM_PRIORITY_GAP_PCT {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Compare `current` against `target` in the indicator's direction.
///
/// Returns `None` when the target is not strictly better, or either value
/// is not finite.
pub fn compute_gap(definition: &IndicatorDefinition, current: f64, target: f64) -> Option<GapRecord> {
    if !current.is_finite() || !target.is_finite() {
        return None;
    }
    let raw = target - current;
    let gap = if definition.higher_is_better { raw } else { -raw };
    if gap <= 0.0 {
        return None;
    }
    let pct = gap_percentage(gap, current);
    Some(GapRecord {
        indicator: definition.code,
        category: definition.category,
        higher_is_better: definition.higher_is_better,
        current_value: current,
        target_value: target,
        gap,
        gap_percentage: pct,
        priority: priority_for(definition.code, pct),
        estimated_cost: 0.0,
    })
}

/// Stable sort of a gap list.
pub fn sort_gaps(gaps: &mut [GapRecord], ordering: GapOrdering) {
    match ordering {
        GapOrdering::PriorityThenPercentage => gaps.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.gap_percentage.total_cmp(&a.gap_percentage))
        }),
        GapOrdering::PriorityOnly => gaps.sort_by_key(|g| g.priority),
    }
}

/// Walk the catalog and emit every gap of `municipality` against `source`,
/// ordered the way the source calls for. Costs are left at zero.
pub fn analyze(
    catalog: &IndicatorCatalog,
    municipality: &Municipality,
    source: TargetSource<'_>,
) -> Vec<GapRecord> {
    let mut gaps = Vec::new();
    for definition in catalog.definitions() {
        let Some(current) = municipality.value(definition.code) else {
            debug!(indicator = %definition.code, "no current value, skipping");
            continue;
        };
        let Some(target) = source.resolve(definition) else {
            debug!(indicator = %definition.code, "no target value, skipping");
            continue;
        };
        if let Some(gap) = compute_gap(definition, current, target) {
            gaps.push(gap);
        }
    }
    sort_gaps(&mut gaps, source.ordering());
    gaps
}
