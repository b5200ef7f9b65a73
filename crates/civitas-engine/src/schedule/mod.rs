//! ScheduleGenerator: one phase per non-empty category, overlapping.

use civitas_core::constants::{MAX_PLAN_MONTHS, PHASE_ADVANCE_FRACTION};
use civitas_core::types::{Category, IndicatorCode};
use civitas_core::CostTable;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::gaps::GapRecord;

/// A scheduled block of work for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// 1-based.
    pub sequence: u32,
    pub category: Category,
    pub indicators: SmallVec<[IndicatorCode; 5]>,
    pub start_month: u32,
    pub end_month: u32,
    pub duration_months: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub phases: Vec<Phase>,
    /// Latest phase end, capped at 60.
    pub total_months: u32,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// Months the cursor advances after a phase of `duration` months.
pub fn advance_months(duration: u32) -> u32 {
    // saturating float-to-int cast
    (f64::from(duration) * PHASE_ADVANCE_FRACTION).ceil() as u32
}

/// Build the phased schedule for a costed gap list.
///
/// Categories are visited in `Category::ORDER`; within a phase the
/// indicators keep the gap list's order.
pub fn generate(gaps: &[GapRecord], costs: &CostTable) -> Schedule {
    let mut phases = Vec::new();
    let mut cursor = 0u32;

    for category in Category::ORDER {
        let members: Vec<&GapRecord> = gaps.iter().filter(|g| g.category == category).collect();
        if members.is_empty() {
            continue;
        }
        let duration = members
            .iter()
            .map(|g| costs.get(g.indicator).map_or(0, |p| p.implementation_months))
            .max()
            .unwrap_or(0);
        let start = cursor;
        phases.push(Phase {
            sequence: phases.len() as u32 + 1,
            category,
            indicators: members.iter().map(|g| g.indicator).collect(),
            start_month: start,
            end_month: start.saturating_add(duration),
            duration_months: duration,
            cost: members.iter().map(|g| g.estimated_cost).sum(),
        });
        cursor = cursor.saturating_add(advance_months(duration));
    }

    let total_months = phases
        .iter()
        .map(|p| p.end_month)
        .max()
        .unwrap_or(0)
        .min(MAX_PLAN_MONTHS);
    Schedule {
        phases,
        total_months,
    }
}

#[cfg(test)]
mod tests {
    use crate::gaps::Priority;

    use super::*;

    fn gap(code: IndicatorCode, category: Category, cost: f64) -> GapRecord {
        GapRecord {
            indicator: code,
            category,
            higher_is_better: true,
            current_value: 1.0,
            target_value: 2.0,
            gap: 1.0,
            gap_percentage: 100.0,
            priority: Priority::High,
            estimated_cost: cost,
        }
    }

    #[test]
    fn test_advance_months() {
        assert_eq!(advance_months(36), 26);
        assert_eq!(advance_months(30), 21);
        assert_eq!(advance_months(24), 17);
        assert_eq!(advance_months(10), 7);
        assert_eq!(advance_months(0), 0);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = generate(&[], &CostTable::standard());
        assert!(schedule.is_empty());
        assert_eq!(schedule.total_months, 0);
    }

    #[test]
    fn test_phases_follow_category_order() {
        let gaps = vec![
            gap(IndicatorCode::PovertyRate, Category::Economic, 10.0),
            gap(IndicatorCode::LiteracyRate, Category::Education, 20.0),
            gap(IndicatorCode::VaccinationCoverage, Category::Health, 5.0),
            gap(IndicatorCode::LifeExpectancy, Category::Health, 7.0),
        ];
        let schedule = generate(&gaps, &CostTable::standard());
        let cats: Vec<_> = schedule.phases.iter().map(|p| p.category).collect();
        assert_eq!(cats, vec![Category::Health, Category::Education, Category::Economic]);

        let health = &schedule.phases[0];
        assert_eq!(health.sequence, 1);
        assert_eq!(health.duration_months, 36);
        assert_eq!(health.start_month, 0);
        assert_eq!(health.end_month, 36);
        assert_eq!(health.cost, 12.0);
        assert_eq!(
            health.indicators.as_slice(),
            &[IndicatorCode::VaccinationCoverage, IndicatorCode::LifeExpectancy]
        );

        let education = &schedule.phases[1];
        assert_eq!(education.start_month, 26);
        assert_eq!(education.end_month, 56);

        let economic = &schedule.phases[2];
        assert_eq!(economic.sequence, 3);
        assert_eq!(economic.start_month, 26 + 21);
        assert_eq!(economic.end_month, 47 + 36);
        // 83 capped
        assert_eq!(schedule.total_months, 60);
    }

    #[test]
    fn test_single_short_phase_not_capped() {
        let gaps = vec![gap(IndicatorCode::VaccinationCoverage, Category::Health, 1.0)];
        let schedule = generate(&gaps, &CostTable::standard());
        assert_eq!(schedule.total_months, 12);
    }

    #[test]
    fn test_extreme_durations_saturate() {
        let mut costs = CostTable::standard();
        for code in [IndicatorCode::LifeExpectancy, IndicatorCode::LiteracyRate] {
            if let Some(params) = costs.get_mut(code) {
                params.implementation_months = u32::MAX;
            }
        }
        let gaps = vec![
            gap(IndicatorCode::LifeExpectancy, Category::Health, 1.0),
            gap(IndicatorCode::LiteracyRate, Category::Education, 1.0),
            gap(IndicatorCode::PovertyRate, Category::Economic, 1.0),
        ];
        let schedule = generate(&gaps, &costs);
        assert_eq!(schedule.phases.len(), 3);
        assert_eq!(schedule.phases[1].end_month, u32::MAX);
        assert_eq!(schedule.phases[2].start_month, u32::MAX);
        assert_eq!(schedule.total_months, 60);
    }
}
