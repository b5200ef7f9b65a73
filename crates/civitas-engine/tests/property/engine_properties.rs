//! Property tests for the benchmarking pipeline.

use civitas_core::types::{Category, IndicatorCode, Municipality};
use civitas_core::{CivitasConfig, CostTable, Dataset, IndicatorCatalog, RegionalFactors};
use civitas_engine::gaps::compute_gap;
use civitas_engine::scenario::CostScenarios;
use civitas_engine::schedule;
use civitas_engine::statistics::{classify, compute_statistics, percentile, z_score};
use civitas_engine::{BenchmarkEngine, CostModel, GapRecord, Priority, SimulationTarget};
use proptest::prelude::*;

fn arb_code() -> impl Strategy<Value = IndicatorCode> {
    (0..IndicatorCode::ALL.len()).prop_map(|i| IndicatorCode::ALL[i])
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Health),
        Just(Category::Education),
        Just(Category::Infrastructure),
        Just(Category::Economic),
    ]
}

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

// ── Statistics ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn spread_population_has_positive_stddev_and_zero_mean_z(
        values in prop::collection::vec(-1.0e4f64..1.0e4, 2..50),
    ) {
        let distinct = values.iter().any(|v| (v - values[0]).abs() > 1e-6);
        prop_assume!(distinct);
        let population: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                Municipality::new(format!("m{i}"), "M", "SP", 1_000, 0.5)
                    .with_indicator(IndicatorCode::LiteracyRate, *v)
            })
            .collect();
        let stats = compute_statistics(IndicatorCode::LiteracyRate, &population);
        prop_assert!(stats.stddev > 0.0);
        prop_assert_eq!(z_score(stats.mean, stats.mean, stats.stddev), 0.0);
    }

    #[test]
    fn classification_monotonic(a in -6.0f64..6.0, b in -6.0f64..6.0, higher in any::<bool>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if higher {
            prop_assert!(classify(lo, true) <= classify(hi, true));
        } else {
            prop_assert!(classify(lo, false) >= classify(hi, false));
        }
    }

    #[test]
    fn percentile_bounded_and_monotonic(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percentile(lo) <= percentile(hi));
        prop_assert!(percentile(hi) <= 100);
    }
}

// ── Gaps ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn gaps_point_toward_improvement(
        code in arb_code(),
        current in 0.0f64..1.0e5,
        target in 0.0f64..1.0e5,
    ) {
        let catalog = IndicatorCatalog::standard();
        let def = catalog.get(code).unwrap();
        if let Some(g) = compute_gap(def, current, target) {
            prop_assert!(g.gap > 0.0);
            prop_assert!(g.gap_percentage > 0.0);
            if def.higher_is_better {
                prop_assert!(g.target_value > g.current_value);
            } else {
                prop_assert!(g.target_value < g.current_value);
            }
        }
    }
}

// ── Cost ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cost_non_negative_and_increasing(
        code in arb_code(),
        gap in 0.01f64..1.0e4,
        extra in 0.01f64..1.0e3,
        population in 1i64..5_000_000,
        more_people in 1i64..1_000_000,
    ) {
        let model = CostModel::standard();
        let base = model.estimate_cost(code, gap, population, "MG");
        prop_assert!(base > 0.0);
        prop_assert!(model.estimate_cost(code, gap + extra, population, "MG") > base);
        prop_assert!(model.estimate_cost(code, gap, population + more_people, "MG") > base);
    }
}

proptest! {
    #[test]
    fn cost_decreasing_in_elasticity(
        code in arb_code(),
        gap in 0.01f64..1.0e4,
        population in 1i64..5_000_000,
        low in 0.05f64..2.0,
        step in 0.01f64..2.0,
    ) {
        let high = low + step;
        let with_elasticity = |elasticity: f64| {
            let mut costs = CostTable::standard();
            if let Some(params) = costs.get_mut(code) {
                params.elasticity = elasticity;
            }
            CostModel::new(costs, RegionalFactors::standard())
        };
        let cheap = with_elasticity(high).estimate_cost(code, gap, population, "CE");
        let dear = with_elasticity(low).estimate_cost(code, gap, population, "CE");
        prop_assert!(cheap > 0.0);
        prop_assert!(dear > cheap);
    }
}

// ── Schedule and scenarios ───────────────────────────────────────────────

proptest! {
    #[test]
    fn plan_duration_never_exceeds_sixty(
        entries in prop::collection::vec((arb_code(), arb_category(), 0.0f64..1.0e7), 0..40),
    ) {
        let gaps: Vec<_> = entries.into_iter().map(|(c, cat, cost)| gap(c, cat, cost)).collect();
        let s = schedule::generate(&gaps, &CostTable::standard());
        prop_assert!(s.total_months <= 60);
        prop_assert!(s.phases.len() <= 4);
        prop_assert!(s.phases.windows(2).all(|w| w[0].start_month <= w[1].start_month));
    }

    #[test]
    fn scenarios_ordered(total in 0.0f64..1.0e12) {
        let s = CostScenarios::from_total(total);
        if total > 0.0 {
            prop_assert!(s.optimistic < s.base && s.base < s.pessimistic);
        } else {
            prop_assert_eq!(s, CostScenarios::default());
        }
    }

    #[test]
    fn simulation_is_total(
        deltas in prop::collection::vec((arb_code(), 0.001f64..500.0), 0..20),
        population in 1i64..2_000_000,
    ) {
        let engine = BenchmarkEngine::from_config(&CivitasConfig::default()).unwrap();
        let mut town = Municipality::new("t", "T", "TO", population, 0.6);
        for code in IndicatorCode::ALL {
            town = town.with_indicator(*code, 50.0);
        }
        let dataset = Dataset::new(vec![town]).unwrap();
        let targets: Vec<_> = deltas.iter().map(|(c, d)| SimulationTarget::new(*c, *d)).collect();
        let plan = engine.simulate(&dataset, "t", &targets).unwrap();
        prop_assert!(plan.duration_months <= 60);
        prop_assert!(plan.total_cost >= 0.0);
        prop_assert!(plan.composite_index_delta <= 0.05);
        if plan.gaps.is_empty() {
            prop_assert_eq!(plan.total_cost, 0.0);
        }
    }
}
