//! Tests for civitas-bench: fixtures, pipeline reports, regression detection.

use std::collections::HashSet;
use std::time::Duration;

use civitas_bench::fixtures::{generate_dataset, generate_municipalities, FixtureSize, SimpleRng};
use civitas_bench::{BenchLevel, BenchReport, BenchResult};
use civitas_core::CivitasConfig;
use civitas_engine::{BenchmarkEngine, PlanRequest};

#[test]
fn fixture_micro_has_25_municipalities() {
    let dataset = generate_dataset(FixtureSize::Micro, 42).unwrap();
    assert_eq!(dataset.len(), 25);
}

#[test]
fn fixture_large_is_national_scale() {
    let all = generate_municipalities(FixtureSize::Large, 1);
    assert_eq!(all.len(), 5_570);
    let ids: HashSet<_> = all.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn fixture_different_seeds_differ() {
    let a = generate_municipalities(FixtureSize::Micro, 42);
    let b = generate_municipalities(FixtureSize::Micro, 99);
    assert_ne!(a, b);
}

#[test]
fn fixture_runs_through_pipeline() {
    let engine = BenchmarkEngine::from_config(&CivitasConfig::default()).unwrap();
    let dataset = generate_dataset(FixtureSize::Small, 5).unwrap();
    for m in dataset.iter().take(20) {
        let diagnosis = engine.diagnose(&dataset, &m.id).unwrap();
        assert!(!diagnosis.indicators.is_empty());
        let plan = engine
            .generate_plan(&dataset, &m.id, &PlanRequest::default())
            .unwrap();
        assert!(plan.duration_months <= 60);
        assert!(plan.total_cost >= 0.0);
    }
}

fn measure_pipeline(seed: u64) -> BenchReport {
    let engine = BenchmarkEngine::from_config(&CivitasConfig::default()).unwrap();
    let dataset = generate_dataset(FixtureSize::Micro, seed).unwrap();
    let target = dataset.municipalities()[0].id.clone();
    let mut report = BenchReport::new(seed, dataset.len());
    report.push(BenchResult::measure("diagnose", BenchLevel::Regression, 3, dataset.len(), || {
        engine.diagnose(&dataset, &target).unwrap()
    }));
    report.push(BenchResult::measure("generate_plan", BenchLevel::System, 3, dataset.len(), || {
        engine
            .generate_plan(&dataset, &target, &PlanRequest::default())
            .unwrap()
    }));
    report
}

#[test]
fn pipeline_report_measures_each_stage() {
    let report = measure_pipeline(42);
    assert_eq!(report.municipalities, 25);
    let diagnose = report.get("diagnose").unwrap();
    assert_eq!(diagnose.iterations, 3);
    assert!(diagnose.duration_ms >= 0.0);
    assert_eq!(report.get("generate_plan").unwrap().level, BenchLevel::System);
    assert!(report.get("simulate").is_none());
}

#[test]
fn pipeline_report_flags_slowdown_against_baseline() {
    let current = measure_pipeline(42);
    let mut baseline = current.clone();
    for r in &mut baseline.results {
        // any measured time is more than 10% slower than this
        r.duration_ms = 1e-9;
    }
    let regressions = current.regressions(&baseline);
    let diagnose_regressed = current.get("diagnose").unwrap().duration_ms > 1.1e-9;
    assert_eq!(
        regressions.iter().any(|r| r.name == "diagnose"),
        diagnose_regressed
    );
    assert_eq!(current.blocks_ci(&baseline), diagnose_regressed);

    // a much slower baseline never flags
    for r in &mut baseline.results {
        r.duration_ms = 1e9;
    }
    assert!(current.regressions(&baseline).is_empty());
}

#[test]
fn pipeline_report_ignores_other_fixtures() {
    let current = measure_pipeline(42);
    let mut other = measure_pipeline(7);
    for r in &mut other.results {
        r.duration_ms = 1e-9;
    }
    assert!(current.regressions(&other).is_empty());
}

#[test]
fn pipeline_report_survives_json() {
    let report = measure_pipeline(3);
    let restored = BenchReport::from_json(&report.to_json().unwrap()).unwrap();
    assert_eq!(restored.seed, 3);
    assert_eq!(restored.results.len(), report.results.len());
    assert!(restored.regressions(&report).is_empty());
}

#[test]
fn regression_detection_within_threshold() {
    let baseline = BenchResult {
        name: "diagnose_1000".to_string(),
        level: BenchLevel::Regression,
        duration_ms: 100.0,
        iterations: 10,
        throughput: None,
    };
    let ok = BenchResult {
        duration_ms: 105.0,
        ..baseline.clone()
    };
    assert!(!ok.regresses_vs(&baseline));
}

#[test]
fn regression_detection_exceeds_threshold() {
    let baseline = BenchResult {
        name: "diagnose_1000".to_string(),
        level: BenchLevel::Regression,
        duration_ms: 100.0,
        iterations: 10,
        throughput: None,
    };
    let bad = BenchResult {
        duration_ms: 115.0,
        ..baseline.clone()
    };
    assert!(bad.regresses_vs(&baseline));
}

#[test]
fn regression_zero_baseline_no_panic() {
    let baseline = BenchResult {
        name: "test".to_string(),
        level: BenchLevel::Micro,
        duration_ms: 0.0,
        iterations: 0,
        throughput: None,
    };
    let current = BenchResult {
        duration_ms: 100.0,
        ..baseline.clone()
    };
    assert!(!current.regresses_vs(&baseline));
}

#[test]
fn result_from_elapsed() {
    let r = BenchResult::from_elapsed(
        "plan",
        BenchLevel::System,
        Duration::from_millis(500),
        10,
        1_000,
    );
    assert!((r.duration_ms - 50.0).abs() < 1e-9);
    assert!((r.throughput.unwrap() - 20_000.0).abs() < 1e-6);

    let empty = BenchResult::from_elapsed("none", BenchLevel::Micro, Duration::ZERO, 0, 0);
    assert_eq!(empty.duration_ms, 0.0);
    assert!(empty.throughput.is_none());
}

#[test]
fn result_serializes() {
    let r = BenchResult::from_elapsed("x", BenchLevel::Component, Duration::from_millis(1), 1, 1);
    let json = r.to_json().unwrap();
    assert!(json.contains("\"level\": \"component\""));
}

#[test]
fn bench_level_properties() {
    assert_eq!(BenchLevel::Micro.as_str(), "micro");
    assert_eq!(BenchLevel::Regression.as_str(), "regression");
    assert!(!BenchLevel::System.blocks_ci());
    assert!(BenchLevel::Regression.blocks_ci());
    assert!(BenchLevel::Regression.regression_threshold() < BenchLevel::Micro.regression_threshold());
}

#[test]
fn rng_deterministic() {
    let mut r1 = SimpleRng::new(42);
    let mut r2 = SimpleRng::new(42);
    for _ in 0..100 {
        assert_eq!(r1.next_u64(), r2.next_u64());
    }
}

#[test]
fn rng_zero_seed_handled() {
    let mut rng = SimpleRng::new(0);
    assert_ne!(rng.next_u64(), 0);
}
