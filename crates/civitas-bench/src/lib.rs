//! # civitas-bench
//!
//! Synthetic municipality fixtures and pipeline timing for Civitas.
//!
//! Timings are tagged with a [`BenchLevel`] that sets how much slowdown
//! against a stored baseline is tolerated. Only `Regression` timings fail CI.
//! A run's timings are collected in a [`BenchReport`] and compared against
//! the previous report by name.

pub mod fixtures;
pub mod report;

pub use report::{BenchReport, Regression};

use std::time::{Duration, Instant};

/// How much of the diagnosis/plan pipeline a timing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchLevel {
    /// One statistic or one cost estimate.
    Micro,
    /// One stage: statistics, peer matching, or gap costing.
    Component,
    /// `diagnose` or `generate_plan` against a whole dataset.
    System,
    /// Pinned pipeline timings that gate CI.
    Regression,
}

impl BenchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Component => "component",
            Self::System => "system",
            Self::Regression => "regression",
        }
    }

    pub fn blocks_ci(&self) -> bool {
        matches!(self, Self::Regression)
    }

    /// Tolerated slowdown as a fraction of the baseline duration.
    pub fn regression_threshold(&self) -> f64 {
        match self {
            Self::Micro => 0.20,
            Self::Component => 0.50,
            Self::System => 1.00,
            Self::Regression => 0.10,
        }
    }
}

/// Mean per-iteration timing of one pipeline operation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub level: BenchLevel,
    pub duration_ms: f64,
    pub iterations: u64,
    /// Municipalities processed per second, when meaningful.
    pub throughput: Option<f64>,
}

impl BenchResult {
    /// Time `iterations` calls of `run`, each covering `municipalities` records.
    pub fn measure<T>(
        name: impl Into<String>,
        level: BenchLevel,
        iterations: u64,
        municipalities: usize,
        mut run: impl FnMut() -> T,
    ) -> Self {
        let start = Instant::now();
        for _ in 0..iterations {
            std::hint::black_box(run());
        }
        Self::from_elapsed(name, level, start.elapsed(), iterations, municipalities)
    }

    pub fn from_elapsed(
        name: impl Into<String>,
        level: BenchLevel,
        elapsed: Duration,
        iterations: u64,
        municipalities: usize,
    ) -> Self {
        let total_ms = elapsed.as_secs_f64() * 1000.0;
        let duration_ms = if iterations == 0 {
            0.0
        } else {
            total_ms / iterations as f64
        };
        let throughput = (duration_ms > 0.0 && municipalities > 0)
            .then(|| municipalities as f64 / (duration_ms / 1000.0));
        Self {
            name: name.into(),
            level,
            duration_ms,
            iterations,
            throughput,
        }
    }

    /// Slowdown ratio against `baseline`; `None` when the baseline has no timing.
    pub fn ratio_to(&self, baseline: &BenchResult) -> Option<f64> {
        (baseline.duration_ms > 0.0).then(|| self.duration_ms / baseline.duration_ms)
    }

    pub fn regresses_vs(&self, baseline: &BenchResult) -> bool {
        self.ratio_to(baseline)
            .is_some_and(|ratio| ratio > 1.0 + self.level.regression_threshold())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
