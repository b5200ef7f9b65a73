//! A run's worth of pipeline timings and the baseline comparison.

use serde::{Deserialize, Serialize};

use crate::{BenchLevel, BenchResult};

/// Timings from one run over one fixture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchReport {
    /// Fixture seed, so reports from different datasets are not compared.
    pub seed: u64,
    pub municipalities: usize,
    pub results: Vec<BenchResult>,
}

/// A timing that slowed down past its level's threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub name: String,
    pub level: BenchLevel,
    pub baseline_ms: f64,
    pub current_ms: f64,
}

impl Regression {
    pub fn ratio(&self) -> f64 {
        self.current_ms / self.baseline_ms
    }
}

impl BenchReport {
    pub fn new(seed: u64, municipalities: usize) -> Self {
        Self {
            seed,
            municipalities,
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: BenchResult) {
        self.results.push(result);
    }

    pub fn get(&self, name: &str) -> Option<&BenchResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Timings present in both reports that regressed. Reports over a
    /// different fixture yield nothing.
    pub fn regressions(&self, baseline: &BenchReport) -> Vec<Regression> {
        if self.seed != baseline.seed || self.municipalities != baseline.municipalities {
            return Vec::new();
        }
        self.results
            .iter()
            .filter_map(|current| {
                let base = baseline.get(&current.name)?;
                current.regresses_vs(base).then(|| Regression {
                    name: current.name.clone(),
                    level: current.level,
                    baseline_ms: base.duration_ms,
                    current_ms: current.duration_ms,
                })
            })
            .collect()
    }

    pub fn blocks_ci(&self, baseline: &BenchReport) -> bool {
        self.regressions(baseline)
            .iter()
            .any(|r| r.level.blocks_ci())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
