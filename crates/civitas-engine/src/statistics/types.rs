//! Statistics result types.

use std::fmt;

use civitas_core::types::{Category, IndicatorCode};
use serde::{Deserialize, Serialize};

/// Population mean and standard deviation for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorStats {
    pub mean: f64,
    /// Population (not sample) standard deviation.
    pub stddev: f64,
    /// Municipalities with a finite value for the indicator.
    pub sample_size: usize,
}

impl IndicatorStats {
    /// Stand-in when no municipality has a value: mean 0, stddev 1.
    pub fn degenerate() -> Self {
        Self {
            mean: 0.0,
            stddev: 1.0,
            sample_size: 0,
        }
    }

    /// No meaningful deviation can be measured against these stats.
    pub fn is_degenerate(&self) -> bool {
        self.sample_size == 0 || self.stddev <= 0.0 || !self.stddev.is_finite()
    }
}

/// Ordinal position of a polarity-adjusted z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Critical,
    Below,
    Average,
    Above,
    Excellent,
}

impl Classification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Below => "below",
            Self::Average => "average",
            Self::Above => "above",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Standardized score of one municipality on one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZScoreResult {
    pub indicator: IndicatorCode,
    pub value: f64,
    pub mean: f64,
    pub stddev: f64,
    pub z_score: f64,
    pub classification: Classification,
    /// 0–100.
    pub percentile: u8,
    pub category: Category,
    /// Statistics had no spread (or no samples); reported as average / 50.
    pub degenerate: bool,
}

impl ZScoreResult {
    /// z-score with sign flipped for lower-is-better indicators, so that
    /// positive always means better than the population mean.
    pub fn adjusted_score(&self, higher_is_better: bool) -> f64 {
        if higher_is_better {
            self.z_score
        } else {
            -self.z_score
        }
    }
}
