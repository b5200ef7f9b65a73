//! StatisticsEngine: population statistics, z-scores, ordinal
//! classification, and percentile conversion.

pub mod classify;
pub mod normal;
pub mod stats;
pub mod types;

pub use classify::classify;
pub use normal::{normal_cdf, percentile};
pub use stats::{compute_statistics, score_indicator, z_score, PopulationStatistics};
pub use types::{Classification, IndicatorStats, ZScoreResult};
