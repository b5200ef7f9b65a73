//! # civitas-engine
//!
//! Municipal benchmarking and investment simulation.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Population mean / stddev, z-scores, percentiles | [`statistics`] |
//! | Similar peers and model cities | [`peers`] |
//! | Directional gaps and priorities | [`gaps`] |
//! | Gap → currency | [`cost`] |
//! | Phased timeline | [`schedule`] |
//! | Cost scenarios and second-order impact | [`scenario`] |
//! | Entry points | [`engine`] |
//!
//! Every stage is a pure function over immutable inputs. The only shared
//! state is the read-only dataset, so callers may run entry points for
//! different municipalities in parallel.

pub mod cost;
pub mod engine;
pub mod gaps;
pub mod peers;
pub mod scenario;
pub mod schedule;
pub mod statistics;

pub use cost::CostModel;
pub use engine::{
    BenchmarkEngine, CategoryScore, Diagnosis, InvestmentPlan, ModelCityRef, PlanRequest,
    SimulationTarget,
};
pub use gaps::{GapOrdering, GapRecord, Priority};
pub use peers::{ModelCityCandidate, ModelCityFilters, PeerSummary, SimilarPeer};
pub use scenario::{CostScenarios, ImpactEstimate};
pub use schedule::{Phase, Schedule};
pub use statistics::{Classification, IndicatorStats, PopulationStatistics, ZScoreResult};
