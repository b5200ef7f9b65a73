//! GapAnalyzer: directional shortfalls against peer-derived targets.

pub mod analyzer;
pub mod targets;
pub mod types;

pub use analyzer::{analyze, compute_gap, gap_percentage, priority_for, sort_gaps};
pub use targets::{top_quartile_average, TargetSource};
pub use types::{GapOrdering, GapRecord, Priority};
