//! Fixed model constants.
//!
//! These are behavioral parameters of the benchmarking model, not
//! configuration. Changing any of them changes published results.

/// Default number of similar peers returned by `find_similar`.
pub const DEFAULT_SIMILAR_PEERS: usize = 10;
/// Maximum model cities returned by model-city discovery.
pub const DEFAULT_MODEL_CITY_LIMIT: usize = 10;

/// Similar-peer score: weight of population closeness.
pub const SIMILAR_POPULATION_WEIGHT: f64 = 0.4;
/// Similar-peer score: weight of composite-index closeness.
pub const SIMILAR_INDEX_WEIGHT: f64 = 0.6;
/// Population closeness spans three orders of magnitude.
pub const SIMILAR_LOG_SPAN: f64 = 3.0;
/// Composite-index difference scale in the similar-peer score.
pub const SIMILAR_INDEX_SCALE: f64 = 10.0;

/// Model-city ranking: weight of the composite-index advantage.
pub const MODEL_CITY_ADVANTAGE_WEIGHT: f64 = 0.6;
/// Model-city ranking: weight of population dissimilarity (0–100 scale).
pub const MODEL_CITY_DISSIMILARITY_WEIGHT: f64 = 0.004;

/// Default population band for model-city discovery, percent of target.
pub const DEFAULT_POPULATION_MIN_PCT: f64 = 50.0;
pub const DEFAULT_POPULATION_MAX_PCT: f64 = 200.0;

/// Gap priority thresholds, percent.
pub const HIGH_PRIORITY_GAP_PCT: f64 = 30.0;
pub const MEDIUM_PRIORITY_GAP_PCT: f64 = 15.0;
/// Gap percentage reported when the current value is zero.
pub const ZERO_BASELINE_GAP_PCT: f64 = 100.0;

/// Cost model: reference population and scale exponent.
pub const REFERENCE_POPULATION: f64 = 50_000.0;
pub const POPULATION_EXPONENT: f64 = 0.7;

/// Share of a phase's duration that runs before the next phase starts.
pub const PHASE_ADVANCE_FRACTION: f64 = 0.7;
/// Hard ceiling on total plan duration.
pub const MAX_PLAN_MONTHS: u32 = 60;
/// Upper bound on a single indicator's implementation time (100 years).
pub const MAX_IMPLEMENTATION_MONTHS: u32 = 1_200;

/// Scenario multipliers.
pub const OPTIMISTIC_MULTIPLIER: f64 = 0.85;
pub const PESSIMISTIC_MULTIPLIER: f64 = 1.25;

/// Composite-index impact conversion.
pub const IMPACT_CATEGORY_SHARE: f64 = 0.33;
pub const IMPACT_LIFE_EXPECTANCY_PER_YEAR: f64 = 0.01;
pub const IMPACT_LITERACY_PER_POINT: f64 = 0.003;
pub const IMPACT_INCOME_PER_100: f64 = 0.0001;
pub const IMPACT_FALLBACK_PER_GAP: f64 = 0.001;
pub const MAX_COMPOSITE_DELTA: f64 = 0.05;

/// Investment per job created.
pub const INVESTMENT_PER_JOB: f64 = 150_000.0;
/// Shares of population benefited.
pub const BENEFIT_SHARE_BASELINE: f64 = 0.30;
pub const BENEFIT_SHARE_INFRASTRUCTURE: f64 = 0.50;
pub const BENEFIT_SHARE_HEALTH: f64 = 0.70;
