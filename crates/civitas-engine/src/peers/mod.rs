//! PeerSimilarityMatcher: similar peers for statistical targets and model
//! cities for aspirational targets.

pub mod model_cities;
pub mod similar;
pub mod types;

pub use model_cities::find_model_cities;
pub use similar::find_similar;
pub use types::{ModelCityCandidate, ModelCityFilters, PeerSummary, SimilarPeer};
