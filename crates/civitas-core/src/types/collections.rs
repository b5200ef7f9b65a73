//! Fast hash collections used for id lookups.

pub use rustc_hash::{FxHashMap, FxHashSet};
