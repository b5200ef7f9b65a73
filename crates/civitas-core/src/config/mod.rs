//! Configuration system for Civitas.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod civitas_config;
pub mod cost_config;
pub mod logging_config;
pub mod peer_config;
pub mod region_config;

pub use civitas_config::{CivitasConfig, ConfigOverrides};
pub use cost_config::CostOverride;
pub use logging_config::LoggingConfig;
pub use peer_config::PeerConfig;
pub use region_config::RegionConfig;
