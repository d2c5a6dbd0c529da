//! Configuration module for Quote-Harvest
//!
//! Configuration is built in three layers: compiled-in defaults, an optional
//! TOML file, and `QH_`-prefixed environment variables. The resulting
//! [`HarvestConfig`] is constructed once at process start and passed by
//! reference to the components that need it.

mod parser;
mod types;

pub use parser::{load_config, parse_bool};
pub use types::HarvestConfig;
