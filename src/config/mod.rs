//! Test configuration loading
//!
//! Reads the YAML hierarchy of default and per-path override options.

pub mod loader;
pub mod tree;

pub use loader::{discover_config, load_config};
pub use tree::{ConfigNode, TestsConfig};
