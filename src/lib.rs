//! formula-cases: parameterized rendering test cases for formula templates
//!
//! A YAML configuration declares default test options and per-path overrides.
//! For each template the options are resolved through the path hierarchy,
//! validated against a closed registry of option kinds, and expanded into the
//! Cartesian product of their values. Every resulting combination can build
//! the rendering context of one test case.

pub mod cli;
pub mod combine;
pub mod config;
pub mod context;
pub mod error;
pub mod options;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod utils;

pub use combine::{cartesian_product, generate_option_combinations, Combination};
pub use config::{load_config, TestsConfig};
pub use context::RenderContext;
pub use error::{CaseError, Result};
pub use options::{OptionKind, TestOption};
pub use resolve::OptionMap;
