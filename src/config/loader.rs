//! Config file loading

use super::tree::TestsConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CANDIDATES: [&str; 4] =
    ["formula-cases.yaml", "formula-cases.yml", "config.yaml", "config.yml"];

/// Load the test configuration, either from `config_path` or from the first
/// candidate file found under `base_dir`.
pub fn load_config(base_dir: &Path, config_path: Option<&Path>) -> Result<TestsConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => discover_config(base_dir).with_context(|| {
            format!(
                "No test configuration found in {} (looked for {})",
                base_dir.display(),
                CANDIDATES.join(", ")
            )
        })?,
    };

    tracing::debug!("Loading test configuration from {}", config_file.display());

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    TestsConfig::from_yaml_str(&content)
        .with_context(|| format!("Invalid test configuration: {}", config_file.display()))
}

pub fn discover_config(base_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| base_dir.join(candidate)).find(|path| path.is_file())
}
