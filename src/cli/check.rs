//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::TestsConfig;
use crate::scan::validate_config;

#[derive(Args)]
pub struct CheckArgs {
    /// Formula root; configured paths missing under it are reported
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

pub fn run(args: CheckArgs, config: &TestsConfig) -> Result<()> {
    let errors = validate_config(config);
    for (location, err) in &errors {
        eprintln!("{}: {}", location, err);
    }

    let mut stale = 0usize;
    if let Some(root) = &args.root {
        let root = root
            .canonicalize()
            .with_context(|| format!("Cannot access formula root: {}", root.display()))?;
        for path in config.declared_paths() {
            if !root.join(&path).exists() {
                tracing::warn!("Configured path does not exist: {}", path);
                stale += 1;
            }
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("{} invalid option declaration(s)", errors.len());
    }

    println!("Configuration OK");
    println!("  Option sets: {}", config.option_sets().len());
    if args.root.is_some() {
        println!("  Missing paths: {}", stale);
    }
    Ok(())
}
