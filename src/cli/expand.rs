//! Expand command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::combine::generate_option_combinations;
use crate::config::TestsConfig;
use crate::render::{render_case_list, render_jsonl};
use crate::scan::TestCase;
use crate::utils::normalize_path;

#[derive(Args)]
pub struct ExpandArgs {
    /// Template path, relative to the formula root
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Emit JSONL with the rendering context of every case
    #[arg(long)]
    pub context: bool,
}

pub fn run(args: ExpandArgs, config: &TestsConfig) -> Result<()> {
    let template = normalize_path(&args.template.to_string_lossy());

    let Some(options) = config.resolve(&args.template) else {
        tracing::warn!("{} is skipped by the configuration", template);
        return Ok(());
    };

    let cases: Vec<TestCase> = generate_option_combinations(&options)
        .with_context(|| format!("Cannot expand options for {}", template))?
        .into_iter()
        .map(|combination| TestCase { template: template.clone(), combination })
        .collect();

    if args.context {
        print!("{}", render_jsonl(&cases));
    } else {
        print!("{}", render_case_list(&cases));
    }
    Ok(())
}
