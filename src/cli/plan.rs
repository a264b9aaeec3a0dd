//! Plan command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{parse_csv, CasesFormat};
use crate::config::TestsConfig;
use crate::render::{render_case_list, render_jsonl};
use crate::scan::{build_plan, TemplateScanner};

#[derive(Args)]
pub struct PlanArgs {
    /// Formula root to scan for templates
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Template globs (comma-separated, default: '**/*.sls,**/*.j2,**/*.jinja')
    #[arg(short, long, value_name = "GLOBS")]
    pub pattern: Option<String>,

    /// Output format for the case listing
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CasesFormat,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,
}

pub fn run(args: PlanArgs, config: &TestsConfig) -> Result<()> {
    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("Cannot access formula root: {}", args.root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let mut scanner = TemplateScanner::new(root).follow_symlinks(args.follow_symlinks);
    if let Some(patterns) = parse_csv(&args.pattern) {
        scanner = scanner.patterns(patterns);
    }
    let templates = scanner.scan()?;

    let plan = build_plan(config, &templates)?;

    match args.format {
        CasesFormat::Text => print!("{}", render_case_list(&plan.cases)),
        CasesFormat::Jsonl => print!("{}", render_jsonl(&plan.cases)),
    }

    eprintln!("Statistics:");
    eprintln!("  Templates found: {}", plan.stats.templates);
    eprintln!("  Templates skipped: {}", plan.stats.skipped);
    eprintln!("  Test cases: {}", plan.stats.cases);
    Ok(())
}
