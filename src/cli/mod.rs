//! Command-line interface for formula-cases
//!
//! Provides `resolve`, `expand`, `plan` and `check` subcommands over one test
//! configuration file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, TestsConfig};

mod check;
mod expand;
mod plan;
mod resolve;
mod utils;

/// Generate parameterized rendering test cases for formula templates
#[derive(Parser)]
#[command(name = "formula-cases")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the test configuration (defaults to formula-cases.yaml or config.yaml)
    #[arg(short, long, global = true, value_name = "FILE", env = "FORMULA_CASES_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the options resolved for a template, or `skip`
    Resolve(resolve::ResolveArgs),

    /// List every test case generated for a template
    Expand(expand::ExpandArgs),

    /// Discover templates under a directory and list all test cases
    Plan(plan::PlanArgs),

    /// Validate every option declared in the configuration
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = load(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve(args) => resolve::run(args, &config),
        Commands::Expand(args) => expand::run(args, &config),
        Commands::Plan(args) => plan::run(args, &config),
        Commands::Check(args) => check::run(args, &config),
    }
}

fn load(config_path: Option<&std::path::Path>) -> Result<TestsConfig> {
    let cwd = std::env::current_dir()?;
    load_config(&cwd, config_path)
}
