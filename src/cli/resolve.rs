//! Resolve command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::OptionsFormat;
use crate::config::TestsConfig;
use crate::render::{render_options_json, render_options_yaml};

#[derive(Args)]
pub struct ResolveArgs {
    /// Template path, relative to the formula root
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Output format for the option map
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: OptionsFormat,
}

pub fn run(args: ResolveArgs, config: &TestsConfig) -> Result<()> {
    let Some(options) = config.resolve(&args.template) else {
        println!("skip");
        return Ok(());
    };

    let rendered = match args.format {
        OptionsFormat::Yaml => render_options_yaml(&options)?,
        OptionsFormat::Json => render_options_json(&options)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
