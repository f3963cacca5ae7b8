mod args;
mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use rtfeat::FeatureRegistry;
use rtfeat::registry::{config::load_config, install};
use rtfeat_logger::Logger;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).level(cli.log_level.into());
    if let Some(dir) = &cli.log_dir {
        logger = logger.file(dir);
    }
    let _logger = logger.init()?;

    let config = load_config(cli.config.as_deref())?;
    let registry = install(FeatureRegistry::new(&config))
        .context("Failed to install the feature registry")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check { names, require } => commands::check(registry, &names, require, &mut out)?,
        Command::List { json } => commands::list(registry, json, &mut out)?,
        Command::Probe => commands::probe(registry, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
