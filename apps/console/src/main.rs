#![allow(clippy::print_stdout)]

mod args;
mod commands;

use crate::args::{Cli, Command};
use anyhow::Context;
use clap::Parser;
use slm_domain::config::SlmConfig;
use slm_kernel::config::load_config;
use slm_logger::{LevelFilter, Logger};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config: Option<SlmConfig> = cli
        .config
        .as_deref()
        .map(|path| load_config(Some(path)))
        .transpose()
        .context("Critical: Configuration is malformed")?;

    let logging = config.as_ref().map(|cfg| &cfg.logging);
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if let Some(logging) = logging {
        logging
            .level
            .parse()
            .with_context(|| format!("Invalid logging level '{}'", logging.level))?
    } else {
        LevelFilter::WARN
    };

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let _log = match logging.and_then(|logging| logging.directory.clone()) {
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };

    match cli.command {
        Command::Check { defines } => {
            let path = defines
                .or_else(|| config.as_ref().and_then(|cfg| cfg.defines.catalog.clone()))
                .unwrap_or_else(|| PathBuf::from("defines"));
            commands::check(&path)?;
        }
        Command::Dump { format, output } => commands::dump(format, output.as_deref())?,
    }

    Ok(())
}
