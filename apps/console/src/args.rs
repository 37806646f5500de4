//! # CLI Argument Definitions
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. It specifies the available subcommands, arguments, and flags for
//! the `slm` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "slm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Operator toolkit for the site log management defines")]
pub struct Cli {
    /// Load platform configuration from this file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on the console
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify a defines catalog file against the compiled tables
    Check {
        /// Path to the catalog file (falls back to the configured one, then 'defines')
        #[arg(short, long)]
        defines: Option<PathBuf>,
    },
    /// Write the built-in defines catalog
    Dump {
        /// Output serialization format
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Toml)]
        format: DumpFormat,

        /// Write to a file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Serialization formats supported by `slm dump`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DumpFormat {
    Toml,
    Json,
}
