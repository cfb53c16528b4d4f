// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every value flag is optional: when given it overrides the config file,
//! which in turn overrides the built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `plantsim`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "plantsim",
    version,
    about = "Simulate parallel production lines racing an overall deadline.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML). Built-in defaults are used if omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of parallel production lines (default 4).
    #[arg(long, value_name = "N")]
    pub lines: Option<u32>,

    /// Number of iterations each line performs (default 10).
    #[arg(long, value_name = "N")]
    pub iterations: Option<u32>,

    /// Overall deadline in seconds (default 30).
    #[arg(long, value_name = "SECS")]
    pub deadline_secs: Option<u64>,

    /// Lower bound of the simulated work delay in milliseconds (default 500).
    #[arg(long, value_name = "MS")]
    pub min_delay_ms: Option<u64>,

    /// Upper bound of the simulated work delay in milliseconds (default 2000).
    #[arg(long, value_name = "MS")]
    pub max_delay_ms: Option<u64>,

    /// Probability that one line-iteration fails (default 0.3).
    #[arg(long, value_name = "P")]
    pub failure_probability: Option<f64>,

    /// Seed for the random source, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANTSIM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print the effective configuration without running.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
