// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `migplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "migplan",
    version,
    about = "Build the ordered task plan for a data migration job.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the job spec (TOML), or a working directory containing
    /// `export.toml`.
    ///
    /// Default: `export.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "export.toml")]
    pub config: String,

    /// How to print the resulting plan.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Print where each object was inserted while the plan was built, and why.
    #[arg(long)]
    pub explain: bool,

    /// Report parents scheduled after their dependents and dependency cycles.
    ///
    /// Exits with a non-zero status when ordering violations are found.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MIGPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Output format for the plan.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
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
