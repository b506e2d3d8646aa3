// src/logging.rs

//! Logging setup for `migplan` using `tracing` + `tracing-subscriber`.
//!
//! Filter selection, first match wins:
//! 1. `--log-level` CLI flag: one level for every target
//! 2. `MIGPLAN_LOG`: full `EnvFilter` directives, e.g. `info,migplan::plan=trace`
//!    to see each builder placement without the rest of the crate at trace
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that the plan printed on stdout can be piped
//! (e.g. `--format json | jq`).

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "MIGPLAN_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let directives = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, directives.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Build the filter from the CLI level and the raw `MIGPLAN_LOG` value.
///
/// Directives that fail to parse fall back to `info` with a note on stderr,
/// since the subscriber is not installed yet.
pub fn build_filter(cli_level: Option<LogLevel>, directives: Option<&str>) -> EnvFilter {
    if let Some(lvl) = cli_level {
        return EnvFilter::new(level_directive(lvl));
    }

    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|err| {
            eprintln!("migplan: ignoring invalid {LOG_ENV_VAR}={d:?}: {err}");
            default_filter()
        }),
        None => default_filter(),
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::new("info")
}

fn level_directive(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
