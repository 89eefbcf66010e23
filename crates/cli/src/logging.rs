//! Tracing subscriber installation.
//!
//! Logs always go to stderr so that stdout carries only command output.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set and no `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_env_filter(level));
    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
