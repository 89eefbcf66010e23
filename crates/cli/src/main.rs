//! envelopectl CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse arguments**: the command, its input, and output/logging flags.
//! 2. **Wire observability**: install a `tracing-subscriber` layer (pretty or
//!    JSON) on stderr. The `envelope` library itself emits nothing.
//! 3. **Dispatch**: read the input document from a file or stdin, run the
//!    command, and write the result to stdout.

mod commands;
mod logging;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use crate::commands::OutputOptions;
use crate::logging::{init_logging, LogFormat, DEFAULT_LOG_LEVEL};

#[derive(Parser)]
#[command(name = "envelopectl")]
#[command(version, about = "Normalize backend response envelopes and error bodies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a decoded response into a JSON array of entities
    Normalize {
        /// Input file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },

    /// Print which envelope shape a response matches
    Shape {
        /// Input file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },

    /// Extract a normalized error record from an error body
    Extract {
        /// Input file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_level, cli.log_format) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = OutputOptions { pretty: cli.pretty };
    let output = match cli.command {
        Commands::Normalize { input } => {
            commands::run_normalize(&read_input(input.as_deref())?, options)?
        }
        Commands::Shape { input } => commands::run_shape(&read_input(input.as_deref())?)?,
        Commands::Extract { input } => {
            commands::run_extract(&read_input(input.as_deref())?, options)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write output")?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read input file {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
