//! Binary entry point for the ctxprobe CLI.
//!
//! This is the front door for editors and LLM coding agents that need a
//! cheap syntax sanity check or a structural context lookup for a Python
//! snippet. Every invocation prints exactly one JSON object on stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Validate syntax
//! ctxprobe src/app.py
//!
//! # Locate the scope containing lines 10..=12
//! ctxprobe src/app.py 10 12
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use ctxprobe::cli;
use ctxprobe_core::error::{OutputErrorCode, ProbeError};
use ctxprobe_core::output::{emit_line, ErrorBody};

// ============================================================================
// CLI Structure
// ============================================================================

/// Python syntax validation and enclosing-context lookup.
///
/// With one positional argument the file's syntax is validated; with a line
/// range appended, the widest named scope containing the range is resolved.
/// All output is a single JSON object on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "ctxprobe",
    version,
    about = "Python syntax validation and enclosing-context lookup"
)]
struct Cli {
    /// Python source file to analyze.
    file: Option<PathBuf>,

    /// First line of the target range (1-indexed, inclusive).
    line_start: Option<u32>,

    /// Last line of the target range (1-indexed, inclusive).
    line_end: Option<u32>,

    /// Log level for tracing output.
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.log_level);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Errors still go to stdout as JSON per the caller contract
            let code = OutputErrorCode::from(&err);
            let response = ErrorBody::new(err.to_string());
            let _ = emit_line(&response, &mut io::stdout());
            let _ = io::stdout().flush();

            ExitCode::from(code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the selected query and print its JSON line.
fn execute(cli: Cli) -> Result<(), ProbeError> {
    let Some(file) = cli.file else {
        return Err(ProbeError::MissingPath);
    };

    let json = match (cli.line_start, cli.line_end) {
        (Some(line_start), Some(line_end)) => {
            cli::find_enclosing_context(&file, line_start, line_end)?
        }
        // A lone line_start mirrors the historical argument-count gate:
        // anything short of a full range runs the syntax check.
        _ => cli::check_syntax(&file)?,
    };

    println!("{}", json);
    Ok(())
}
