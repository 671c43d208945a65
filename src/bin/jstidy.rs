//! Binary entry point for the jstidy CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Report findings (tree read from app.js.json)
//! jstidy --file app.js
//!
//! # Write the rewritten program to app.js.linted.js
//! jstidy --file app.js --apply-fix
//!
//! # JSON envelope instead of plain lines
//! jstidy --file app.js --ast build/app.json --json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use jstidy::cli::{run_lint, LintOptions};
use jstidy_core::error::{OutputErrorCode, TidyError};
use jstidy_core::output::{emit_response, ErrorResponse};

// ============================================================================
// CLI Structure
// ============================================================================

/// Rewrite JavaScript to a house style and report what changed.
#[derive(Parser, Debug)]
#[command(name = "jstidy", version, about = "Rewrite JavaScript to a house style")]
struct Cli {
    /// JavaScript source file.
    #[arg(short = 'f', long)]
    file: PathBuf,

    /// ESTree JSON for the file (default: `<file>.json`).
    #[arg(long)]
    ast: Option<PathBuf>,

    /// Write the rewritten program to `<file>.linted.js`.
    #[arg(short = 'a', long)]
    apply_fix: bool,

    /// Print a JSON envelope instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Configuration file (default: `jstidy.toml` beside the file, if any).
    #[arg(long)]
    config: Option<PathBuf>,

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

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            if cli.json {
                let _ = emit_response(&ErrorResponse::from_error(&err), &mut io::stdout());
                let _ = io::stdout().flush();
            } else {
                eprintln!("jstidy: {err}");
            }
            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<(), TidyError> {
    let options = LintOptions {
        file: cli.file.clone(),
        ast: cli.ast.clone(),
        apply_fix: cli.apply_fix,
        config: cli.config.clone(),
    };
    let report = run_lint(&options)?;

    let mut stdout = io::stdout();
    if cli.json {
        emit_response(&report.to_response(), &mut stdout)
            .map_err(|e| TidyError::internal(e.to_string()))?;
    } else if !cli.apply_fix {
        for diagnostic in &report.diagnostics {
            writeln!(stdout, "{diagnostic}").map_err(|e| TidyError::internal(e.to_string()))?;
        }
    }
    let _ = stdout.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["jstidy", "--file", "app.js"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("app.js"));
        assert!(cli.ast.is_none());
        assert!(!cli.apply_fix);
        assert!(!cli.json);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::try_parse_from(["jstidy", "-f", "app.js", "-a"]).unwrap();
        assert!(cli.apply_fix);
    }

    #[test]
    fn parse_ast_and_config() {
        let cli = Cli::try_parse_from([
            "jstidy", "--file", "app.js", "--ast", "t.json", "--config", "c.toml", "--json",
        ])
        .unwrap();
        assert_eq!(cli.ast, Some(PathBuf::from("t.json")));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(cli.json);
    }

    #[test]
    fn file_is_required() {
        assert!(Cli::try_parse_from(["jstidy"]).is_err());
    }

    #[test]
    fn default_log_level_is_warn() {
        let cli = Cli::try_parse_from(["jstidy", "-f", "a.js"]).unwrap();
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn debug_converts_to_tracing_level() {
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
    }
}
