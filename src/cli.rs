//! CLI front door.
//!
//! [`run_lint`] does everything the `jstidy` binary does except printing:
//! - reads the JavaScript source and the ESTree JSON produced for it
//! - loads configuration (`--config`, else `jstidy.toml` beside the file)
//! - runs the [`Processor`] over the tree
//! - in fix mode, generates code from the rewritten tree and writes it to
//!   `<file><fixed_suffix>`
//!
//! ## Error Handling
//!
//! All functions return `Result<T, TidyError>`. Unusable options map to
//! `InvalidArguments`, missing files to
//! `FileNotFound`, unreadable trees to `InvalidTree`, bad configuration to
//! `Config`; the binary turns each into an exit code.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use jstidy_core::config::Config;
use jstidy_core::diagnostics::Diagnostic;
use jstidy_core::error::TidyError;
use jstidy_core::output::LintResponse;
use jstidy_estree::{generate_with_indent, parse_tree};

use crate::error_bridges::tree_error;
use crate::processor::Processor;

/// Extension appended to the source path to find its tree by default.
pub const DEFAULT_TREE_EXTENSION: &str = ".json";

/// Inputs for one lint run.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// JavaScript source file. Also the display name in diagnostics.
    pub file: PathBuf,
    /// ESTree JSON for `file`. Defaults to `<file>.json`.
    pub ast: Option<PathBuf>,
    /// Write the rewritten program instead of only reporting.
    pub apply_fix: bool,
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

impl LintOptions {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Path of the tree file to read.
    pub fn tree_path(&self) -> PathBuf {
        match &self.ast {
            Some(path) => path.clone(),
            None => append_to_path(&self.file, DEFAULT_TREE_EXTENSION),
        }
    }

    /// Reject option combinations that cannot name a lint run.
    pub fn validate(&self) -> Result<(), TidyError> {
        if self.file.as_os_str().is_empty() {
            return Err(TidyError::invalid_args("no source file given"));
        }
        if self.tree_path() == self.file {
            return Err(TidyError::invalid_args(format!(
                "tree file '{}' is the source file itself",
                self.file.display()
            )));
        }
        Ok(())
    }
}

/// Outcome of a lint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Display name used in diagnostics.
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Where fix mode wrote the rewritten program.
    pub fixed_path: Option<PathBuf>,
}

impl LintReport {
    /// JSON envelope for `--json`.
    pub fn to_response(&self) -> LintResponse {
        let response = LintResponse::new(self.file.clone(), self.diagnostics.clone());
        match &self.fixed_path {
            Some(path) => response.with_fixed_path(path.display().to_string()),
            None => response,
        }
    }

    /// Diagnostics one per line, without a trailing newline.
    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lint one file.
pub fn run_lint(options: &LintOptions) -> Result<LintReport, TidyError> {
    options.validate()?;
    let display = options.file.display().to_string();
    let source = fs::read_to_string(&options.file).map_err(|e| TidyError::io(display.clone(), e))?;

    let tree_path = options.tree_path();
    let json = fs::read_to_string(&tree_path)
        .map_err(|e| TidyError::io(tree_path.display().to_string(), e))?;

    let config = load_config(options)?;

    let mut program = parse_tree(&json, Some(&source)).map_err(|e| tree_error(e, &tree_path))?;
    let mut processor = Processor::with_config(display.clone(), &config.lint);
    processor.process(&mut program);

    let fixed_path = if options.apply_fix {
        let path = append_to_path(&options.file, &config.output.fixed_suffix);
        let code = generate_with_indent(&program, Some(&source), &config.output.indent);
        fs::write(&path, code).map_err(|e| TidyError::io(path.display().to_string(), e))?;
        tracing::info!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(LintReport {
        file: display,
        diagnostics: processor.into_diagnostics(),
        fixed_path,
    })
}

fn load_config(options: &LintOptions) -> Result<Config, TidyError> {
    match &options.config {
        Some(path) => Config::load(path),
        None => {
            let dir = options
                .file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            Config::discover(dir)
        }
    }
}

/// `path` with `suffix` appended to its final component (`a.js` + `.json`
/// is `a.js.json`).
fn append_to_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
