//! The rewriting engine.
//!
//! [`Processor::process`] runs three passes over one program:
//!
//! 1. strip top-level console calls ([`prepass`])
//! 2. walk the remaining tree, applying the rule for each node kind
//!    ([`rules`]) and counting usages ([`usage`])
//! 3. promote single-use bindings to `const` ([`promote`])
//!
//! The tree is rewritten in place. Findings are collected in discovery order
//! and read back with [`Processor::diagnostics`].

pub mod prepass;
pub mod promote;
pub mod rules;
pub mod usage;

use jstidy_core::config::LintConfig;
use jstidy_core::diagnostics::{Diagnostic, Diagnostics};
use jstidy_estree::nodes::Program;
use jstidy_estree::visitor::walk_program;

use self::prepass::strip_console_calls;
use self::promote::Promoter;
use self::rules::RuleTable;
use self::usage::UsageTracker;

/// Per-file engine state.
#[derive(Debug, Clone)]
pub struct Processor {
    file: String,
    console_identifier: String,
    diagnostics: Diagnostics,
    usage: UsageTracker,
}

impl Processor {
    /// Create a processor with default rule settings. `file` is the display
    /// name used in diagnostics.
    pub fn new(file: impl Into<String>) -> Self {
        Self::with_config(file, &LintConfig::default())
    }

    pub fn with_config(file: impl Into<String>, config: &LintConfig) -> Self {
        Self {
            file: file.into(),
            console_identifier: config.console_identifier.clone(),
            diagnostics: Diagnostics::new(),
            usage: UsageTracker::new(),
        }
    }

    /// Rewrite `program` in place.
    ///
    /// State from an earlier call is discarded first, so the diagnostics
    /// afterwards describe this program only.
    pub fn process(&mut self, program: &mut Program) {
        let _span = tracing::debug_span!("process", file = %self.file).entered();
        self.diagnostics = Diagnostics::new();
        self.usage.clear();

        let mut rules = RuleTable::new(&self.file, &mut self.diagnostics, &mut self.usage);
        strip_console_calls(program, &self.console_identifier, &mut rules);
        walk_program(&mut rules, program);

        let promoted = Promoter::new(self.usage.promotions()).run(program);
        tracing::debug!(
            diagnostics = self.diagnostics.len(),
            bindings = self.usage.binding_count(),
            promoted,
            "processed"
        );
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }
}
