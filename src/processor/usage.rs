//! Variable usage accounting.
//!
//! A flat, whole-file tally keyed by name: no scopes, no hoisting. Every
//! declaration and every assignment to a bare identifier counts once. For
//! each name only the most recent declaration is remembered, as a
//! [`Binding`]; that is the declaration promotion may later rewrite.

use std::collections::HashMap;

use jstidy_estree::nodes::NodeId;

/// The most recent declaration of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// The declaring `VariableDeclaration`.
    pub node: NodeId,
}

/// Name-keyed usage counts and bindings for one file.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    counts: HashMap<String, u32>,
    bindings: HashMap<String, Binding>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration of `name`, replacing any earlier binding.
    pub fn record_declaration(&mut self, name: &str, node: NodeId) {
        self.bindings.insert(name.to_string(), Binding { node });
        self.bump(name);
    }

    /// Record an assignment whose target is the bare identifier `name`.
    pub fn record_assignment(&mut self, name: &str) {
        self.bump(name);
    }

    fn bump(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Total declarations plus assignments seen for `name`.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Declarations whose name was used exactly once in the whole file,
    /// sorted by node id.
    pub fn promotions(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self
            .bindings
            .iter()
            .filter(|(name, _)| self.count(name) == 1)
            .map(|(_, binding)| binding.node)
            .collect();
        nodes.sort();
        nodes
    }

    /// Forget everything, ready for another file.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.bindings.clear();
    }
}
