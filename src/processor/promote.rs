//! `const` promotion.
//!
//! After the walk, every binding whose name was declared or assigned exactly
//! once has its declaration rewritten to `const`. The declarations are found
//! again by [`NodeId`].

use std::collections::HashSet;

use jstidy_estree::nodes::{DeclarationKind, NodeId, Program, VariableDeclaration};
use jstidy_estree::visitor::{walk_program, VisitResult, VisitorMut};

/// Rewrites the targeted declarations to `const`.
#[derive(Debug, Default)]
pub struct Promoter {
    targets: HashSet<NodeId>,
    promoted: usize,
}

impl Promoter {
    pub fn new(targets: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            promoted: 0,
        }
    }

    /// Apply to `program`. Returns how many declarations were promoted.
    pub fn run(mut self, program: &mut Program) -> usize {
        if !self.targets.is_empty() {
            walk_program(&mut self, program);
        }
        self.promoted
    }
}

impl VisitorMut for Promoter {
    fn visit_variable_declaration(&mut self, node: &mut VariableDeclaration) -> VisitResult {
        if self.targets.remove(&node.id) {
            node.kind = DeclarationKind::Const;
            self.promoted += 1;
            if self.targets.is_empty() {
                return VisitResult::Stop;
            }
        }
        VisitResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstidy_estree::from_value;
    use serde_json::json;

    fn decl(name: &str) -> serde_json::Value {
        json!({"type": "VariableDeclaration", "kind": "let", "declarations": [
            {"type": "VariableDeclarator", "id": {"type": "Identifier", "name": name}, "init": null}
        ]})
    }

    fn kinds(program: &Program) -> Vec<DeclarationKind> {
        program
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                jstidy_estree::nodes::Statement::VariableDeclaration(d) => Some(d.kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn only_targets_are_promoted() {
        let tree = json!({"type": "Program", "body": [decl("a"), decl("b"), decl("c")]});
        let mut program = from_value(&tree, None).unwrap();
        let promoted = Promoter::new([NodeId::new(0), NodeId::new(2)]).run(&mut program);
        assert_eq!(promoted, 2);
        assert_eq!(
            kinds(&program),
            vec![
                DeclarationKind::Const,
                DeclarationKind::Let,
                DeclarationKind::Const
            ]
        );
    }

    #[test]
    fn no_targets_is_a_no_op() {
        let tree = json!({"type": "Program", "body": [decl("a")]});
        let mut program = from_value(&tree, None).unwrap();
        assert_eq!(Promoter::new([]).run(&mut program), 0);
        assert_eq!(kinds(&program), vec![DeclarationKind::Let]);
    }
}
