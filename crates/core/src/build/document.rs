//! Replays one document's directives into a tree and a registry.

use crate::config::BuildConfig;
use crate::outline::{self, Directive};
use crate::parser;
use crate::registry::ReferenceRegistry;
use crate::tree::{DeclarationTree, NodeId};
use dotnetdomain_api::{
    ConstructKind, Diagnostic, DomainError, DuplicateRegistration, ReferenceKey, TargetLocation,
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A target claimed when its directive opened, registered when it closes.
#[derive(Debug)]
struct Claim {
    kind: ConstructKind,
    name: String,
    target: TargetLocation,
}

/// An open directive. `node` is `None` for a directive that was rejected;
/// its nested content attaches to the nearest valid ancestor. `claim` is
/// `None` when the node lost its key to an earlier declaration.
#[derive(Debug)]
struct Scope {
    indent: usize,
    node: Option<NodeId>,
    claim: Option<Claim>,
}

#[derive(Debug)]
pub struct DocumentOutcome {
    pub name: String,
    pub tree: DeclarationTree,
    pub registry: ReferenceRegistry,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug)]
pub struct DocumentBuilder {
    name: String,
    tree: DeclarationTree,
    registry: ReferenceRegistry,
    /// Keys in declaration order, including those of still open scopes.
    claimed: HashMap<ReferenceKey, TargetLocation>,
    diagnostics: Vec<Diagnostic>,
    scopes: Vec<Scope>,
}

impl DocumentBuilder {
    pub fn new(name: impl Into<String>, config: &BuildConfig) -> Self {
        Self {
            name: name.into(),
            tree: DeclarationTree::with_naming(config.nesting.convention()),
            registry: ReferenceRegistry::new(),
            claimed: HashMap::new(),
            diagnostics: Vec::new(),
            scopes: Vec::new(),
        }
    }

    pub fn push(&mut self, directive: &Directive) {
        while self
            .scopes
            .last()
            .is_some_and(|scope| scope.indent >= directive.indent)
        {
            self.close_scope();
        }

        let mut scope = Scope {
            indent: directive.indent,
            node: None,
            claim: None,
        };

        let opened = directive
            .kind
            .parse::<ConstructKind>()
            .map_err(DomainError::from)
            .and_then(|kind| {
                parser::parse(&directive.signature, kind)
                    .map(|signature| (kind, signature))
                    .map_err(DomainError::from)
            });

        match opened {
            Ok((kind, signature)) => {
                tracing::debug!("{}:{}: {} {}", self.name, directive.line, kind, signature);
                let id = self.tree.open(kind, signature);
                scope.node = Some(id);
                scope.claim = self.claim(id, kind, directive.line);
            }
            Err(e) => self.report(directive.line, e),
        }

        self.scopes.push(scope);
    }

    pub fn finish(mut self) -> DocumentOutcome {
        while !self.scopes.is_empty() {
            self.close_scope();
        }
        DocumentOutcome {
            name: self.name,
            tree: self.tree,
            registry: self.registry,
            diagnostics: self.diagnostics,
        }
    }

    /// Reserve the node's key in declaration order. A key already claimed,
    /// even by a still open ancestor, makes this node a duplicate.
    fn claim(&mut self, id: NodeId, kind: ConstructKind, line: usize) -> Option<Claim> {
        let name = self.tree.fully_qualified_name(id)?;
        match self.claimed.entry(ReferenceKey::new(kind, name.clone())) {
            Entry::Occupied(existing) => {
                let dup = DuplicateRegistration {
                    kind,
                    name,
                    existing: existing.get().clone(),
                };
                self.report(line, dup.into());
                None
            }
            Entry::Vacant(slot) => {
                let target = TargetLocation::new(self.name.clone(), line, kind, &name);
                slot.insert(target.clone());
                Some(Claim { kind, name, target })
            }
        }
    }

    fn close_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        if scope.node.is_none() {
            return;
        }
        self.tree.close();

        if let Some(Claim { kind, name, target }) = scope.claim {
            let line = target.line;
            if let Err(dup) = self.registry.register(kind, name, target) {
                self.report(line, dup.into());
            }
        }
    }

    fn report(&mut self, line: usize, error: DomainError) {
        let diagnostic = Diagnostic::new(self.name.clone(), line, error.severity(), error.to_string());
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Build a single document from its text.
pub fn build_document(name: &str, text: &str, config: &BuildConfig) -> DocumentOutcome {
    let mut builder = DocumentBuilder::new(name, config);
    for directive in outline::parse(text, &config.domain) {
        builder.push(&directive);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotnetdomain_api::Severity;

    fn build(text: &str) -> DocumentOutcome {
        build_document("index", text, &BuildConfig::default())
    }

    #[test]
    fn test_nested_registration() {
        let outcome = build(
            ".. dn:namespace:: N\n\n    .. dn:class:: C\n\n        .. dn:method:: M(a)\n",
        );
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.registry.contains(ConstructKind::Namespace, "N"));
        assert!(outcome.registry.contains(ConstructKind::Class, "N.C"));
        assert!(outcome.registry.contains(ConstructKind::Method, "N.C.M"));
    }

    #[test]
    fn test_registration_is_post_order() {
        let outcome = build(".. dn:class:: A\n\n    .. dn:field:: F\n\n.. dn:class:: B\n");
        let names: Vec<&str> = outcome
            .registry
            .iter()
            .map(|(key, _)| key.name.as_str())
            .collect();
        assert_eq!(names, vec!["A.F", "A", "B"]);
    }

    #[test]
    fn test_rejected_directive_is_a_placeholder() {
        let outcome = build(
            ".. dn:class:: Outer\n\n    .. dn:class:: Class NotValid\n\n        .. dn:field:: F\n",
        );
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line, 3);
        assert_eq!(
            outcome.diagnostics[0].message,
            "Parsing signature failed: \"Class NotValid\""
        );
        assert!(outcome.registry.contains(ConstructKind::Field, "Outer.F"));
        assert_eq!(outcome.registry.len(), 2);
    }

    #[test]
    fn test_unknown_kind() {
        let outcome = build(".. dn:widget:: W\n");
        assert_eq!(
            outcome.diagnostics[0].message,
            "Unknown directive kind \"widget\""
        );
        assert_eq!(outcome.diagnostics[0].severity, Severity::Error);
        assert!(outcome.registry.is_empty());
    }

    #[test]
    fn test_outer_declaration_wins_over_nested_duplicate() {
        let outcome = build(".. dn:structure:: S\n\n    .. dn:structure:: S\n");

        let target = outcome.registry.find(ConstructKind::Structure, "S").unwrap();
        assert_eq!(target.line, 1);
        assert_eq!(outcome.registry.len(), 1);

        assert_eq!(outcome.diagnostics.len(), 1);
        let diag = &outcome.diagnostics[0];
        assert_eq!(diag.line, 3);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(
            diag.message,
            "Duplicate reference target: structure \"S\" (first declared at index:1#dn-structure-S)"
        );
    }

    #[test]
    fn test_duplicate_node_still_hosts_children() {
        let outcome = build(
            ".. dn:class:: A\n.. dn:class:: A\n\n    .. dn:field:: F\n",
        );
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.registry.contains(ConstructKind::Field, "A.F"));
        assert_eq!(outcome.tree.len(), 3);
    }

    #[test]
    fn test_duplicate_within_document() {
        let outcome = build(".. dn:class:: A\n.. dn:class:: A\n");
        assert_eq!(outcome.registry.len(), 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line, 2);
        assert!(
            outcome.diagnostics[0]
                .message
                .starts_with("Duplicate reference target: class \"A\"")
        );
        assert_eq!(
            outcome.registry.find(ConstructKind::Class, "A").unwrap().line,
            1
        );
    }

    #[test]
    fn test_dedent_closes_scopes() {
        let outcome = build(
            ".. dn:namespace:: N\n    .. dn:class:: C\n.. dn:class:: D\n",
        );
        assert!(outcome.registry.contains(ConstructKind::Class, "D"));
        assert_eq!(outcome.tree.roots().len(), 2);
        assert_eq!(outcome.tree.depth(), 0);
    }
}
