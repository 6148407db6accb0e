//! Batch build over a set of documents.

pub mod document;
pub mod scanner;

pub use document::{DocumentBuilder, DocumentOutcome, build_document};
pub use scanner::collect_documents;

use crate::config::BuildConfig;
use crate::registry::ReferenceRegistry;
use crate::tree::DeclarationTree;
use dotnetdomain_api::{Diagnostic, DomainError};
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub registry: ReferenceRegistry,
    /// In document order, then line order within a document.
    pub diagnostics: Vec<Diagnostic>,
    pub trees: Vec<(String, DeclarationTree)>,
}

impl BuildReport {
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub struct Build {
    config: BuildConfig,
}

impl Build {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build every document independently, then merge registries in input
    /// order. A key claimed by an earlier document wins.
    pub fn run(&self, documents: &[SourceDocument]) -> BuildReport {
        let outcomes: Vec<DocumentOutcome> = documents
            .par_iter()
            .map(|doc| build_document(&doc.name, &doc.text, &self.config))
            .collect();

        let mut report = BuildReport::default();
        for outcome in outcomes {
            report.diagnostics.extend(outcome.diagnostics);
            for (rejected, dup) in report.registry.merge(outcome.registry) {
                let error = DomainError::from(dup);
                let diagnostic = Diagnostic::new(
                    rejected.document,
                    rejected.line,
                    error.severity(),
                    error.to_string(),
                );
                tracing::warn!("{}", diagnostic);
                report.diagnostics.push(diagnostic);
            }
            report.trees.push((outcome.name, outcome.tree));
        }

        tracing::info!(
            "Built {} document(s): {} target(s), {} warning(s)",
            documents.len(),
            report.registry.len(),
            report.diagnostics.len()
        );
        report
    }
}
