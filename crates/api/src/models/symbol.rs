use super::kind::ConstructKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a registered declaration is documented.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct TargetLocation {
    /// Document name as given to the build.
    pub document: String,
    /// 1-based line of the declaring directive.
    pub line: usize,
    /// Anchor id used when rendering a link.
    pub anchor: String,
}

impl TargetLocation {
    pub fn new(document: impl Into<String>, line: usize, kind: ConstructKind, name: &str) -> Self {
        Self {
            document: document.into(),
            line,
            anchor: format!("dn-{}-{}", kind, name),
        }
    }
}

impl fmt::Display for TargetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}#{}", self.document, self.line, self.anchor)
    }
}

/// Registry key: a fully-qualified name is only unique per kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ReferenceKey {
    pub kind: ConstructKind,
    pub name: String,
}

impl ReferenceKey {
    pub fn new(kind: ConstructKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

/// A recoverable problem found while building one document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Diagnostic {
    pub document: String,
    pub line: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        document: impl Into<String>,
        line: usize,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            document: document.into(),
            line,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.document, self.line, self.severity, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            "index",
            3,
            Severity::Warning,
            "Parsing signature failed: \"Class NotValid\"",
        );
        assert_eq!(
            diag.to_string(),
            "index:3: WARNING: Parsing signature failed: \"Class NotValid\""
        );

        let diag = Diagnostic::new("index", 5, Severity::Error, "Unknown directive kind \"widget\"");
        assert_eq!(
            diag.to_string(),
            "index:5: ERROR: Unknown directive kind \"widget\""
        );
    }

    #[test]
    fn test_target_anchor() {
        let target = TargetLocation::new("api", 7, ConstructKind::Method, "Foo.Bar");
        assert_eq!(target.anchor, "dn-method-Foo.Bar");
        assert_eq!(target.to_string(), "api:7#dn-method-Foo.Bar");
    }
}
