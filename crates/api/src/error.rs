use crate::models::{BracketFamily, ConstructKind, Severity, TargetLocation};
use thiserror::Error;

/// Bracket nesting that does not balance within one family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("unexpected {family} closer at offset {offset}")]
    UnexpectedCloser { family: BracketFamily, offset: usize },
    #[error("{count} unclosed {family} bracket(s)")]
    Unclosed { family: BracketFamily, count: u32 },
}

/// Why the grammar rejected a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("empty signature")]
    Empty,
    #[error(transparent)]
    Brackets(#[from] BracketError),
    #[error("disallowed character {ch:?} at offset {offset}")]
    DisallowedCharacter { ch: char, offset: usize },
    #[error("empty name segment at offset {offset}")]
    EmptySegment { offset: usize },
    #[error("argument list is not allowed for this kind")]
    ArgumentsNotAllowed,
    #[error("unexpected text after the argument list at offset {offset}")]
    TrailingText { offset: usize },
    #[error("malformed arity group at offset {offset}")]
    MalformedArity { offset: usize },
    #[error("repeated arity group at offset {offset}")]
    RepeatedArity { offset: usize },
    #[error("type arity must precede method arity (offset {offset})")]
    ArityOrder { offset: usize },
    #[error("method arity is not allowed here (offset {offset})")]
    MethodArityNotAllowed { offset: usize },
    #[error("repeated {family} group at offset {offset}")]
    RepeatedGroup { family: BracketFamily, offset: usize },
    #[error("indexer is only allowed on the member (offset {offset})")]
    IndexerNotAllowed { offset: usize },
    #[error("nothing may follow an indexer (offset {offset})")]
    AfterIndexer { offset: usize },
    #[error("constructor must be declared as a qualified #ctor")]
    InvalidConstructor,
    #[error("unrecognized operator name {0:?}")]
    InvalidOperator(String),
    #[error("empty argument at position {position}")]
    EmptyArgument { position: usize },
}

/// A declaration the parser rejected. Carries the raw text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parsing signature failed: \"{raw}\"")]
pub struct SignatureError {
    pub raw: String,
    #[source]
    pub reason: ParseFailure,
}

impl SignatureError {
    pub fn new(raw: impl Into<String>, reason: impl Into<ParseFailure>) -> Self {
        Self {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

/// The same `(kind, name)` was registered twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate reference target: {kind} \"{name}\" (first declared at {existing})")]
pub struct DuplicateRegistration {
    pub kind: ConstructKind,
    pub name: String,
    pub existing: TargetLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown directive kind \"{0}\"")]
pub struct UnknownKind(pub String);

/// A recoverable problem with one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error(transparent)]
    Duplicate(#[from] DuplicateRegistration),
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),
}

impl DomainError {
    /// Unknown directive kinds are errors; rejected or duplicate
    /// declarations are warnings.
    pub fn severity(&self) -> Severity {
        match self {
            DomainError::UnknownKind(_) => Severity::Error,
            DomainError::Signature(_) | DomainError::Duplicate(_) => Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_signature_error_message_keeps_raw_text() {
        let err = SignatureError::new("  Class NotValid", ParseFailure::Empty);
        assert_eq!(err.to_string(), "Parsing signature failed: \"  Class NotValid\"");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_bracket_error_converts() {
        let err: ParseFailure = BracketError::Unclosed {
            family: BracketFamily::Angle,
            count: 2,
        }
        .into();
        assert_eq!(err.to_string(), "2 unclosed '<>' bracket(s)");
    }

    #[test]
    fn test_domain_error_severity() {
        let unknown: DomainError = UnknownKind("widget".to_string()).into();
        assert_eq!(unknown.severity(), Severity::Error);
        assert_eq!(unknown.to_string(), "Unknown directive kind \"widget\"");

        let rejected: DomainError = SignatureError::new("A B", ParseFailure::Empty).into();
        assert_eq!(rejected.severity(), Severity::Warning);
    }
}
