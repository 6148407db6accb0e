use crate::error::UnknownKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared category of a documented .NET symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConstructKind {
    Namespace,
    Class,
    Structure,
    Interface,
    Delegate,
    Enumeration,
    Method,
    Constructor,
    Property,
    Field,
    Event,
    Operator,
}

/// Extra validation layered on top of the callable grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableRule {
    Any,
    Constructor,
    Operator,
}

/// Grammar class a kind is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// No argument list, no method arity.
    Plain,
    /// Optional trailing argument list and method arity.
    Callable(CallableRule),
}

impl ConstructKind {
    pub const ALL: [ConstructKind; 12] = [
        ConstructKind::Namespace,
        ConstructKind::Class,
        ConstructKind::Structure,
        ConstructKind::Interface,
        ConstructKind::Delegate,
        ConstructKind::Enumeration,
        ConstructKind::Method,
        ConstructKind::Constructor,
        ConstructKind::Property,
        ConstructKind::Field,
        ConstructKind::Event,
        ConstructKind::Operator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::Namespace => "namespace",
            ConstructKind::Class => "class",
            ConstructKind::Structure => "structure",
            ConstructKind::Interface => "interface",
            ConstructKind::Delegate => "delegate",
            ConstructKind::Enumeration => "enumeration",
            ConstructKind::Method => "method",
            ConstructKind::Constructor => "constructor",
            ConstructKind::Property => "property",
            ConstructKind::Field => "field",
            ConstructKind::Event => "event",
            ConstructKind::Operator => "operator",
        }
    }

    pub fn mode(&self) -> ParseMode {
        match self {
            ConstructKind::Method => ParseMode::Callable(CallableRule::Any),
            ConstructKind::Constructor => ParseMode::Callable(CallableRule::Constructor),
            ConstructKind::Operator => ParseMode::Callable(CallableRule::Operator),
            _ => ParseMode::Plain,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.mode(), ParseMode::Callable(_))
    }

    /// Kinds that can hold nested declarations of their own.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ConstructKind::Namespace
                | ConstructKind::Class
                | ConstructKind::Structure
                | ConstructKind::Interface
                | ConstructKind::Delegate
                | ConstructKind::Enumeration
        )
    }
}

impl FromStr for ConstructKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        ConstructKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ConstructKind::ALL {
            assert_eq!(kind.as_str().parse::<ConstructKind>().unwrap(), kind);
        }
        assert_eq!("Class".parse::<ConstructKind>().unwrap(), ConstructKind::Class);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "struct".parse::<ConstructKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown directive kind \"struct\"");
    }

    #[test]
    fn test_modes() {
        assert_eq!(ConstructKind::Property.mode(), ParseMode::Plain);
        assert_eq!(ConstructKind::Delegate.mode(), ParseMode::Plain);
        assert_eq!(
            ConstructKind::Constructor.mode(),
            ParseMode::Callable(CallableRule::Constructor)
        );
        assert!(ConstructKind::Operator.is_callable());
        assert!(!ConstructKind::Event.is_callable());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ConstructKind::Enumeration).unwrap();
        assert_eq!(json, "\"enumeration\"");
    }
}
