use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bracket families tracked independently by the splitter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BracketFamily {
    Angle,
    Brace,
    Square,
    Paren,
}

impl BracketFamily {
    pub fn from_opener(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Angle),
            '{' => Some(Self::Brace),
            '[' => Some(Self::Square),
            '(' => Some(Self::Paren),
            _ => None,
        }
    }

    pub fn from_closer(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::Angle),
            '}' => Some(Self::Brace),
            ']' => Some(Self::Square),
            ')' => Some(Self::Paren),
            _ => None,
        }
    }

    pub fn opener(&self) -> char {
        match self {
            Self::Angle => '<',
            Self::Brace => '{',
            Self::Square => '[',
            Self::Paren => '(',
        }
    }

    pub fn closer(&self) -> char {
        match self {
            Self::Angle => '>',
            Self::Brace => '}',
            Self::Square => ']',
            Self::Paren => ')',
        }
    }
}

impl fmt::Display for BracketFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}{}'", self.opener(), self.closer())
    }
}

/// Structural decomposition of a raw declaration string.
///
/// `member` keeps generic, arity and indexer suffixes verbatim. `arguments` is
/// `None` when the input had no argument list and `Some(vec![])` for `()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct Signature {
    raw: String,
    prefix: Option<String>,
    member: String,
    arguments: Option<Vec<String>>,
}

impl Signature {
    /// Assemble a signature from already validated parts.
    pub fn from_parts(
        raw: impl Into<String>,
        prefix: Option<String>,
        member: impl Into<String>,
        arguments: Option<Vec<String>>,
    ) -> Self {
        Self {
            raw: raw.into(),
            prefix,
            member: member.into(),
            arguments,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn arguments(&self) -> Option<&[String]> {
        self.arguments.as_deref()
    }

    /// `prefix.member`, or `member` alone. Never includes argument text.
    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, self.member),
            None => self.member.clone(),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())?;
        if let Some(args) = &self.arguments {
            write!(f, "({})", args.join(", "))?;
        }
        Ok(())
    }
}
