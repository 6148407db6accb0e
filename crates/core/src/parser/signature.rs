//! Declaration grammar.
//!
//! A declaration is `[prefix.]member[(arguments)]`. The prefix/member boundary
//! is the rightmost depth-zero dot before the argument list. Each dotted
//! segment is an identifier followed by optional arity groups (`` `N`` then
//! ``` ``M```), one generic group (`<...>` or `{...}`) and a trailing indexer
//! (`[...]`). Group interiors are kept verbatim.

use super::arguments::split_arguments;
use super::operators::is_operator_name;
use super::splitter::{self, Scan};
use dotnetdomain_api::{
    BracketError, BracketFamily, CallableRule, ConstructKind, ParseFailure, ParseMode, Signature,
    SignatureError,
};
use std::ops::Range;

pub const CONSTRUCTOR_NAME: &str = "#ctor";

/// Parse `raw` with the grammar of `kind`.
pub fn parse(raw: &str, kind: ConstructKind) -> Result<Signature, SignatureError> {
    parse_text(raw, kind).map_err(|reason| {
        tracing::debug!("Rejected {} signature {:?}: {}", kind, raw, reason);
        SignatureError::new(raw, reason)
    })
}

fn parse_text(raw: &str, kind: ConstructKind) -> Result<Signature, ParseFailure> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let scan = splitter::scan(text)?;
    let mode = kind.mode();

    let (name_end, arguments) = match scan.find_top_level('(', 0..text.len()) {
        None => (text.len(), None),
        Some(open) => {
            if mode == ParseMode::Plain {
                return Err(ParseFailure::ArgumentsNotAllowed);
            }
            let close = scan.matching_close(open).ok_or(BracketError::Unclosed {
                family: BracketFamily::Paren,
                count: 1,
            })?;
            if close + 1 != text.len() {
                return Err(ParseFailure::TrailingText { offset: close + 1 });
            }
            let args = split_arguments(&text[open + 1..close])?;
            if let Some(position) = args.iter().position(|arg| arg.is_empty()) {
                return Err(ParseFailure::EmptyArgument { position });
            }
            (open, Some(args))
        }
    };

    let (prefix_range, member_range) = match scan.rfind_top_level('.', 0..name_end) {
        Some(dot) => (Some(0..dot), dot + 1..name_end),
        None => (None, 0..name_end),
    };

    if let Some(prefix) = &prefix_range {
        for segment in scan.split_top_level('.', prefix.clone()) {
            check_segment(&scan, segment, Position::Prefix)?;
        }
    }

    let member = &text[member_range.clone()];
    match mode {
        ParseMode::Plain => check_segment(&scan, member_range, Position::Member)?,
        ParseMode::Callable(CallableRule::Any) => {
            check_segment(&scan, member_range, Position::CallableMember)?
        }
        ParseMode::Callable(CallableRule::Constructor) => {
            if member != CONSTRUCTOR_NAME || prefix_range.is_none() {
                return Err(ParseFailure::InvalidConstructor);
            }
        }
        ParseMode::Callable(CallableRule::Operator) => {
            if !is_operator_name(member) {
                return Err(ParseFailure::InvalidOperator(member.to_string()));
            }
        }
    }

    let prefix = prefix_range.map(|range| text[range].to_string());
    Ok(Signature::from_parts(raw, prefix, member, arguments))
}

/// Where a segment sits in the dotted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Prefix,
    Member,
    CallableMember,
}

impl Position {
    fn allows_method_arity(self) -> bool {
        self == Position::CallableMember
    }

    fn allows_indexer(self) -> bool {
        self != Position::Prefix
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_group_char(c: char) -> bool {
    is_ident_char(c)
        || c.is_whitespace()
        || matches!(
            c,
            '.' | ',' | '`' | '<' | '>' | '{' | '}' | '[' | ']' | '?' | '*' | '&'
        )
}

#[derive(Default)]
struct Suffixes {
    type_arity: bool,
    method_arity: bool,
    generic: bool,
    indexer: bool,
}

impl Suffixes {
    /// Consume one arity group starting at `start`; returns the end offset.
    fn arity(
        &mut self,
        text: &str,
        start: usize,
        end: usize,
        allow_method: bool,
    ) -> Result<usize, ParseFailure> {
        let ticks = text[start..end].chars().take_while(|&c| c == '`').count();
        let digits_start = start + ticks;
        let digits = text[digits_start..end]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if ticks > 2 || digits == 0 {
            return Err(ParseFailure::MalformedArity { offset: start });
        }

        if ticks == 1 {
            if self.method_arity {
                return Err(ParseFailure::ArityOrder { offset: start });
            }
            if self.type_arity {
                return Err(ParseFailure::RepeatedArity { offset: start });
            }
            self.type_arity = true;
        } else {
            if !allow_method {
                return Err(ParseFailure::MethodArityNotAllowed { offset: start });
            }
            if self.method_arity {
                return Err(ParseFailure::RepeatedArity { offset: start });
            }
            self.method_arity = true;
        }
        Ok(digits_start + digits)
    }
}

fn check_segment(
    scan: &Scan<'_>,
    range: Range<usize>,
    position: Position,
) -> Result<(), ParseFailure> {
    let text = scan.text();
    let segment = &text[range.clone()];
    if segment.is_empty() {
        return Err(ParseFailure::EmptySegment {
            offset: range.start,
        });
    }

    let ident_len = segment
        .find(|c: char| !is_ident_char(c))
        .unwrap_or(segment.len());
    let mut pos = range.start + ident_len;
    match segment.chars().next() {
        Some(ch) if ident_len == 0 || ch.is_numeric() => {
            return Err(ParseFailure::DisallowedCharacter {
                ch,
                offset: range.start,
            });
        }
        _ => {}
    }

    let mut suffixes = Suffixes::default();
    while let Some(ch) = text[pos..range.end].chars().next() {
        if suffixes.indexer {
            return Err(ParseFailure::AfterIndexer { offset: pos });
        }
        match (ch, BracketFamily::from_opener(ch)) {
            ('`', _) => {
                pos = suffixes.arity(text, pos, range.end, position.allows_method_arity())?
            }
            (_, Some(family)) if family != BracketFamily::Paren => {
                let close = scan
                    .matching_close(pos)
                    .filter(|&close| close < range.end)
                    .ok_or(BracketError::Unclosed { family, count: 1 })?;
                check_group(text, pos + 1..close)?;

                if family == BracketFamily::Square {
                    if !position.allows_indexer() {
                        return Err(ParseFailure::IndexerNotAllowed { offset: pos });
                    }
                    suffixes.indexer = true;
                } else {
                    if suffixes.generic {
                        return Err(ParseFailure::RepeatedGroup {
                            family,
                            offset: pos,
                        });
                    }
                    suffixes.generic = true;
                }
                pos = close + 1;
            }
            _ => return Err(ParseFailure::DisallowedCharacter { ch, offset: pos }),
        }
    }
    Ok(())
}

/// Group interiors must use type-name characters and nest properly.
fn check_group(text: &str, range: Range<usize>) -> Result<(), ParseFailure> {
    let interior = &text[range.clone()];
    if let Some((index, ch)) = interior.char_indices().find(|&(_, c)| !is_group_char(c)) {
        return Err(ParseFailure::DisallowedCharacter {
            ch,
            offset: range.start + index,
        });
    }
    splitter::scan(interior)?;
    Ok(())
}
