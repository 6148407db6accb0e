//! Single-pass bracket depth tracking.
//!
//! Every structurally significant character (`.`, `,`, backtick and the four
//! bracket families) is recorded together with the nesting depth that encloses
//! it. Openers record the depth before they open, closers the depth after they
//! close, so an opener and its closer carry the same depth. Families are
//! counted independently; the scan is linear in the input length.

use dotnetdomain_api::{BracketError, BracketFamily};
use std::ops::Range;

const FAMILIES: [BracketFamily; 4] = [
    BracketFamily::Angle,
    BracketFamily::Brace,
    BracketFamily::Square,
    BracketFamily::Paren,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Depth {
    angle: u32,
    brace: u32,
    square: u32,
    paren: u32,
}

impl Depth {
    pub fn get(&self, family: BracketFamily) -> u32 {
        match family {
            BracketFamily::Angle => self.angle,
            BracketFamily::Brace => self.brace,
            BracketFamily::Square => self.square,
            BracketFamily::Paren => self.paren,
        }
    }

    fn slot(&mut self, family: BracketFamily) -> &mut u32 {
        match family {
            BracketFamily::Angle => &mut self.angle,
            BracketFamily::Brace => &mut self.brace,
            BracketFamily::Square => &mut self.square,
            BracketFamily::Paren => &mut self.paren,
        }
    }

    /// True when no family is open.
    pub fn is_top_level(&self) -> bool {
        self.angle == 0 && self.brace == 0 && self.square == 0 && self.paren == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub offset: usize,
    pub ch: char,
    pub depth: Depth,
}

impl Mark {
    pub fn is_top_level(&self) -> bool {
        self.depth.is_top_level()
    }
}

/// Result of scanning one string.
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    text: &'a str,
    marks: Vec<Mark>,
}

pub fn is_separator(c: char) -> bool {
    matches!(c, '.' | ',' | '`')
}

/// Scan `text`, failing on a closer without an opener or on unclosed brackets.
pub fn scan(text: &str) -> Result<Scan<'_>, BracketError> {
    let mut depth = Depth::default();
    let mut marks = Vec::new();

    for (offset, ch) in text.char_indices() {
        if let Some(family) = BracketFamily::from_opener(ch) {
            marks.push(Mark { offset, ch, depth });
            *depth.slot(family) += 1;
        } else if let Some(family) = BracketFamily::from_closer(ch) {
            let slot = depth.slot(family);
            if *slot == 0 {
                return Err(BracketError::UnexpectedCloser { family, offset });
            }
            *slot -= 1;
            marks.push(Mark { offset, ch, depth });
        } else if is_separator(ch) {
            marks.push(Mark { offset, ch, depth });
        }
    }

    for family in FAMILIES {
        let count = depth.get(family);
        if count > 0 {
            return Err(BracketError::Unclosed { family, count });
        }
    }

    Ok(Scan { text, marks })
}

impl<'a> Scan<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    fn marks_in(&self, range: &Range<usize>) -> &[Mark] {
        let start = self.marks.partition_point(|m| m.offset < range.start);
        let end = self.marks.partition_point(|m| m.offset < range.end);
        &self.marks[start..end]
    }

    /// First depth-zero occurrence of `ch` inside `range`.
    pub fn find_top_level(&self, ch: char, range: Range<usize>) -> Option<usize> {
        self.marks_in(&range)
            .iter()
            .find(|m| m.ch == ch && m.is_top_level())
            .map(|m| m.offset)
    }

    /// Last depth-zero occurrence of `ch` inside `range`.
    pub fn rfind_top_level(&self, ch: char, range: Range<usize>) -> Option<usize> {
        self.marks_in(&range)
            .iter()
            .rev()
            .find(|m| m.ch == ch && m.is_top_level())
            .map(|m| m.offset)
    }

    /// Offset of the closer that matches the opener at `open`.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        let index = self.marks.binary_search_by_key(&open, |m| m.offset).ok()?;
        let opener = self.marks[index];
        let family = BracketFamily::from_opener(opener.ch)?;
        let level = opener.depth.get(family);
        self.marks[index + 1..]
            .iter()
            .find(|m| m.ch == family.closer() && m.depth.get(family) == level)
            .map(|m| m.offset)
    }

    /// Byte ranges between depth-zero occurrences of `sep` inside `range`.
    pub fn split_top_level(&self, sep: char, range: Range<usize>) -> Vec<Range<usize>> {
        let mut pieces = Vec::new();
        let mut start = range.start;
        for mark in self.marks_in(&range) {
            if mark.ch == sep && mark.is_top_level() {
                pieces.push(start..mark.offset);
                start = mark.offset + sep.len_utf8();
            }
        }
        pieces.push(start..range.end);
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_inside_generic_is_not_top_level() {
        let text = "Foo.Bar<System.String>";
        let scan = scan(text).unwrap();
        assert_eq!(scan.rfind_top_level('.', 0..text.len()), Some(3));
        assert_eq!(scan.find_top_level('.', 4..text.len()), None);
    }

    #[test]
    fn test_matching_close_nested() {
        let text = "Bar<T,<T,<string>>>";
        let scan = scan(text).unwrap();
        assert_eq!(scan.matching_close(3), Some(text.len() - 1));
        assert_eq!(scan.matching_close(6), Some(text.len() - 2));
    }

    #[test]
    fn test_families_are_independent() {
        let text = "Expression{System.Func{{TUser},System.Boolean}}";
        let scan = scan(text).unwrap();
        assert_eq!(scan.matching_close(10), Some(text.len() - 1));
        assert_eq!(scan.split_top_level(',', 0..text.len()).len(), 1);
    }

    #[test]
    fn test_split_top_level_commas() {
        let text = "a, Dictionary<K, V>, b[1,2]";
        let scan = scan(text).unwrap();
        let pieces: Vec<&str> = scan
            .split_top_level(',', 0..text.len())
            .into_iter()
            .map(|r| &text[r])
            .collect();
        assert_eq!(pieces, vec!["a", " Dictionary<K, V>", " b[1,2]"]);
    }

    #[test]
    fn test_unexpected_closer() {
        let err = scan("Foo>").unwrap_err();
        assert_eq!(
            err,
            BracketError::UnexpectedCloser {
                family: BracketFamily::Angle,
                offset: 3
            }
        );
    }

    #[test]
    fn test_unclosed() {
        let err = scan("Foo{{Bar}").unwrap_err();
        assert_eq!(
            err,
            BracketError::Unclosed {
                family: BracketFamily::Brace,
                count: 1
            }
        );
    }

    #[test]
    fn test_long_chain_is_linear() {
        let text = vec!["Segment"; 5000].join(".");
        let scan = scan(&text).unwrap();
        assert_eq!(scan.marks().len(), 4999);
        assert_eq!(
            scan.split_top_level('.', 0..text.len()).len(),
            5000
        );
    }
}
