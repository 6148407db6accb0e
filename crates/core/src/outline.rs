//! Directive outline reader.
//!
//! Picks `.. <domain>:<kind>:: <signature>` lines out of a reStructuredText
//! document. Everything else is body text and is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indent>[ \t]*)\.\.[ \t]+(?P<domain>\w+):(?P<kind>\w+)::(?:[ \t]+(?P<sig>.*))?$")
        .expect("Failed to compile directive pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 1-based.
    pub line: usize,
    /// Leading whitespace width; a tab counts as one column.
    pub indent: usize,
    pub kind: String,
    pub signature: String,
}

pub fn parse(text: &str, domain: &str) -> Vec<Directive> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let caps = DIRECTIVE.captures(line)?;
            if &caps["domain"] != domain {
                return None;
            }
            Some(Directive {
                line: index + 1,
                indent: caps["indent"].len(),
                kind: caps["kind"].to_string(),
                signature: caps
                    .name("sig")
                    .map(|m| m.as_str().trim_end().to_string())
                    .unwrap_or_default(),
            })
        })
        .collect()
}
