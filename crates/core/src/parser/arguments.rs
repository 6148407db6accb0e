//! Top-level argument splitting for a parenthesized region.

use super::splitter;
use dotnetdomain_api::BracketError;

/// Split the interior of an argument list on depth-zero commas.
///
/// Entries are trimmed and otherwise kept verbatim. Blank interior text yields
/// an empty list. Blank entries between commas are kept as empty strings so
/// the caller can decide how to report them.
pub fn split_arguments(inner: &str) -> Result<Vec<String>, BracketError> {
    let scan = splitter::scan(inner)?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(scan
        .split_top_level(',', 0..inner.len())
        .into_iter()
        .map(|range| inner[range].trim().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interior() {
        assert!(split_arguments("").unwrap().is_empty());
        assert!(split_arguments("   ").unwrap().is_empty());
    }

    #[test]
    fn test_simple_arguments() {
        assert_eq!(split_arguments("arg1").unwrap(), vec!["arg1"]);
        assert_eq!(split_arguments("arg1, arg2").unwrap(), vec!["arg1", "arg2"]);
        assert_eq!(split_arguments("arg1,arg2").unwrap(), vec!["arg1", "arg2"]);
    }

    #[test]
    fn test_generic_arguments_stay_whole() {
        assert_eq!(split_arguments("<T>, <T>").unwrap(), vec!["<T>", "<T>"]);
        assert_eq!(
            split_arguments("<T<A>>, <T<B>>").unwrap(),
            vec!["<T<A>>", "<T<B>>"]
        );
        assert_eq!(
            split_arguments("System.Collections.Generic.Dictionary<K, V>, System.Int32[,]").unwrap(),
            vec!["System.Collections.Generic.Dictionary<K, V>", "System.Int32[,]"]
        );
    }

    #[test]
    fn test_nested_parens_and_braces() {
        assert_eq!(
            split_arguments("System.Func{{TUser},System.Boolean}, (a, b)").unwrap(),
            vec!["System.Func{{TUser},System.Boolean}", "(a, b)"]
        );
    }

    #[test]
    fn test_blank_entry_is_reported_as_empty() {
        assert_eq!(split_arguments("a,,b").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_unbalanced() {
        assert!(split_arguments("List<T").is_err());
    }
}
