//! Value extraction from a recognized call's argument text
//!
//! The argument text is split into top-level arguments on commas at bracket depth zero.
//! An argument contributes a value only when it is exactly one string literal; an
//! expression like `"a" + "b"` or `fmt.Sprint("a")` is skipped as a whole, literals inside
//! it included. Values that fail to decode are dropped without affecting their siblings.

use crate::valdoc::lexer::{tokenize_with_spans, ArgToken, Lexeme};
use crate::valdoc::unquote::unquote;

/// Decoded values of one call, in argument order. Duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedValueSet {
    values: Vec<String>,
}

impl ExtractedValueSet {
    pub fn new(values: Vec<String>) -> Self {
        ExtractedValueSet { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExtractedValueSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Split argument text into top-level arguments. An empty list or a trailing comma adds
/// no argument; the scanner has already rejected empty arguments anywhere else.
pub fn split_arguments(arguments: &str) -> Vec<Vec<Lexeme>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;

    for lexeme in tokenize_with_spans(arguments) {
        match lexeme.token {
            Some(token) if token.opens() => depth += 1,
            Some(token) if token.closes() => depth = depth.saturating_sub(1),
            Some(ArgToken::Comma) if depth == 0 => {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                continue;
            }
            _ => {}
        }
        current.push(lexeme);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Extract the decoded string values from argument text
pub fn extract_values(arguments: &str) -> ExtractedValueSet {
    let mut values = Vec::new();

    for argument in split_arguments(arguments) {
        let literal = match argument.as_slice() {
            [Lexeme {
                token: Some(token),
                span,
            }] if token.is_string() => &arguments[span.clone()],
            _ => {
                let start = argument.first().map_or(0, |l| l.span.start);
                let end = argument.last().map_or(start, |l| l.span.end);
                tracing::trace!(argument = &arguments[start..end], "skipping non-literal argument");
                continue;
            }
        };

        match unquote(literal) {
            Ok(value) => values.push(value),
            Err(err) => {
                tracing::debug!(literal, error = %err, "skipping undecodable literal");
            }
        }
    }

    ExtractedValueSet::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(arguments: &str) -> Vec<String> {
        extract_values(arguments).values().to_vec()
    }

    #[test]
    fn test_simple_values() {
        assert_eq!(values(r#""a", "b""#), vec!["a", "b"]);
    }

    #[test]
    fn test_comma_inside_quotes() {
        assert_eq!(values(r#""a,b", "c""#), vec!["a,b", "c"]);
    }

    #[test]
    fn test_trailing_comma_and_newlines() {
        assert_eq!(values("\n\"val1\",\n\"val2\",\n"), vec!["val1", "val2"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(values(r#""a", "a""#), vec!["a", "a"]);
    }

    #[test]
    fn test_non_string_arguments_skipped() {
        assert_eq!(values(r#"1, "a", foo, 'x', "b""#), vec!["a", "b"]);
    }

    #[test]
    fn test_compound_arguments_skipped() {
        assert_eq!(values(r#""a" + "b", "c""#), vec!["c"]);
        assert_eq!(values(r#"fmt.Sprint("a", "b"), "c""#), vec!["c"]);
        assert_eq!(values(r#"[]string{"a", "b"}..., "c""#), vec!["c"]);
    }

    #[test]
    fn test_undecodable_literal_does_not_abort() {
        assert_eq!(values(r#""ok", "\q", "fine""#), vec!["ok", "fine"]);
    }

    #[test]
    fn test_escapes_and_raw_strings() {
        assert_eq!(
            values(r#""say \"hi\"", `C:\dir`"#),
            vec!["say \"hi\"", r"C:\dir"]
        );
    }

    #[test]
    fn test_empty_arguments() {
        assert!(extract_values("").is_empty());
        assert!(extract_values("  ").is_empty());
        assert!(split_arguments(",").is_empty());
    }

    #[test]
    fn test_split_counts_top_level_only() {
        let groups = split_arguments(r#"f(a, b), [1, 2], {x, y}, "c""#);
        assert_eq!(groups.len(), 4);
    }
}
