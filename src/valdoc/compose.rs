//! Rendering of extracted values into a suffix line
//!
//! Each value becomes an inline code span. The usual span is the value between single
//! delimiters; a value that contains the delimiter gets a fence one longer than its
//! longest delimiter run, padded with a space on each side, so the span still closes
//! where intended (`` `` a`b `` ``).
//!
//! Control characters are written as escapes (`\n`, `\t`, `\u{7f}`) so a suffix is
//! always a single line.

use crate::valdoc::config::EnrichConfig;
use crate::valdoc::extract::ExtractedValueSet;

const SEPARATOR: &str = ", ";

fn escape_controls(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render one value as an inline code span fenced by `delimiter`
pub fn render_value(value: &str, delimiter: char) -> String {
    let value = escape_controls(value);
    let mut longest = 0;
    let mut run = 0;
    for c in value.chars() {
        if c == delimiter {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let fence: String = std::iter::repeat(delimiter).take(longest + 1).collect();
    if longest == 0 {
        format!("{fence}{value}{fence}")
    } else {
        format!("{fence} {value} {fence}")
    }
}

/// Build the suffix line for a value set, or None when there is nothing to list
pub fn compose_suffix(values: &ExtractedValueSet, config: &EnrichConfig) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    let mut rendered = Vec::new();
    for value in values {
        rendered.push(render_value(value, config.delimiter));
    }
    let rendered = rendered.join(SEPARATOR);

    Some(format!("{}{}", config.label, rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> ExtractedValueSet {
        ExtractedValueSet::new(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_render_plain_value() {
        assert_eq!(render_value("foo", '`'), "`foo`");
        assert_eq!(render_value("", '`'), "``");
    }

    #[test]
    fn test_render_value_containing_delimiter() {
        assert_eq!(render_value("a`b", '`'), "`` a`b ``");
        assert_eq!(render_value("``x`", '`'), "``` ``x` ```");
        assert_eq!(render_value("`", '`'), "`` ` ``");
    }

    #[test]
    fn test_render_escapes_control_characters() {
        assert_eq!(render_value("a\nb", '`'), "`a\\nb`");
        assert_eq!(render_value("tab\there\r", '`'), "`tab\\there\\r`");
        assert_eq!(render_value("bell\u{7}", '`'), "`bell\\u{7}`");
    }

    #[test]
    fn test_compose_suffix_is_single_line() {
        let suffix = compose_suffix(&set(&["a\nb", "c"]), &EnrichConfig::default()).unwrap();
        assert_eq!(suffix, "Possible values: `a\\nb`, `c`");
        assert!(!suffix.contains('\n'));
    }

    #[test]
    fn test_render_with_other_delimiter() {
        assert_eq!(render_value("it's", '\''), "'' it's ''");
        assert_eq!(render_value("a`b", '\''), "'a`b'");
    }

    #[test]
    fn test_compose_suffix() {
        let config = EnrichConfig::default();
        assert_eq!(
            compose_suffix(&set(&["a", "b"]), &config),
            Some("Possible values: `a`, `b`".to_string())
        );
    }

    #[test]
    fn test_compose_preserves_order_and_duplicates() {
        let config = EnrichConfig::default();
        assert_eq!(
            compose_suffix(&set(&["z", "a", "z"]), &config),
            Some("Possible values: `z`, `a`, `z`".to_string())
        );
    }

    #[test]
    fn test_compose_empty_set() {
        assert_eq!(compose_suffix(&set(&[]), &EnrichConfig::default()), None);
    }

    #[test]
    fn test_compose_custom_label() {
        let config = EnrichConfig {
            label: "One of: ".to_string(),
            ..EnrichConfig::default()
        };
        assert_eq!(
            compose_suffix(&set(&["x"]), &config),
            Some("One of: `x`".to_string())
        );
    }
}
