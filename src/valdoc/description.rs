//! Description text and validator fragments
//!
//! A [Description] is the owned, optional text of one schema attribute. Enrichment only
//! ever appends: each new line is separated from existing text by a single newline, and a
//! line is skipped when the text already holds exactly that line. Running enrichment again
//! over the same fragments therefore leaves the text unchanged.
//!
//! Line identity is whole-line equality, not substring containment. A new
//! `Possible values: `a`` is still appended after `Possible values: `a`, `b``, while a
//! second fragment rendering a line that is already present adds nothing.

use crate::valdoc::enrich::Enricher;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description {
    text: Option<String>,
}

impl Description {
    pub fn new(text: Option<String>) -> Self {
        Description { text }
    }

    /// Description with no text at all
    pub fn empty() -> Self {
        Description { text: None }
    }

    /// Current text, empty when none was ever set
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn as_option(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Check whether `line` already occupies whole lines of the text
    pub fn contains_line(&self, line: &str) -> bool {
        let text = self.text();
        if line.is_empty() {
            return false;
        }
        text.match_indices(line).any(|(start, _)| {
            let end = start + line.len();
            let starts_line = start == 0 || text.as_bytes()[start - 1] == b'\n';
            let ends_line = end == text.len() || text.as_bytes()[end] == b'\n';
            starts_line && ends_line
        })
    }

    /// Append `line`, newline-separated. Returns false when the line was already present
    /// or is empty.
    pub fn append_line(&mut self, line: &str) -> bool {
        if line.is_empty() || self.contains_line(line) {
            return false;
        }
        let text = self.text.get_or_insert_with(String::new);
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
        true
    }

    /// Enrich in place with the standard `stringvalidator.OneOf` enricher
    pub fn append_validators<I>(&mut self, fragments: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Enricher::standard().enrich(self, fragments);
    }

    /// Enrich in place with a specific enricher
    pub fn append_validators_with<I>(&mut self, enricher: &Enricher, fragments: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        enricher.enrich(self, fragments);
    }

    /// Builder form of [Description::append_validators]
    pub fn with_validators<I>(mut self, fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.append_validators(fragments);
        self
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::new(Some(text.to_string()))
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::new(Some(text))
    }
}

impl From<Option<String>> for Description {
    fn from(text: Option<String>) -> Self {
        Description::new(text)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Source text of one custom validator, e.g. `stringvalidator.OneOf("a", "b")`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorFragment {
    #[serde(alias = "source_text")]
    pub schema_definition: String,
}

impl ValidatorFragment {
    pub fn new(schema_definition: impl Into<String>) -> Self {
        ValidatorFragment {
            schema_definition: schema_definition.into(),
        }
    }

    pub fn source_text(&self) -> &str {
        &self.schema_definition
    }
}

impl AsRef<str> for ValidatorFragment {
    fn as_ref(&self) -> &str {
        &self.schema_definition
    }
}

impl From<&str> for ValidatorFragment {
    fn from(source: &str) -> Self {
        ValidatorFragment::new(source)
    }
}

impl From<String> for ValidatorFragment {
    fn from(source: String) -> Self {
        ValidatorFragment::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_text() {
        assert_eq!(Description::empty().text(), "");
        assert_eq!(Description::empty().as_option(), None);
        assert!(Description::from("").is_empty());
    }

    #[test]
    fn test_append_to_empty() {
        let mut description = Description::empty();
        assert!(description.append_line("first"));
        assert_eq!(description.as_option(), Some("first"));
    }

    #[test]
    fn test_append_separates_with_newline() {
        let mut description = Description::from("Desc");
        description.append_line("first");
        description.append_line("second");
        assert_eq!(description.text(), "Desc\nfirst\nsecond");
    }

    #[test]
    fn test_append_to_empty_string_adds_no_newline() {
        let mut description = Description::from(String::new());
        description.append_line("line");
        assert_eq!(description.text(), "line");
    }

    #[test]
    fn test_duplicate_line_skipped() {
        let mut description = Description::from("Desc");
        assert!(description.append_line("line"));
        assert!(!description.append_line("line"));
        assert_eq!(description.text(), "Desc\nline");
    }

    #[test]
    fn test_prefix_of_existing_line_is_appended() {
        let mut description = Description::from("Possible values: `a`, `b`");
        assert!(description.append_line("Possible values: `a`"));
        assert_eq!(
            description.text(),
            "Possible values: `a`, `b`\nPossible values: `a`"
        );
    }

    #[test]
    fn test_line_embedded_in_prose_is_appended() {
        let mut description = Description::from("See Possible values: `a` below");
        assert!(description.append_line("Possible values: `a`"));
    }

    #[test]
    fn test_contains_multiline_block() {
        let description = Description::from("Desc\nPossible values: `a\nb`\nTail");
        assert!(description.contains_line("Possible values: `a\nb`"));
        assert!(!description.contains_line("values: `a\nb`"));
    }

    #[test]
    fn test_empty_line_not_appended() {
        let mut description = Description::from("Desc");
        assert!(!description.append_line(""));
        assert_eq!(description.text(), "Desc");
    }

    #[test]
    fn test_builder_form() {
        let description = Description::from("Desc")
            .with_validators([ValidatorFragment::new(r#"stringvalidator.OneOf("a")"#)]);
        assert_eq!(description.to_string(), "Desc\nPossible values: `a`");
    }

    #[test]
    fn test_fragment_serde_names() {
        let fragment: ValidatorFragment =
            serde_json::from_str(r#"{"schema_definition": "x.Y()"}"#).unwrap();
        assert_eq!(fragment.source_text(), "x.Y()");
        let fragment: ValidatorFragment =
            serde_json::from_str(r#"{"source_text": "x.Z()"}"#).unwrap();
        assert_eq!(fragment.source_text(), "x.Z()");
    }

    #[test]
    fn test_description_serializes_transparently() {
        assert_eq!(
            serde_json::to_string(&Description::from("a")).unwrap(),
            r#""a""#
        );
        assert_eq!(
            serde_json::to_string(&Description::empty()).unwrap(),
            "null"
        );
    }
}
