//! Enrichment driver
//!
//! An [Enricher] ties the pieces together for one configuration: it recognizes calls in
//! each fragment, extracts their values, composes a suffix line per non-empty value set
//! and hands the lines to the [Description] in fragment order.
//!
//! Nothing here can fail. A fragment that is empty, malformed or unrelated contributes
//! no lines and leaves the description as it was.

use crate::valdoc::compose::compose_suffix;
use crate::valdoc::config::EnrichConfig;
use crate::valdoc::description::Description;
use crate::valdoc::extract::{extract_values, ExtractedValueSet};
use crate::valdoc::scanner::{find_calls, CallMatch};
use once_cell::sync::Lazy;

static STANDARD: Lazy<Enricher> = Lazy::new(|| Enricher::new(EnrichConfig::global().clone()));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enricher {
    config: EnrichConfig,
}

impl Enricher {
    pub fn new(config: EnrichConfig) -> Self {
        Enricher { config }
    }

    /// Enricher for `stringvalidator.OneOf` with the default rendering
    pub fn standard() -> &'static Enricher {
        &STANDARD
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Locate the configured call in one fragment
    pub fn recognize<'s>(&self, source: &'s str) -> Vec<CallMatch<'s>> {
        find_calls(source, &self.config.package, &self.config.function)
    }

    /// Decoded values of every recognized call in a fragment, one set per call
    pub fn value_sets(&self, source: &str) -> Vec<ExtractedValueSet> {
        self.recognize(source)
            .iter()
            .map(|call| extract_values(call.arguments))
            .collect()
    }

    /// Suffix lines contributed by one fragment, in call order
    pub fn suffix_lines(&self, source: &str) -> Vec<String> {
        if source.is_empty() {
            return Vec::new();
        }
        self.value_sets(source)
            .iter()
            .filter_map(|values| compose_suffix(values, &self.config))
            .collect()
    }

    /// Append the suffix lines of every fragment to `description`
    pub fn enrich<I>(&self, description: &mut Description, fragments: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for fragment in fragments {
            let source = fragment.as_ref();
            let lines = self.suffix_lines(source);
            if lines.is_empty() {
                tracing::trace!(fragment = source, "fragment contributes no values");
                continue;
            }
            for line in lines {
                if !description.append_line(&line) {
                    tracing::debug!(line = %line, "suffix already present");
                }
            }
        }
    }
}
