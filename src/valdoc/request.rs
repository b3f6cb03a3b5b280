//! Batch input documents
//!
//! A request carries one attribute's description together with its custom validators,
//! in the shape code generators already emit:
//!
//! ```text
//! description: The mode.
//! validators:
//!   - schema_definition: stringvalidator.OneOf("fast", "safe")
//! ```

use crate::valdoc::config::{load_document, ConfigError};
use crate::valdoc::description::{Description, ValidatorFragment};
use crate::valdoc::enrich::Enricher;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrichRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub validators: Vec<ValidatorFragment>,
}

impl EnrichRequest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_document(path)
    }

    /// Produce the enriched description for this request
    pub fn enrich(&self, enricher: &Enricher) -> Description {
        let mut description = Description::new(self.description.clone());
        enricher.enrich(&mut description, &self.validators);
        description
    }
}
