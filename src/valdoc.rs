//! Main module for valdoc library functionality
//!
//! Pipeline per fragment: [scanner] finds the `stringvalidator.OneOf(...)` call sites,
//! [extract] splits each argument list (tokenized by [lexer]) and decodes the string
//! literals with [unquote], [compose] renders the suffix line and [description] appends
//! it. [enrich] drives the whole pass for a [config] choice.

pub mod compose;
pub mod config;
pub mod description;
pub mod enrich;
pub mod extract;
pub mod lexer;
pub mod request;
pub mod scanner;
pub mod unquote;

pub use config::{ConfigError, EnrichConfig};
pub use description::{Description, ValidatorFragment};
pub use enrich::Enricher;
pub use extract::ExtractedValueSet;
pub use request::EnrichRequest;
