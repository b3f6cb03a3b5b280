//! Enrichment configuration
//!
//! Names which call to recognize and how the resulting suffix line is rendered. The
//! defaults describe the terraform `stringvalidator.OneOf` validator and the
//! `Possible values: ` label; a configuration file only needs the fields it changes.
//!
//! Configurations load from JSON or YAML. [load_document] is shared with other callers
//! that read JSON or YAML documents by file extension.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_PACKAGE: &str = "stringvalidator";
pub const DEFAULT_FUNCTION: &str = "OneOf";
pub const DEFAULT_LABEL: &str = "Possible values: ";
pub const DEFAULT_DELIMITER: char = '`';

static DEFAULT_CONFIG: Lazy<EnrichConfig> = Lazy::new(EnrichConfig::default);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrichConfig {
    /// Package identifier of the recognized call
    pub package: String,
    /// Function identifier of the recognized call
    pub function: String,
    /// Text placed before the value list
    pub label: String,
    /// Character wrapping each rendered value
    pub delimiter: char,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        EnrichConfig {
            package: DEFAULT_PACKAGE.to_string(),
            function: DEFAULT_FUNCTION.to_string(),
            label: DEFAULT_LABEL.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Errors that can occur while loading configuration or input documents
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse { format: &'static str, message: String },
    UnsupportedExtension(String),
    InvalidValue { field: &'static str, reason: String },
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => write!(f, "Cannot read {}: {}", path, message),
            ConfigError::Parse { format, message } => {
                write!(f, "Invalid {} document: {}", format, message)
            }
            ConfigError::UnsupportedExtension(path) => write!(
                f,
                "Unsupported file type: {} (expected .json, .yaml or .yml)",
                path
            ),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl EnrichConfig {
    /// The shared default configuration
    pub fn global() -> &'static EnrichConfig {
        &DEFAULT_CONFIG
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: EnrichConfig = parse_json(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EnrichConfig = parse_yaml(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: EnrichConfig = load_document(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that package and function are identifiers and the delimiter is visible
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_identifier("package", &self.package)?;
        check_identifier("function", &self.function)?;
        if self.delimiter.is_whitespace() || self.delimiter.is_control() {
            return Err(ConfigError::InvalidValue {
                field: "delimiter",
                reason: format!("{:?} is not a visible character", self.delimiter),
            });
        }
        Ok(())
    }
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first == '_' || first.is_alphabetic())
                && chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{:?} is not an identifier", value),
        })
    }
}

fn parse_json<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    serde_json::from_str(source).map_err(|e| ConfigError::Parse {
        format: "JSON",
        message: e.to_string(),
    })
}

fn parse_yaml<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
        format: "YAML",
        message: e.to_string(),
    })
}

/// Read and deserialize a JSON or YAML file, choosing the format by extension
pub fn load_document<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parse: fn(&str) -> Result<T, ConfigError> = match extension.as_deref() {
        Some("json") => parse_json::<T>,
        Some("yaml") | Some("yml") => parse_yaml::<T>,
        _ => return Err(ConfigError::UnsupportedExtension(display)),
    };

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: display,
        message: e.to_string(),
    })?;
    parse(&content)
}
