//! Error types for credential records
//!
//! This module defines a small error hierarchy:
//! - [`CredentialError`]: Top-level error wrapping the categories below
//! - [`DecodeError`]: A mapping or payload could not be turned into records
//! - [`ConstructionError`]: A record was built without one of its fields
//! - [`ConfigError`]: Codec configuration is out of range
//!
//! Messages name fields and JSON types, never field values.
//!
//! # Error Conversion Examples
//!
//! ```
//! use mailbox_credentials::{CredentialError, CredentialField, DecodeError};
//!
//! let decode_err = DecodeError::MissingField {
//!     field: CredentialField::AccessToken,
//! };
//! let cred_err: CredentialError = decode_err.into();
//! assert!(cred_err.to_string().starts_with("Stored credentials are invalid or missing"));
//! ```

use crate::core::CredentialField;
use serde_json::Value;
use thiserror::Error;

/// Top-level credential error
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Stored or transmitted credentials could not be decoded
    #[error("Stored credentials are invalid or missing: {source}")]
    Decode {
        /// Underlying decode error
        #[from]
        source: DecodeError,
    },

    /// Record construction error
    #[error("Construction error: {source}")]
    Construction {
        /// Underlying construction error
        #[from]
        source: ConstructionError,
    },

    /// Configuration error
    #[error("Configuration error: {source}")]
    Config {
        /// Underlying configuration error
        #[from]
        source: ConfigError,
    },
}

/// Decoding errors
///
/// Raised when a mapping or a JSON payload does not describe a complete
/// credential record. Decoding never falls back to default values.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input value is not a JSON object
    #[error("Expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type of the input
        found: &'static str,
    },

    /// Required key is absent
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Absent field
        field: CredentialField,
    },

    /// Key is present but does not hold a string
    #[error("Field '{field}' must be a string, found {found}")]
    WrongType {
        /// Offending field
        field: CredentialField,
        /// JSON type actually found
        found: &'static str,
    },

    /// Input text is not valid JSON
    #[error("Malformed JSON: {source}")]
    Malformed {
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Input text exceeds the configured size limit
    #[error("Payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge {
        /// Input size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// List payload is not a JSON array
    #[error("Expected a JSON array, found {found}")]
    NotAnArray {
        /// JSON type of the input
        found: &'static str,
    },

    /// List payload holds more records than allowed
    #[error("Payload holds {count} records, limit is {limit}")]
    TooManyRecords {
        /// Number of elements in the array
        count: usize,
        /// Configured limit
        limit: usize,
    },

    /// One element of a list payload failed to decode
    #[error("Invalid credential record at index {index}: {source}")]
    InvalidEntry {
        /// Position in the array
        index: usize,
        /// Error for that element
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Field this error is about, if any
    ///
    /// Looks through [`DecodeError::InvalidEntry`] to the element error.
    pub fn field(&self) -> Option<CredentialField> {
        match self {
            Self::MissingField { field } | Self::WrongType { field, .. } => Some(*field),
            Self::InvalidEntry { source, .. } => source.field(),
            _ => None,
        }
    }
}

/// Construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A required field was never supplied
    #[error("Required field '{field}' was not provided")]
    MissingField {
        /// Absent field
        field: CredentialField,
    },
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field}: {reason}")]
    InvalidValue {
        /// Configuration key
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type alias for credential operations
pub type Result<T> = std::result::Result<T, CredentialError>;

/// Name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
