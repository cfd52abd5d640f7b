//! Configuration types for the credential codec

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Limits applied when decoding JSON text
///
/// Deserializes from a partial document; absent keys take their defaults.
///
/// ```
/// use mailbox_credentials::CodecConfig;
///
/// let config: CodecConfig = serde_json::from_str(r#"{ "max_records": 8 }"#)?;
/// assert_eq!(config.max_records, 8);
/// assert_eq!(config.max_payload_bytes, CodecConfig::default().max_payload_bytes);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum size of a JSON input in bytes, checked before parsing
    pub max_payload_bytes: usize,

    /// Maximum number of records in a list payload
    pub max_records: usize,
}

impl CodecConfig {
    /// Default input size limit (64 KiB)
    pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 64 * 1024;

    /// Default record count limit
    pub const DEFAULT_MAX_RECORDS: usize = 64;

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_payload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_payload_bytes",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_records == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_records",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: Self::DEFAULT_MAX_PAYLOAD_BYTES,
            max_records: Self::DEFAULT_MAX_RECORDS,
        }
    }
}
