//! JSON text codec for credential records
//!
//! A secure-storage layer persists every stored account as one JSON array:
//!
//! ```json
//! [
//!   { "mailAddress": "a@b.com", "encryptedPassword": "…", "accessToken": "…", "userId": "…" }
//! ]
//! ```
//!
//! [`CredentialCodec`] turns records into that text and back. It only handles
//! the format; finding, replacing or removing accounts is up to the caller.

use serde_json::Value;

use crate::codec::CodecConfig;
use crate::core::{ConfigError, CredentialRecord, DecodeError, json_type_name};

/// Encoder/decoder between records and JSON text
#[derive(Debug, Clone, Default)]
pub struct CredentialCodec {
    config: CodecConfig,
}

impl CredentialCodec {
    /// Create a codec with validated limits
    pub fn new(config: CodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes one record as a JSON object string
    pub fn encode_json(&self, record: &CredentialRecord) -> String {
        record.to_value().to_string()
    }

    /// Decodes one record from a JSON object string
    pub fn decode_json(&self, input: &str) -> Result<CredentialRecord, DecodeError> {
        let value = self.parse(input)?;
        let record = CredentialRecord::decode_value(&value)?;
        tracing::trace!(bytes = input.len(), "decoded credential record");
        Ok(record)
    }

    /// Encodes records as a JSON array string
    pub fn encode_json_list(&self, records: &[CredentialRecord]) -> String {
        let array: Vec<Value> = records.iter().map(CredentialRecord::to_value).collect();
        tracing::trace!(count = records.len(), "encoded credential records");
        Value::Array(array).to_string()
    }

    /// Decodes records from a JSON array string
    ///
    /// Either every element decodes or the whole call fails with
    /// [`DecodeError::InvalidEntry`] for the first bad element.
    pub fn decode_json_list(&self, input: &str) -> Result<Vec<CredentialRecord>, DecodeError> {
        let elements = match self.parse(input)? {
            Value::Array(elements) => elements,
            other => {
                let found = json_type_name(&other);
                tracing::debug!(found, "credential payload is not a JSON array");
                return Err(DecodeError::NotAnArray { found });
            }
        };

        if elements.len() > self.config.max_records {
            tracing::debug!(
                count = elements.len(),
                limit = self.config.max_records,
                "credential payload holds too many records"
            );
            return Err(DecodeError::TooManyRecords {
                count: elements.len(),
                limit: self.config.max_records,
            });
        }

        let records = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                CredentialRecord::decode_value(element).map_err(|source| {
                    DecodeError::InvalidEntry {
                        index,
                        source: Box::new(source),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(count = records.len(), "decoded credential records");
        Ok(records)
    }

    fn parse(&self, input: &str) -> Result<Value, DecodeError> {
        if input.len() > self.config.max_payload_bytes {
            tracing::debug!(
                size = input.len(),
                limit = self.config.max_payload_bytes,
                "credential payload too large"
            );
            return Err(DecodeError::PayloadTooLarge {
                size: input.len(),
                limit: self.config.max_payload_bytes,
            });
        }

        serde_json::from_str(input).map_err(|source| {
            tracing::debug!(error = %source, "credential payload is not valid JSON");
            DecodeError::Malformed { source }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(n: u32) -> CredentialRecord {
        CredentialRecord::new(
            format!("user{n}@b.com"),
            format!("enc{n}"),
            format!("tok{n}"),
            format!("id{n}"),
        )
    }

    #[test]
    fn test_single_record_text_roundtrip() {
        let codec = CredentialCodec::default();
        let text = codec.encode_json(&record(1));
        assert_eq!(codec.decode_json(&text).unwrap(), record(1));
    }

    #[test]
    fn test_list_preserves_order() {
        let codec = CredentialCodec::default();
        let records = vec![record(1), record(2), record(3)];
        let text = codec.encode_json_list(&records);
        assert_eq!(codec.decode_json_list(&text).unwrap(), records);
    }

    #[test]
    fn test_empty_list() {
        let codec = CredentialCodec::default();
        assert_eq!(codec.encode_json_list(&[]), "[]");
        assert!(codec.decode_json_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let codec = CredentialCodec::default();
        let err = codec.decode_json("{\"mailAddress\":").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
    }

    #[test]
    fn test_payload_size_checked_before_parsing() {
        let codec = CredentialCodec::new(CodecConfig {
            max_payload_bytes: 8,
            ..CodecConfig::default()
        })
        .unwrap();
        let input = "not json and too long";
        let err = codec.decode_json(input).unwrap_err();
        match err {
            DecodeError::PayloadTooLarge { size, limit } => {
                assert_eq!(size, input.len());
                assert_eq!(limit, 8);
            }
            other => panic!("Expected PayloadTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = CredentialCodec::new(CodecConfig {
            max_records: 0,
            ..CodecConfig::default()
        });
        assert!(result.is_err());
    }
}
