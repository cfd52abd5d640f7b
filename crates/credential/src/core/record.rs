//! Credential record value type
//!
//! [`CredentialRecord`] holds the four strings a client keeps after a
//! successful login and converts them losslessly to and from a JSON object:
//!
//! ```json
//! {
//!   "mailAddress": "a@b.com",
//!   "encryptedPassword": "enc123",
//!   "accessToken": "tok456",
//!   "userId": "user789"
//! }
//! ```
//!
//! All four values are opaque to this crate. Nothing here validates the mail
//! address, decrypts the password or inspects the token.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::core::builder::CredentialRecordBuilder;
use crate::core::error::json_type_name;
use crate::core::{CredentialField, DecodeError, SecureString};

/// Stored login credentials for one account
///
/// Immutable once constructed: fields are private and only readable. A
/// changed credential is a new record, see [`with_access_token`] and
/// [`with_encrypted_password`].
///
/// Equality compares all four fields; the two secret fields are compared in
/// constant time.
///
/// [`with_access_token`]: CredentialRecord::with_access_token
/// [`with_encrypted_password`]: CredentialRecord::with_encrypted_password
///
/// # Examples
///
/// ```
/// use mailbox_credentials::CredentialRecord;
///
/// let record = CredentialRecord::new("a@b.com", "enc123", "tok456", "user789");
/// let map = record.encode();
/// assert_eq!(map["accessToken"], "tok456");
///
/// let decoded = CredentialRecord::decode(&map)?;
/// assert_eq!(decoded, record);
/// # Ok::<(), mailbox_credentials::DecodeError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    mail_address: String,
    encrypted_password: SecureString,
    access_token: SecureString,
    user_id: String,
}

impl CredentialRecord {
    /// Creates a record from its four fields
    pub fn new(
        mail_address: impl Into<String>,
        encrypted_password: impl Into<String>,
        access_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            mail_address: mail_address.into(),
            encrypted_password: SecureString::new(encrypted_password),
            access_token: SecureString::new(access_token),
            user_id: user_id.into(),
        }
    }

    pub(crate) fn from_parts(
        mail_address: String,
        encrypted_password: SecureString,
        access_token: SecureString,
        user_id: String,
    ) -> Self {
        Self {
            mail_address,
            encrypted_password,
            access_token,
            user_id,
        }
    }

    /// Starts a staged construction
    ///
    /// Useful when the fields arrive from different collaborators. A field
    /// that is never set makes [`CredentialRecordBuilder::build`] fail.
    pub fn builder() -> CredentialRecordBuilder {
        CredentialRecordBuilder::default()
    }

    /// Account mail address
    pub fn mail_address(&self) -> &str {
        &self.mail_address
    }

    /// Password ciphertext produced by the external encryption layer
    pub fn encrypted_password(&self) -> &SecureString {
        &self.encrypted_password
    }

    /// Bearer token issued by the authentication service
    pub fn access_token(&self) -> &SecureString {
        &self.access_token
    }

    /// Identity service user id
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Raw value of one field
    ///
    /// Exposes secret fields, so keep the result out of logs.
    pub fn field_value(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::MailAddress => &self.mail_address,
            CredentialField::EncryptedPassword => self.encrypted_password.expose(),
            CredentialField::AccessToken => self.access_token.expose(),
            CredentialField::UserId => &self.user_id,
        }
    }

    /// Whether this is an internal (full mailbox) account
    ///
    /// Internal accounts have an `@` somewhere after the first character of
    /// the mail address. External recipients log in with other identifiers.
    /// This is a classification, not address validation.
    pub fn is_internal(&self) -> bool {
        self.mail_address.find('@').is_some_and(|idx| idx > 0)
    }

    /// New record with the access token replaced
    pub fn with_access_token(self, access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecureString::new(access_token),
            ..self
        }
    }

    /// New record with the encrypted password replaced
    pub fn with_encrypted_password(self, encrypted_password: impl Into<String>) -> Self {
        Self {
            encrypted_password: SecureString::new(encrypted_password),
            ..self
        }
    }

    /// Encodes the record as a JSON object with exactly the four wire keys
    pub fn encode(&self) -> Map<String, Value> {
        CredentialField::ALL
            .into_iter()
            .map(|field| {
                (
                    field.key().to_owned(),
                    Value::String(self.field_value(field).to_owned()),
                )
            })
            .collect()
    }

    /// Encodes the record as a [`Value::Object`]
    pub fn to_value(&self) -> Value {
        Value::Object(self.encode())
    }

    /// Decodes a record from a JSON object
    ///
    /// Every wire key must be present and hold a string. Unknown keys are
    /// ignored. Missing or mistyped fields are reported, never defaulted.
    pub fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            mail_address: required_str(map, CredentialField::MailAddress)?.to_owned(),
            encrypted_password: SecureString::new(required_str(
                map,
                CredentialField::EncryptedPassword,
            )?),
            access_token: SecureString::new(required_str(map, CredentialField::AccessToken)?),
            user_id: required_str(map, CredentialField::UserId)?.to_owned(),
        })
    }

    /// Decodes a record from any JSON value, which must be an object
    pub fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Self::decode(map),
            other => {
                let found = json_type_name(other);
                tracing::debug!(found, "credential record is not a JSON object");
                Err(DecodeError::NotAnObject { found })
            }
        }
    }
}

fn required_str(map: &Map<String, Value>, field: CredentialField) -> Result<&str, DecodeError> {
    match map.get(field.key()) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => {
            let found = json_type_name(other);
            tracing::debug!(%field, found, "credential field has wrong type");
            Err(DecodeError::WrongType { field, found })
        }
        None => {
            tracing::debug!(%field, "credential field missing");
            Err(DecodeError::MissingField { field })
        }
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("mail_address", &self.mail_address)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&Map<String, Value>> for CredentialRecord {
    type Error = DecodeError;

    fn try_from(map: &Map<String, Value>) -> Result<Self, Self::Error> {
        Self::decode(map)
    }
}

impl TryFrom<&Value> for CredentialRecord {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::decode_value(value)
    }
}

impl From<&CredentialRecord> for Value {
    fn from(record: &CredentialRecord) -> Self {
        record.to_value()
    }
}

// Serialized with the real secret values: this is the storage/transport form.
impl Serialize for CredentialRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(CredentialField::ALL.len()))?;
        for field in CredentialField::ALL {
            map.serialize_entry(field.key(), self.field_value(field))?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    mail_address: String,
    encrypted_password: String,
    access_token: String,
    user_id: String,
}

impl<'de> Deserialize<'de> for CredentialRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireRecord::deserialize(deserializer)?;
        Ok(Self::new(
            wire.mail_address,
            wire.encrypted_password,
            wire.access_token,
            wire.user_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> CredentialRecord {
        CredentialRecord::new("a@b.com", "enc123", "tok456", "user789")
    }

    #[test]
    fn test_encode_has_four_string_keys() {
        let value = sample().to_value();
        assert_eq!(
            value,
            json!({
                "mailAddress": "a@b.com",
                "encryptedPassword": "enc123",
                "accessToken": "tok456",
                "userId": "user789",
            })
        );
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let value = json!({
            "mailAddress": "a@b.com",
            "encryptedPassword": "enc123",
            "accessToken": "tok456",
            "userId": "user789",
            "theme": "dark",
        });
        assert_eq!(CredentialRecord::decode_value(&value).unwrap(), sample());
    }

    #[test]
    fn test_decode_reports_first_missing_field() {
        let value = json!({ "userId": "user789" });
        let err = CredentialRecord::decode_value(&value).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField {
                field: CredentialField::MailAddress
            }
        ));
    }

    #[test]
    fn test_decode_rejects_null_field() {
        let value = json!({
            "mailAddress": "a@b.com",
            "encryptedPassword": "enc123",
            "accessToken": null,
            "userId": "user789",
        });
        let err = CredentialRecord::decode_value(&value).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::WrongType {
                field: CredentialField::AccessToken,
                found: "null"
            }
        ));
    }

    #[test]
    fn test_decode_value_rejects_non_object() {
        let err = CredentialRecord::decode_value(&json!(["a@b.com"])).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("a@b.com"));
        assert!(debug.contains("user789"));
        assert!(!debug.contains("enc123"));
        assert!(!debug.contains("tok456"));
    }

    #[test]
    fn test_accessors() {
        let record = sample();
        assert_eq!(record.mail_address(), "a@b.com");
        assert_eq!(record.encrypted_password().expose(), "enc123");
        assert_eq!(record.access_token().expose(), "tok456");
        assert_eq!(record.user_id(), "user789");
    }

    #[test]
    fn test_with_access_token_builds_new_record() {
        let original = sample();
        let refreshed = original.clone().with_access_token("tok999");

        assert_eq!(original.access_token().expose(), "tok456");
        assert_eq!(refreshed.access_token().expose(), "tok999");
        assert_eq!(refreshed.mail_address(), original.mail_address());
        assert_ne!(refreshed, original);
    }

    #[test]
    fn test_with_encrypted_password_builds_new_record() {
        let changed = sample().with_encrypted_password("enc999");
        assert_eq!(changed.encrypted_password().expose(), "enc999");
        assert_eq!(changed.access_token().expose(), "tok456");
    }

    #[test]
    fn test_is_internal() {
        assert!(sample().is_internal());
        assert!(!CredentialRecord::new("@b.com", "", "", "").is_internal());
        assert!(!CredentialRecord::new("external-id", "", "", "").is_internal());
        assert!(!CredentialRecord::new("", "", "", "").is_internal());
    }

    #[test]
    fn test_serde_matches_encode() {
        let record = sample();
        let via_serde = serde_json::to_value(&record).unwrap();
        assert_eq!(via_serde, record.to_value());

        let back: CredentialRecord = serde_json::from_value(via_serde).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_serde_rejects_missing_and_mistyped_fields() {
        let missing = json!({ "mailAddress": "a@b.com", "accessToken": "t", "userId": "u" });
        let err = serde_json::from_value::<CredentialRecord>(missing).unwrap_err();
        assert!(err.to_string().contains("encryptedPassword"));

        let mistyped = json!({
            "mailAddress": "a@b.com",
            "encryptedPassword": 123,
            "accessToken": "t",
            "userId": "u",
        });
        assert!(serde_json::from_value::<CredentialRecord>(mistyped).is_err());
    }

    #[test]
    fn test_record_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CredentialRecord>();
    }
}
