//! Staged construction of credential records

use crate::core::{ConstructionError, CredentialField, CredentialRecord, SecureString};

/// Builder for [`CredentialRecord`]
///
/// # Examples
///
/// ```
/// use mailbox_credentials::{CredentialField, CredentialRecord, ConstructionError};
///
/// let record = CredentialRecord::builder()
///     .mail_address("a@b.com")
///     .encrypted_password("enc123")
///     .access_token("tok456")
///     .user_id("user789")
///     .build()?;
/// assert_eq!(record.user_id(), "user789");
///
/// let err = CredentialRecord::builder().mail_address("a@b.com").build().unwrap_err();
/// assert_eq!(
///     err,
///     ConstructionError::MissingField { field: CredentialField::EncryptedPassword }
/// );
/// # Ok::<(), ConstructionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CredentialRecordBuilder {
    mail_address: Option<String>,
    encrypted_password: Option<SecureString>,
    access_token: Option<SecureString>,
    user_id: Option<String>,
}

impl CredentialRecordBuilder {
    /// Sets the mail address
    pub fn mail_address(mut self, mail_address: impl Into<String>) -> Self {
        self.mail_address = Some(mail_address.into());
        self
    }

    /// Sets the encrypted password
    pub fn encrypted_password(mut self, encrypted_password: impl Into<String>) -> Self {
        self.encrypted_password = Some(SecureString::new(encrypted_password));
        self
    }

    /// Sets the access token
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(SecureString::new(access_token));
        self
    }

    /// Sets the user id
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Builds the record
    ///
    /// Fails with the first unset field in wire order. Empty strings count
    /// as set.
    pub fn build(self) -> Result<CredentialRecord, ConstructionError> {
        let mail_address = require(self.mail_address, CredentialField::MailAddress)?;
        let encrypted_password =
            require(self.encrypted_password, CredentialField::EncryptedPassword)?;
        let access_token = require(self.access_token, CredentialField::AccessToken)?;
        let user_id = require(self.user_id, CredentialField::UserId)?;

        Ok(CredentialRecord::from_parts(
            mail_address,
            encrypted_password,
            access_token,
            user_id,
        ))
    }
}

fn require<T>(value: Option<T>, field: CredentialField) -> Result<T, ConstructionError> {
    value.ok_or(ConstructionError::MissingField { field })
}
