//! Wire keys of a credential record

use std::fmt;

/// One of the four fields carried by a [`CredentialRecord`](crate::CredentialRecord)
///
/// The [`key`](CredentialField::key) is the exact string used in the
/// JSON object representation. Errors name the field through this type so
/// they never need to carry the (possibly secret) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    /// `mailAddress`
    MailAddress,
    /// `encryptedPassword`
    EncryptedPassword,
    /// `accessToken`
    AccessToken,
    /// `userId`
    UserId,
}

impl CredentialField {
    /// All fields, in encoding order
    pub const ALL: [Self; 4] = [
        Self::MailAddress,
        Self::EncryptedPassword,
        Self::AccessToken,
        Self::UserId,
    ];

    /// Returns the JSON object key for this field
    ///
    /// # Examples
    ///
    /// ```
    /// use mailbox_credentials::CredentialField;
    ///
    /// assert_eq!(CredentialField::EncryptedPassword.key(), "encryptedPassword");
    /// ```
    pub const fn key(self) -> &'static str {
        match self {
            Self::MailAddress => "mailAddress",
            Self::EncryptedPassword => "encryptedPassword",
            Self::AccessToken => "accessToken",
            Self::UserId => "userId",
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
