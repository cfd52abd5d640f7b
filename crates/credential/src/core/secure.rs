//! Secure string type for secret credential fields

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use subtle::ConstantTimeEq;

/// Secure string that zeros memory on drop
///
/// Holds the encrypted password and the access token. The value is redacted
/// in `Debug` and `Display` output and compared in constant time.
///
/// # Examples
///
/// ```
/// use mailbox_credentials::SecureString;
///
/// let token = SecureString::new("tok456");
/// assert_eq!(token.expose(), "tok456");
/// assert_eq!(format!("{token:?}"), "[REDACTED]");
/// ```
#[derive(Clone)]
pub struct SecureString(SecretString);

impl SecureString {
    /// Create new secure string
    pub fn new(s: impl Into<String>) -> Self {
        Self(SecretString::from(s.into()))
    }

    /// Expose the secret (use with caution)
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Length in bytes, without exposing content
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Checks if empty without exposing content
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }

    /// Constant-time equality check
    pub fn eq_ct(&self, other: &Self) -> bool {
        let a = self.expose().as_bytes();
        let b = other.expose().as_bytes();
        a.ct_eq(b).into()
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.eq_ct(other)
    }
}

impl Eq for SecureString {}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_debug() {
        let secret = SecureString::new("super_secret_password");
        let debug_str = format!("{secret:?}");
        assert_eq!(debug_str, "[REDACTED]");
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_secure_string_display() {
        let secret = SecureString::new("api_key_12345");
        assert_eq!(secret.to_string(), "[REDACTED]");
    }

    #[test]
    fn test_secure_string_expose() {
        let secret = SecureString::new("enc123");
        assert_eq!(secret.expose(), "enc123");
        assert_eq!(secret.len(), 6);
        assert!(!secret.is_empty());
        assert!(SecureString::new("").is_empty());
    }

    #[test]
    fn test_secure_string_eq_ct() {
        let a = SecureString::new("tok456");
        let b = SecureString::from("tok456".to_string());
        let c = SecureString::new("tok457");
        let d = SecureString::new("tok4567");

        assert!(a.eq_ct(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_secure_string_clone_is_equal() {
        let original = SecureString::new("clone_test");
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
