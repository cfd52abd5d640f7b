//! Mailbox credentials - stored login credentials as a value type
//!
//! A [`CredentialRecord`] carries the four strings a mail client keeps for an
//! account after logging in: the mail address, the password ciphertext, the
//! access token and the user id. It converts losslessly to and from a flat
//! JSON object so a secure-storage or transport layer can persist it.
//!
//! # Features
//!
//! - **Immutable records** - private fields, read-only accessors
//! - **Typed decoding** - missing or mistyped keys are [`DecodeError`]s, never defaults
//! - **Secret hygiene** - password and token are zeroized on drop, redacted in
//!   `Debug`, compared in constant time
//! - **JSON text codec** - single records and the array payload of a secure store
//!
//! The crate performs no I/O, no encryption and no format validation of the
//! values it carries.
#![forbid(unsafe_code)]

/// JSON text codec and its configuration
pub mod codec;
/// Core types, errors, and primitives
pub mod core;

// ── Root re-exports ─────────────────────────────────────────────────────────

pub use crate::codec::{CodecConfig, CredentialCodec};
pub use crate::core::{
    ConfigError, ConstructionError, CredentialError, CredentialField, CredentialRecord,
    CredentialRecordBuilder, DecodeError, Result, SecureString,
};

/// Commonly used types
pub mod prelude {
    pub use crate::codec::{CodecConfig, CredentialCodec};
    pub use crate::core::{
        CredentialError, CredentialField, CredentialRecord, DecodeError, SecureString,
    };
}
