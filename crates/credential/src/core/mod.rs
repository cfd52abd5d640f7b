//! Core types for credential records

mod builder;
mod error;
mod field;
mod record;
mod secure;

pub use builder::CredentialRecordBuilder;
pub use error::{ConfigError, ConstructionError, CredentialError, DecodeError, Result};
pub use field::CredentialField;
pub use record::CredentialRecord;
pub use secure::SecureString;

pub(crate) use error::json_type_name;
