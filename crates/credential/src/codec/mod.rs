//! JSON text encoding of credential records

mod config;
mod json;

pub use config::CodecConfig;
pub use json::CredentialCodec;
