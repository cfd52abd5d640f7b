//! Stored credentials usage example
//!
//! - Build a record after a login exchange
//! - Persist it as the JSON array a secure store keeps
//! - Load it back and refresh the access token

use mailbox_credentials::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Stored Credentials Example ===\n");

    // 1. Fresh credentials from the login exchange
    let record = CredentialRecord::new("alice@example.com", "c2VjcmV0", "tok-1", "user-42");
    println!("1. Logged in: {record:?}");

    // 2. Serialize for secure storage
    let codec = CredentialCodec::new(CodecConfig::default())?;
    let payload = codec.encode_json_list(std::slice::from_ref(&record));
    println!("2. Payload is {} bytes", payload.len());

    // 3. Load it back
    let loaded = codec.decode_json_list(&payload)?;
    assert_eq!(loaded, vec![record.clone()]);
    println!("3. Loaded {} record(s)", loaded.len());

    // 4. A refreshed token is a new record
    let refreshed = record.with_access_token("tok-2");
    println!("4. Token length after refresh: {}", refreshed.access_token().len());

    // 5. Corrupted storage is an error, not an empty account list
    match codec.decode_json_list(r#"[{"mailAddress":"alice@example.com"}]"#) {
        Ok(_) => unreachable!("incomplete record must not decode"),
        Err(err) => println!("5. {}", CredentialError::from(err)),
    }

    Ok(())
}
