use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};
use ring::hmac;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix time in seconds. A clock set before the epoch reads as 0; block
/// timestamps are informational only and never hashed.
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    HEXLOWER.encode(&sha256_digest(data))
}

/// Lowercase hex HMAC-SHA-256 of `data` under `key`.
pub fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    let tag = hmac::sign(&key, data);
    HEXLOWER.encode(tag.as_ref())
}
