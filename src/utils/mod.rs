//! Utility functions and helpers
//!
//! This module contains the digest primitives and the JSON helpers
//! used throughout the ledger.

pub mod crypto;
pub mod serialization;

pub use crypto::{current_timestamp, hmac_sha256_hex, sha256_digest, sha256_hex};

pub use serialization::{from_json, to_json_pretty};
