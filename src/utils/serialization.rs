// JSON helpers for handing ledger data to outside callers (printing, export)
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};

/// Serialize data to pretty-printed JSON
pub fn to_json_pretty<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| LedgerError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize data from JSON
pub fn from_json<T>(text: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(text)
        .map_err(|e| LedgerError::Serialization(format!("Deserialization failed: {e}")))
}
