use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value transfer between two opaque parties.
///
/// There is no balance accounting and no signature, so any amount (including
/// zero or negative) is accepted. The only identity a transaction carries is
/// its `tx_id`, which is what block hashing commits to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    amount: i64,
    sender: String,
    recipient: String,
    tx_id: String,
}

impl Transaction {
    /// Create a transaction with a fresh random id (UUID v4, 32 hex chars without dashes).
    pub fn new(amount: i64, sender: &str, recipient: &str) -> Transaction {
        Transaction {
            amount,
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            tx_id: Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn get_amount(&self) -> i64 {
        self.amount
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_recipient(&self) -> &str {
        self.recipient.as_str()
    }

    pub fn get_id(&self) -> &str {
        self.tx_id.as_str()
    }

    /// Rebuild a transaction with a known id (used by tests that need stable hashes)
    #[cfg(test)]
    pub(crate) fn with_id(amount: i64, sender: &str, recipient: &str, tx_id: &str) -> Transaction {
        Transaction {
            amount,
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            tx_id: tx_id.to_string(),
        }
    }
}
