use crate::core::Transaction;
use crate::utils::hmac_sha256_hex;

/// Computes the digest that binds a block to its predecessor.
///
/// The preimage is `prev_hash`, then the decimal nonce, then every `tx_id`
/// in block order, all concatenated without separators. The digest is
/// HMAC-SHA-256 under a fixed key; the key is a configuration constant, not
/// a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHasher {
    key: Vec<u8>,
}

impl BlockHasher {
    pub fn new(key: &str) -> BlockHasher {
        BlockHasher {
            key: key.as_bytes().to_vec(),
        }
    }

    pub fn hash(&self, prev_hash: &str, transactions: &[Transaction], nonce: u64) -> String {
        let preimage = Self::preimage(prev_hash, transactions, nonce);
        hmac_sha256_hex(&self.key, preimage.as_bytes())
    }

    fn preimage(prev_hash: &str, transactions: &[Transaction], nonce: u64) -> String {
        let mut preimage = format!("{prev_hash}{nonce}");
        for tx in transactions {
            preimage.push_str(tx.get_id());
        }
        preimage
    }
}

impl Default for BlockHasher {
    fn default() -> Self {
        BlockHasher::new(crate::config::settings::DEFAULT_HASH_KEY)
    }
}
