use crate::core::{merkle_root, Transaction};
use crate::utils::current_timestamp;
use serde::{Deserialize, Serialize};

/// Hash the genesis block links back to.
pub const GENESIS_PREV_HASH: &str = "0";

/// A batch of transactions bound to the block before it.
///
/// Blocks are built once by the ledger and never change afterwards. The
/// timestamp is informational and does not take part in hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) index: usize,
    pub(crate) timestamp: i64,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) prev_hash: String,
    pub(crate) nonce: u64,
    pub(crate) hash: String,
}

impl Block {
    pub fn new(
        index: usize,
        transactions: Vec<Transaction>,
        prev_hash: String,
        nonce: u64,
        hash: String,
    ) -> Block {
        Block {
            index,
            timestamp: current_timestamp(),
            transactions,
            prev_hash,
            nonce,
            hash,
        }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_prev_hash(&self) -> &str {
        self.prev_hash.as_str()
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// Merkle root of this block's transaction ids, `None` for an empty block.
    ///
    /// Inspection only: block hashes commit to the raw id sequence, not to this root.
    pub fn merkle_root(&self) -> Option<String> {
        let ids: Vec<&str> = self.transactions.iter().map(|tx| tx.get_id()).collect();
        merkle_root(&ids).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_keeps_fields() {
        let tx = Transaction::new(5, "a", "b");
        let block = Block::new(3, vec![tx.clone()], "prev".into(), 11, "hash".into());

        assert_eq!(block.get_index(), 3);
        assert_eq!(block.get_transactions(), &[tx]);
        assert_eq!(block.get_prev_hash(), "prev");
        assert_eq!(block.get_nonce(), 11);
        assert_eq!(block.get_hash(), "hash");
        assert!(block.get_timestamp() > 0);
        assert!(!block.is_genesis());
    }

    #[test]
    fn test_empty_block_has_no_merkle_root() {
        let block = Block::new(0, vec![], GENESIS_PREV_HASH.into(), 0, "h".into());
        assert!(block.is_genesis());
        assert_eq!(block.merkle_root(), None);
    }

    #[test]
    fn test_single_transaction_merkle_root_is_its_id() {
        let tx = Transaction::new(5, "a", "b");
        let block = Block::new(1, vec![tx.clone()], "p".into(), 0, "h".into());
        assert_eq!(block.merkle_root().as_deref(), Some(tx.get_id()));
    }
}
