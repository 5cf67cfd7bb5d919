use crate::core::block::GENESIS_PREV_HASH;
use crate::core::{Block, BlockHasher};
use std::fmt;

/// Nonce the genesis block is built and checked with.
pub const GENESIS_NONCE: u64 = 0;

/// The first inconsistency found while walking a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainViolation {
    /// Genesis hash is not `hash("0", [], 0)`
    GenesisHashMismatch,
    /// Stored hash differs from the recomputed one
    HashMismatch { index: usize },
    /// `prev_hash` does not name the preceding block's hash
    BrokenLink { index: usize },
}

impl fmt::Display for ChainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainViolation::GenesisHashMismatch => write!(f, "genesis hash mismatch"),
            ChainViolation::HashMismatch { index } => write!(f, "hash mismatch at block {index}"),
            ChainViolation::BrokenLink { index } => write!(f, "broken link at block {index}"),
        }
    }
}

/// Walk `chain` from genesis and return the first violation, if any.
///
/// Genesis is checked against the empty-transaction hash, not against the
/// transactions it actually holds. A ledger always builds genesis from an
/// empty pool, so the two agree; a genesis block with transactions in it
/// will always fail here.
pub fn first_violation(chain: &[Block], hasher: &BlockHasher) -> Option<ChainViolation> {
    for (i, block) in chain.iter().enumerate() {
        if i == 0 {
            if block.hash != hasher.hash(GENESIS_PREV_HASH, &[], GENESIS_NONCE) {
                return Some(ChainViolation::GenesisHashMismatch);
            }
            continue;
        }

        let prev = &chain[i - 1];
        if block.hash != hasher.hash(&prev.hash, &block.transactions, block.nonce) {
            return Some(ChainViolation::HashMismatch { index: i });
        }
        if block.prev_hash != prev.hash {
            return Some(ChainViolation::BrokenLink { index: i });
        }
    }
    None
}
