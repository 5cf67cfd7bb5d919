use crate::core::{BlockHasher, Transaction};
use crate::error::{LedgerError, Result};
use log::debug;

/// First nonce tried by the search. Nonce 0 is reserved for the genesis block.
pub const START_NONCE: u64 = 1;

/// Serial nonce search against a leading-zeros target.
pub struct ProofOfWork<'a> {
    hasher: &'a BlockHasher,
    target: String,
    difficulty: u32,
}

impl<'a> ProofOfWork<'a> {
    pub fn new(hasher: &'a BlockHasher, difficulty: u32) -> ProofOfWork<'a> {
        ProofOfWork {
            hasher,
            target: "0".repeat(difficulty as usize),
            difficulty,
        }
    }

    /// True when `hash` starts with `difficulty` zero characters
    pub fn meets_target(hash: &str, difficulty: u32) -> bool {
        hash.len() >= difficulty as usize
            && hash.bytes().take(difficulty as usize).all(|b| b == b'0')
    }

    pub fn get_difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Scan nonces upwards from [`START_NONCE`] and return the first whose
    /// hash meets the target, together with that hash.
    ///
    /// There is no timeout; the expected number of attempts is `16^difficulty`.
    pub fn run(&self, prev_hash: &str, transactions: &[Transaction]) -> Result<(u64, String)> {
        let mut nonce = START_NONCE;
        loop {
            let hash = self.hasher.hash(prev_hash, transactions, nonce);
            if hash.starts_with(self.target.as_str()) {
                debug!(
                    "Found nonce {nonce} after {} attempts at difficulty {}",
                    nonce - START_NONCE + 1,
                    self.difficulty
                );
                return Ok((nonce, hash));
            }
            nonce = nonce.checked_add(1).ok_or_else(|| {
                LedgerError::Mining(format!(
                    "nonce space exhausted at difficulty {}",
                    self.difficulty
                ))
            })?;
        }
    }

    /// Nonce half of [`run`](Self::run)
    pub fn find_nonce(&self, prev_hash: &str, transactions: &[Transaction]) -> Result<u64> {
        self.run(prev_hash, transactions).map(|(nonce, _)| nonce)
    }
}
