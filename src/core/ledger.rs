// This is the ledger engine - it owns the chain, the pending pool and the difficulty state
// Everything lives in memory and runs on the caller's thread; mining blocks until a nonce is found

use crate::config::LedgerConfig;
use crate::core::block::GENESIS_PREV_HASH;
use crate::core::validation::{first_violation, ChainViolation, GENESIS_NONCE};
use crate::core::{Block, BlockHasher, DifficultyController, ProofOfWork, Transaction};
use crate::error::Result;
use log::{debug, info};
use std::time::Instant;

/// An in-memory proof-of-work chain with a pending transaction pool.
#[derive(Debug, Clone)]
pub struct Ledger {
    chain: Vec<Block>,
    pending_transactions: Vec<Transaction>,
    difficulty: u32,
    // Mining durations in seconds since the last difficulty adjustment
    block_times: Vec<f64>,
    adjustment_interval: usize,
    hasher: BlockHasher,
    controller: DifficultyController,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Ledger with the built-in defaults (difficulty 3, adjustment every 5 blocks)
    pub fn new() -> Ledger {
        Self::build(&LedgerConfig::default())
    }

    /// Ledger tuned by `config`, which is validated first
    pub fn with_config(config: &LedgerConfig) -> Result<Ledger> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &LedgerConfig) -> Ledger {
        let mut ledger = Ledger {
            chain: Vec::new(),
            pending_transactions: Vec::new(),
            difficulty: config.initial_difficulty,
            block_times: Vec::new(),
            adjustment_interval: config.adjustment_interval,
            hasher: BlockHasher::new(&config.hash_key),
            controller: DifficultyController::new(config),
        };
        // Genesis goes in straight away, built from the (empty) pool with the sentinel nonce
        ledger.append_block(GENESIS_NONCE);
        ledger
    }

    /// Queue a transaction for the next block and return its id.
    ///
    /// Nothing about the amount or the parties is checked.
    pub fn submit_transaction(&mut self, amount: i64, sender: &str, recipient: &str) -> String {
        let tx = Transaction::new(amount, sender, recipient);
        let tx_id = tx.get_id().to_string();
        debug!("Queued transaction {tx_id}: {amount} from {sender} to {recipient}");
        self.pending_transactions.push(tx);
        tx_id
    }

    /// Run proof-of-work over the pending pool and append the resulting block.
    ///
    /// The search time is recorded for the next difficulty adjustment. An empty
    /// pool still produces a block.
    pub fn mine(&mut self) -> Result<&Block> {
        let prev_hash = self.tip_hash().to_string();
        let pow = ProofOfWork::new(&self.hasher, self.difficulty);

        let started = Instant::now();
        let nonce = pow.find_nonce(&prev_hash, &self.pending_transactions)?;
        let elapsed = started.elapsed().as_secs_f64();
        self.block_times.push(elapsed);

        let difficulty = self.difficulty;
        let block = self.append_block(nonce);
        info!(
            "Mined block {} with {} transactions in {elapsed:.3}s: {} (difficulty: {difficulty})",
            block.get_index(),
            block.get_transactions().len(),
            block.get_hash()
        );
        Ok(block)
    }

    /// Seal the pending pool into a new block with `nonce` and append it.
    ///
    /// The nonce is not checked against the difficulty; that is the miner's job.
    /// The pool is always emptied, and every `adjustment_interval` blocks the
    /// difficulty is recalculated.
    pub fn append_block(&mut self, nonce: u64) -> &Block {
        let index = self.chain.len();
        let prev_hash = self.tip_hash().to_string();
        // I take the pool by value so the block owns its transactions outright
        let transactions = std::mem::take(&mut self.pending_transactions);
        let hash = self.hasher.hash(&prev_hash, &transactions, nonce);

        debug!(
            "Appending block {index} (nonce {nonce}, {} transactions)",
            transactions.len()
        );
        self.chain.push(Block::new(index, transactions, prev_hash, nonce, hash));

        if self.chain.len() % self.adjustment_interval == 0 {
            self.difficulty = self
                .controller
                .adjust(&mut self.block_times, self.difficulty);
        }

        let last = self.chain.len() - 1;
        &self.chain[last]
    }

    /// True when every block's hash recomputes and every link holds
    pub fn is_valid(&self) -> bool {
        self.first_violation().is_none()
    }

    /// The first block that fails validation, and why
    pub fn first_violation(&self) -> Option<ChainViolation> {
        first_violation(&self.chain, &self.hasher)
    }

    // Hash the next block links to: the tip's hash, or the sentinel before genesis
    fn tip_hash(&self) -> &str {
        self.chain
            .last()
            .map(|block| block.get_hash())
            .unwrap_or(GENESIS_PREV_HASH)
    }

    pub fn chain(&self) -> &[Block] {
        self.chain.as_slice()
    }

    pub fn last_block(&self) -> &Block {
        // build() appends genesis, and the chain never shrinks
        &self.chain[self.chain.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        self.pending_transactions.as_slice()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn block_times(&self) -> &[f64] {
        self.block_times.as_slice()
    }

    pub fn adjustment_interval(&self) -> usize {
        self.adjustment_interval
    }

    pub fn hasher(&self) -> &BlockHasher {
        &self.hasher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testnet::{create_mined_ledger, create_test_ledger, test_config};

    #[test]
    fn test_genesis_block() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);

        let genesis = ledger.last_block();
        assert_eq!(genesis.get_index(), 0);
        assert_eq!(genesis.get_prev_hash(), "0");
        assert_eq!(genesis.get_nonce(), 0);
        assert!(genesis.get_transactions().is_empty());
        assert_eq!(genesis.get_hash(), ledger.hasher().hash("0", &[], 0));
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_default_settings() {
        let ledger = Ledger::new();
        assert_eq!(ledger.difficulty(), 3);
        assert_eq!(ledger.adjustment_interval(), 5);
        assert!(ledger.block_times().is_empty());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = LedgerConfig {
            adjustment_interval: 0,
            ..LedgerConfig::default()
        };
        assert!(Ledger::with_config(&config).is_err());
    }

    #[test]
    fn test_submit_transaction_queues() {
        let mut ledger = create_test_ledger();
        let id = ledger.submit_transaction(10, "s1", "r1");
        assert_eq!(ledger.pending_transactions().len(), 1);
        assert_eq!(ledger.pending_transactions()[0].get_id(), id);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_mine_two_transactions_default_difficulty() {
        let mut ledger = Ledger::new();
        let a = ledger.submit_transaction(10, "s1", "r1");
        let b = ledger.submit_transaction(20, "s2", "r2");
        let genesis_hash = ledger.last_block().get_hash().to_string();

        let block = ledger.mine().unwrap();
        assert_eq!(block.get_index(), 1);
        assert_eq!(block.get_transactions().len(), 2);
        assert_eq!(block.get_transactions()[0].get_id(), a);
        assert_eq!(block.get_transactions()[1].get_id(), b);
        assert_eq!(block.get_prev_hash(), genesis_hash);
        assert!(block.get_hash().starts_with("000"));

        assert!(ledger.pending_transactions().is_empty());
        assert_eq!(ledger.block_times().len(), 1);
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_mine_empty_pool() {
        let mut ledger = create_test_ledger();
        let block = ledger.mine().unwrap();
        assert!(block.get_transactions().is_empty());
        assert!(ProofOfWork::meets_target(block.get_hash(), 1));
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_append_block_clears_pool_without_checking_nonce() {
        let mut ledger = create_test_ledger();
        ledger.submit_transaction(1, "a", "b");
        ledger.submit_transaction(2, "c", "d");

        let block = ledger.append_block(123_456);
        assert_eq!(block.get_nonce(), 123_456);
        assert_eq!(block.get_transactions().len(), 2);
        assert!(ledger.pending_transactions().is_empty());

        // Linkage and hashes still hold even though the nonce was never mined
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_blocks_keep_their_transactions_after_pool_reset() {
        let mut ledger = create_test_ledger();
        ledger.submit_transaction(1, "a", "b");
        ledger.mine().unwrap();
        ledger.submit_transaction(2, "c", "d");
        ledger.submit_transaction(3, "e", "f");
        ledger.mine().unwrap();

        assert_eq!(ledger.chain()[1].get_transactions().len(), 1);
        assert_eq!(ledger.chain()[2].get_transactions().len(), 2);
    }

    #[test]
    fn test_chain_linkage() {
        let ledger = create_mined_ledger(6, 2);
        for pair in ledger.chain().windows(2) {
            assert_eq!(pair[1].get_prev_hash(), pair[0].get_hash());
            assert_eq!(pair[1].get_index(), pair[0].get_index() + 1);
        }
    }

    #[test]
    fn test_tampered_transactions_invalidate() {
        let mut ledger = create_mined_ledger(3, 2);
        ledger.chain[2].transactions.pop();
        assert!(!ledger.is_valid());
        assert_eq!(
            ledger.first_violation(),
            Some(ChainViolation::HashMismatch { index: 2 })
        );
    }

    #[test]
    fn test_tampered_nonce_invalidates() {
        let mut ledger = create_mined_ledger(3, 1);
        ledger.chain[1].nonce += 1;
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_tampered_hash_invalidates() {
        let mut ledger = create_mined_ledger(3, 1);
        ledger.chain[3].hash = "0".repeat(64);
        assert!(!ledger.is_valid());
    }

    #[test]
    fn test_tampered_genesis_invalidates() {
        let mut ledger = create_mined_ledger(1, 1);
        ledger.chain[0].hash = "f".repeat(64);
        assert_eq!(
            ledger.first_violation(),
            Some(ChainViolation::GenesisHashMismatch)
        );
    }

    #[test]
    fn test_rehashed_block_breaks_next_link() {
        let mut ledger = create_mined_ledger(3, 1);
        // Rewrite block 1 consistently; block 2 still points at the old hash
        ledger.chain[1].transactions.clear();
        let prev = ledger.chain[0].hash.clone();
        let nonce = ledger.chain[1].nonce;
        ledger.chain[1].hash = ledger.hasher.hash(&prev, &[], nonce);
        assert_eq!(
            ledger.first_violation(),
            Some(ChainViolation::HashMismatch { index: 2 })
        );
    }

    #[test]
    fn test_adjustment_fires_on_interval() {
        let config = LedgerConfig {
            adjustment_interval: 3,
            ..test_config()
        };
        let mut ledger = Ledger::with_config(&config).unwrap();

        // Synthetic slow samples: chain length 3 after the next two appends
        ledger.difficulty = 2;
        ledger.block_times = vec![9.0, 11.0];
        ledger.append_block(0);
        assert_eq!(ledger.difficulty(), 2);
        assert_eq!(ledger.block_times().len(), 2);

        ledger.append_block(0);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.difficulty(), 1);
        assert!(ledger.block_times().is_empty());
    }

    #[test]
    fn test_fast_window_raises_difficulty() {
        let config = LedgerConfig {
            adjustment_interval: 2,
            ..test_config()
        };
        let mut ledger = Ledger::with_config(&config).unwrap();
        ledger.block_times = vec![0.1];
        ledger.append_block(0);
        assert_eq!(ledger.difficulty(), 2);
        assert!(ledger.block_times().is_empty());
    }

    #[test]
    fn test_adjustment_with_empty_window_is_noop() {
        let config = LedgerConfig {
            adjustment_interval: 2,
            ..test_config()
        };
        let mut ledger = Ledger::with_config(&config).unwrap();
        ledger.append_block(0);
        assert_eq!(ledger.difficulty(), 1);
    }

    #[test]
    fn test_difficulty_never_drops_below_floor() {
        let config = LedgerConfig {
            adjustment_interval: 1,
            ..test_config()
        };
        let mut ledger = Ledger::with_config(&config).unwrap();
        for _ in 0..5 {
            ledger.block_times = vec![60.0];
            ledger.append_block(0);
        }
        assert_eq!(ledger.difficulty(), 1);
    }

    #[test]
    fn test_hash_key_changes_genesis() {
        let other = LedgerConfig {
            hash_key: "another key".to_string(),
            ..test_config()
        };
        let a = create_test_ledger();
        let b = Ledger::with_config(&other).unwrap();
        assert_ne!(a.last_block().get_hash(), b.last_block().get_hash());
        assert!(b.is_valid());
    }
}
