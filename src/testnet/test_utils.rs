//! Test utilities for ledger testing

use crate::config::LedgerConfig;
use crate::core::Ledger;

/// Low-difficulty settings so tests mine in a handful of attempts
pub fn test_config() -> LedgerConfig {
    LedgerConfig {
        initial_difficulty: 1,
        min_difficulty: 1,
        max_difficulty: 2,
        ..LedgerConfig::default()
    }
}

/// A fresh ledger holding only genesis
pub fn create_test_ledger() -> Ledger {
    Ledger::with_config(&test_config()).expect("test config is valid")
}

/// A ledger with `blocks` mined blocks after genesis, each holding `txs_per_block` transactions
pub fn create_mined_ledger(blocks: usize, txs_per_block: usize) -> Ledger {
    let mut ledger = create_test_ledger();
    for block in 0..blocks {
        for tx in 0..txs_per_block {
            let amount = (block * txs_per_block + tx) as i64;
            ledger.submit_transaction(amount, &format!("sender{tx}"), &format!("recipient{tx}"));
        }
        ledger.mine().expect("mining at test difficulty succeeds");
    }
    ledger
}
