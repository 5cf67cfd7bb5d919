//! # pow-ledger
//!
//! A single-process model of a proof-of-work blockchain: transactions are
//! batched into blocks, blocks are chained by hash, miners search for a nonce
//! that meets a leading-zeros target, and difficulty follows the recent
//! mining speed. There is no networking, storage or signing; everything
//! lives in one [`Ledger`] owned by the caller.
//!
//! ## Layout
//! - `core/`: transactions, blocks, hashing, proof-of-work, difficulty, validation, Merkle roots
//! - `config/`: tuning settings from defaults, TOML files and the environment
//! - `simulation/`: the randomized driver used by the CLI
//! - `utils/`: digest primitives and JSON helpers
//! - `cli/`: command-line argument parsing
//!
//! ## Quick start
//! ```no_run
//! use pow_ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.submit_transaction(10, "s1", "r1");
//! ledger.submit_transaction(20, "s2", "r2");
//! let block = ledger.mine()?;
//! assert!(block.get_hash().starts_with("000"));
//! assert!(ledger.is_valid());
//! # Ok::<(), pow_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod simulation;
pub mod utils;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{LedgerConfig, GLOBAL_CONFIG};
pub use crate::core::{
    merkle_root, Adjustment, Block, BlockHasher, ChainViolation, DifficultyController, Ledger,
    MerkleTree, ProofOfWork, Transaction,
};
pub use error::{LedgerError, Result};
pub use simulation::{simulate_chain, SimulationReport};
pub use utils::{current_timestamp, from_json, hmac_sha256_hex, sha256_hex, to_json_pretty};
