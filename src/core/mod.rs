//! Core ledger functionality
//!
//! This module contains the fundamental components of the chain:
//! transactions, blocks, the block hasher, proof-of-work, difficulty
//! adjustment, chain validation, and the ledger that ties them together.

pub mod block;
pub mod difficulty;
pub mod hasher;
pub mod ledger;
pub mod merkle;
pub mod proof_of_work;
pub mod transaction;
pub mod validation;

pub use block::Block;
pub use difficulty::{Adjustment, DifficultyController};
pub use hasher::BlockHasher;
pub use ledger::Ledger;
pub use merkle::{merkle_root, MerkleTree};
pub use proof_of_work::ProofOfWork;
pub use transaction::Transaction;
pub use validation::ChainViolation;
