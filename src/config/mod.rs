//! Configuration management
//!
//! This module handles the tuning settings for the ledger: starting
//! difficulty, the adjustment window and thresholds, and the hash key.

pub mod settings;

pub use settings::{LedgerConfig, GLOBAL_CONFIG};
