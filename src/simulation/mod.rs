//! Randomized driver
//!
//! Feeds a ledger random transactions and mines a fixed number of blocks.
//! The ledger never runs this on its own; callers invoke it explicitly.

pub mod driver;

pub use driver::{simulate_chain, SimulationReport};
