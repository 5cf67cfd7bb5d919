//! Test helpers for building ledgers at low difficulty.

pub mod test_utils;

pub use test_utils::*;
