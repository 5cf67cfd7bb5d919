use crate::core::Ledger;
use crate::error::Result;
use log::info;
use rand::Rng;
use serde::Serialize;

/// Exclusive upper bound for randomly generated amounts
pub const MAX_AMOUNT: i64 = 1000;
/// Length of generated sender/recipient ids
pub const PARTY_ID_LEN: usize = 5;

const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// What a simulation run did to the ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub blocks_mined: usize,
    pub transactions_submitted: usize,
    pub initial_difficulty: u32,
    pub final_difficulty: u32,
    /// `(chain length, new difficulty)` for every change observed
    pub difficulty_changes: Vec<(usize, u32)>,
    pub chain_valid: bool,
}

fn random_party<R: Rng>(rng: &mut R) -> String {
    (0..PARTY_ID_LEN)
        .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
        .collect()
}

/// Mine `blocks` blocks, each preceded by a random number (below `max_txs`)
/// of random transactions.
pub fn simulate_chain<R: Rng>(
    ledger: &mut Ledger,
    rng: &mut R,
    max_txs: usize,
    blocks: usize,
) -> Result<SimulationReport> {
    let initial_difficulty = ledger.difficulty();
    let mut transactions_submitted = 0;
    let mut difficulty_changes = Vec::new();

    for _ in 0..blocks {
        let tx_count = if max_txs == 0 {
            0
        } else {
            rng.gen_range(0..max_txs)
        };
        for _ in 0..tx_count {
            let sender = random_party(rng);
            let recipient = random_party(rng);
            ledger.submit_transaction(rng.gen_range(0..MAX_AMOUNT), &sender, &recipient);
        }
        transactions_submitted += tx_count;

        let before = ledger.difficulty();
        ledger.mine()?;
        if ledger.difficulty() != before {
            difficulty_changes.push((ledger.len(), ledger.difficulty()));
        }
    }

    let chain_valid = ledger.is_valid();
    info!(
        "Simulation finished: {blocks} blocks, {transactions_submitted} transactions, difficulty {initial_difficulty} -> {}, valid: {chain_valid}",
        ledger.difficulty()
    );

    Ok(SimulationReport {
        blocks_mined: blocks,
        transactions_submitted,
        initial_difficulty,
        final_difficulty: ledger.difficulty(),
        difficulty_changes,
        chain_valid,
    })
}
