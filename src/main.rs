// This is the entry point for the ledger simulator CLI
// The ledger does nothing on its own; every command here builds one and drives it explicitly
use clap::Parser;
use log::{error, LevelFilter};
use pow_ledger::{
    merkle_root, simulate_chain, to_json_pretty, Command, Ledger, LedgerConfig, Opt,
    GLOBAL_CONFIG,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::process;

fn main() {
    // Info level shows mined blocks and difficulty changes without per-append noise
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// A config file wins over the environment-only defaults when one is given
fn resolve_config(path: Option<&Path>) -> Result<LedgerConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(LedgerConfig::load(path)?),
        None => Ok((*GLOBAL_CONFIG).clone()),
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // When I want to watch a chain grow under random load and check it at the end
        Command::Simulate {
            max_txs,
            blocks,
            difficulty,
            config,
            seed,
            json,
        } => {
            let mut config = resolve_config(config.as_deref())?;
            if let Some(difficulty) = difficulty {
                config.initial_difficulty = difficulty;
            }

            let mut ledger = Ledger::with_config(&config)?;
            // A seed makes the transaction stream repeatable; mining times still vary
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let report = simulate_chain(&mut ledger, &mut rng, max_txs, blocks)?;

            if json {
                println!("{}", to_json_pretty(ledger.chain())?);
            } else {
                for block in ledger.chain() {
                    println!("Block #{}", block.get_index());
                    println!("Prev block hash: {}", block.get_prev_hash());
                    println!("Cur block hash: {}", block.get_hash());
                    println!("Nonce: {}", block.get_nonce());
                    println!("Timestamp: {}", block.get_timestamp());
                    for tx in block.get_transactions() {
                        println!(
                            "- Transaction {}: {} from {} to {}",
                            tx.get_id(),
                            tx.get_amount(),
                            tx.get_sender(),
                            tx.get_recipient()
                        );
                    }
                    println!();
                }
                println!(
                    "Mined {} blocks with {} transactions, difficulty {} -> {}",
                    report.blocks_mined,
                    report.transactions_submitted,
                    report.initial_difficulty,
                    report.final_difficulty
                );
            }

            match ledger.first_violation() {
                None => println!("Validity of this blockchain: true"),
                Some(violation) => println!("Validity of this blockchain: false ({violation})"),
            }
        }
        Command::Merkle { ids } => {
            println!("{}", merkle_root(&ids)?);
        }
        Command::Config { config } => {
            let config = resolve_config(config.as_deref())?;
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}
