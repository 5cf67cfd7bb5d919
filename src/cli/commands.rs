use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pow-ledger", about = "Single-process proof-of-work ledger simulator")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "simulate",
        about = "Mine blocks filled with random transactions and check the chain"
    )]
    Simulate {
        #[arg(
            long = "max-txs",
            default_value_t = 5,
            help = "Upper bound (exclusive) on transactions per block"
        )]
        max_txs: usize,
        #[arg(long = "blocks", default_value_t = 15, help = "Number of blocks to mine")]
        blocks: usize,
        #[arg(long = "difficulty", help = "Override the starting difficulty")]
        difficulty: Option<u32>,
        #[arg(long = "config", help = "TOML file with ledger settings")]
        config: Option<PathBuf>,
        #[arg(long = "seed", help = "Seed for a reproducible transaction stream")]
        seed: Option<u64>,
        #[arg(long = "json", help = "Print the whole chain as JSON")]
        json: bool,
    },
    #[command(name = "merkle", about = "Print the Merkle root of the given ids")]
    Merkle {
        #[arg(required = true, help = "Identifiers, in order")]
        ids: Vec<String>,
    },
    #[command(name = "config", about = "Print the effective ledger configuration")]
    Config {
        #[arg(long = "config", help = "TOML file with ledger settings")]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_defaults() {
        let opt = Opt::try_parse_from(["pow-ledger", "simulate"]).unwrap();
        match opt.command {
            Command::Simulate {
                max_txs,
                blocks,
                difficulty,
                json,
                ..
            } => {
                assert_eq!(max_txs, 5);
                assert_eq!(blocks, 15);
                assert_eq!(difficulty, None);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_merkle_requires_ids() {
        assert!(Opt::try_parse_from(["pow-ledger", "merkle"]).is_err());
        let opt = Opt::try_parse_from(["pow-ledger", "merkle", "a", "b"]).unwrap();
        assert!(matches!(opt.command, Command::Merkle { ids } if ids == ["a", "b"]));
    }
}
