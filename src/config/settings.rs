use crate::error::{LedgerError, Result};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Process-wide configuration built from defaults plus environment overrides.
pub static GLOBAL_CONFIG: Lazy<LedgerConfig> = Lazy::new(LedgerConfig::from_env_or_default);

pub const DEFAULT_DIFFICULTY: u32 = 3;
pub const DEFAULT_ADJUSTMENT_INTERVAL: usize = 5;
pub const DEFAULT_FAST_BLOCK_SECS: f64 = 2.0;
pub const DEFAULT_SLOW_BLOCK_SECS: f64 = 5.0;
pub const DEFAULT_MIN_DIFFICULTY: u32 = 1;
/// A hex SHA-256 digest has 64 characters, so no target can be longer.
pub const MAX_SUPPORTED_DIFFICULTY: u32 = 64;
pub const DEFAULT_HASH_KEY: &str = "secret";

const DIFFICULTY_KEY: &str = "LEDGER_DIFFICULTY";
const ADJUSTMENT_INTERVAL_KEY: &str = "LEDGER_ADJUSTMENT_INTERVAL";
const HASH_KEY_KEY: &str = "LEDGER_HASH_KEY";

/// Tuning knobs for a [`Ledger`](crate::core::Ledger).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Leading zero hex digits required when the ledger starts
    pub initial_difficulty: u32,
    /// Difficulty is recalculated whenever the chain length is a multiple of this
    pub adjustment_interval: usize,
    /// Mean block time (seconds) below which difficulty goes up
    pub fast_block_secs: f64,
    /// Mean block time (seconds) above which difficulty goes down
    pub slow_block_secs: f64,
    pub min_difficulty: u32,
    pub max_difficulty: u32,
    /// HMAC key used by the block hasher
    pub hash_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            initial_difficulty: DEFAULT_DIFFICULTY,
            adjustment_interval: DEFAULT_ADJUSTMENT_INTERVAL,
            fast_block_secs: DEFAULT_FAST_BLOCK_SECS,
            slow_block_secs: DEFAULT_SLOW_BLOCK_SECS,
            min_difficulty: DEFAULT_MIN_DIFFICULTY,
            max_difficulty: MAX_SUPPORTED_DIFFICULTY,
            hash_key: DEFAULT_HASH_KEY.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<LedgerConfig> {
        let mut config = LedgerConfig::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env) but falls back to the defaults when
    /// an override cannot be parsed.
    pub fn from_env_or_default() -> LedgerConfig {
        LedgerConfig::from_env().unwrap_or_else(|e| {
            warn!("Ignoring ledger environment overrides: {e}");
            LedgerConfig::default()
        })
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<LedgerConfig> {
        let config: LedgerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, then apply environment overrides on top.
    pub fn load(path: &Path) -> Result<LedgerConfig> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let mut config: LedgerConfig = toml::from_str(&text)?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = env::var(DIFFICULTY_KEY) {
            self.initial_difficulty = value.trim().parse().map_err(|e| {
                LedgerError::Config(format!("{DIFFICULTY_KEY}={value} is not a difficulty: {e}"))
            })?;
        }
        if let Ok(value) = env::var(ADJUSTMENT_INTERVAL_KEY) {
            self.adjustment_interval = value.trim().parse().map_err(|e| {
                LedgerError::Config(format!(
                    "{ADJUSTMENT_INTERVAL_KEY}={value} is not an interval: {e}"
                ))
            })?;
        }
        if let Ok(value) = env::var(HASH_KEY_KEY) {
            self.hash_key = value;
        }
        Ok(())
    }

    /// Reject settings the ledger cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.adjustment_interval == 0 {
            return Err(LedgerError::Config(
                "adjustment_interval must be at least 1".to_string(),
            ));
        }
        if self.max_difficulty > MAX_SUPPORTED_DIFFICULTY {
            return Err(LedgerError::Config(format!(
                "max_difficulty {} exceeds the digest length {MAX_SUPPORTED_DIFFICULTY}",
                self.max_difficulty
            )));
        }
        if self.min_difficulty > self.max_difficulty {
            return Err(LedgerError::Config(format!(
                "min_difficulty {} is above max_difficulty {}",
                self.min_difficulty, self.max_difficulty
            )));
        }
        if !(self.min_difficulty..=self.max_difficulty).contains(&self.initial_difficulty) {
            return Err(LedgerError::Config(format!(
                "initial_difficulty {} is outside [{}, {}]",
                self.initial_difficulty, self.min_difficulty, self.max_difficulty
            )));
        }
        let thresholds_ok = self.fast_block_secs.is_finite()
            && self.slow_block_secs.is_finite()
            && self.fast_block_secs >= 0.0
            && self.fast_block_secs <= self.slow_block_secs;
        if !thresholds_ok {
            return Err(LedgerError::Config(format!(
                "block time thresholds must satisfy 0 <= fast ({}) <= slow ({})",
                self.fast_block_secs, self.slow_block_secs
            )));
        }
        Ok(())
    }
}
