use crate::config::LedgerConfig;
use log::{info, warn};

/// Direction of a single difficulty step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increase,
    Decrease,
    Unchanged,
}

/// Feedback loop that keeps the mean mining time inside a band.
///
/// A window mean below `fast_block_secs` raises the difficulty by one, above
/// `slow_block_secs` lowers it by one, and anything in between (inclusive)
/// keeps it. Results never leave `[min_difficulty, max_difficulty]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyController {
    fast_block_secs: f64,
    slow_block_secs: f64,
    min_difficulty: u32,
    max_difficulty: u32,
}

impl DifficultyController {
    pub fn new(config: &LedgerConfig) -> DifficultyController {
        DifficultyController {
            fast_block_secs: config.fast_block_secs,
            slow_block_secs: config.slow_block_secs,
            min_difficulty: config.min_difficulty,
            max_difficulty: config.max_difficulty,
        }
    }

    /// Arithmetic mean of the window, `None` when it is empty
    pub fn mean_block_time(block_times: &[f64]) -> Option<f64> {
        if block_times.is_empty() {
            return None;
        }
        Some(block_times.iter().sum::<f64>() / block_times.len() as f64)
    }

    pub fn classify(&self, mean_secs: f64) -> Adjustment {
        if mean_secs < self.fast_block_secs {
            Adjustment::Increase
        } else if mean_secs > self.slow_block_secs {
            Adjustment::Decrease
        } else {
            Adjustment::Unchanged
        }
    }

    /// Decide the next difficulty from the timing window and empty the window.
    ///
    /// An empty window leaves the difficulty where it is.
    pub fn adjust(&self, block_times: &mut Vec<f64>, current_difficulty: u32) -> u32 {
        let samples = std::mem::take(block_times);

        let Some(mean) = Self::mean_block_time(&samples) else {
            warn!("Difficulty adjustment with no timing samples, keeping {current_difficulty}");
            return self.clamp(current_difficulty);
        };
        info!("Average time to mine a block: {mean:.3} seconds");

        let next = match self.classify(mean) {
            Adjustment::Increase => current_difficulty.saturating_add(1),
            Adjustment::Decrease => current_difficulty.saturating_sub(1),
            Adjustment::Unchanged => current_difficulty,
        };
        let next = self.clamp(next);

        if next > current_difficulty {
            info!("Increasing difficulty to {next}");
        } else if next < current_difficulty {
            info!("Decreasing difficulty to {next}");
        }
        next
    }

    fn clamp(&self, difficulty: u32) -> u32 {
        difficulty.clamp(self.min_difficulty, self.max_difficulty)
    }
}

impl Default for DifficultyController {
    fn default() -> Self {
        DifficultyController::new(&LedgerConfig::default())
    }
}
