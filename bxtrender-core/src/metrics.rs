//! Performance metrics — a pure function over the trade ledger.
//!
//! Recomputed in full on every call; no incremental state. Only completed
//! trades count. `total_return` compounds sequentially (capital
//! reinvestment), `avg_return` is the plain arithmetic mean — two distinct
//! figures, never interchangeable.

use serde::{Deserialize, Serialize};

use crate::domain::Trade;

/// Aggregate statistics for one (symbol, mode) ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub win_rate: f64,
    pub risk_reward: f64,
    pub total_return: f64,
    pub avg_return: f64,
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Compute all metrics from the ledger. Open trades are ignored.
pub fn compute_metrics(trades: &[Trade]) -> Metrics {
    let completed: Vec<&Trade> = trades.iter().filter(|t| !t.is_open).collect();
    let total = completed.len();
    if total == 0 {
        return Metrics::default();
    }

    // Zero return counts as a loss.
    let winners: Vec<f64> = completed
        .iter()
        .filter(|t| t.return_pct > 0.0)
        .map(|t| t.return_pct)
        .collect();
    let losers: Vec<f64> = completed
        .iter()
        .filter(|t| t.return_pct <= 0.0)
        .map(|t| t.return_pct)
        .collect();

    let wins = winners.len();
    let losses = losers.len();

    let avg_win = if wins > 0 {
        winners.iter().sum::<f64>() / wins as f64
    } else {
        0.0
    };
    // Defaulting to 1 keeps risk_reward finite on a loss-free ledger.
    let avg_loss = if losses > 0 {
        losers.iter().sum::<f64>() / losses as f64
    } else {
        1.0
    };

    let compounded: f64 = completed.iter().map(|t| 1.0 + t.return_pct / 100.0).product();
    let sum: f64 = completed.iter().map(|t| t.return_pct).sum();

    Metrics {
        win_rate: wins as f64 / total as f64 * 100.0,
        risk_reward: (avg_win / avg_loss).abs(),
        total_return: (compounded - 1.0) * 100.0,
        avg_return: sum / total as f64,
        total_trades: total,
        wins,
        losses,
    }
}
