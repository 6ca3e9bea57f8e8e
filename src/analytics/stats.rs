use serde::{Deserialize, Serialize};

use crate::models::HasPnl;

/// Aggregates over a set of trades that feed the behavioral score.
///
/// Breakeven trades (`pnl == 0`) are not wins, but they sit on the losing side
/// for gross-loss purposes and interrupt a loss streak.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeStats {
    pub total: usize,
    pub wins: usize,
    /// Trades with `pnl <= 0`.
    pub non_wins: usize,
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub win_rate: f64,
    pub profit_factor: f64,
    pub max_consecutive_losses: usize,
}

impl TradeStats {
    pub fn from_trades<T: HasPnl>(trades: &[T]) -> Self {
        let total = trades.len();
        if total == 0 {
            return Self::default();
        }

        let wins: Vec<f64> = trades.iter().map(|t| t.pnl()).filter(|&p| p > 0.0).collect();
        let losses: Vec<f64> = trades.iter().map(|t| t.pnl()).filter(|&p| p <= 0.0).collect();

        let gross_profit: f64 = wins.iter().sum();
        let gross_loss = losses.iter().sum::<f64>().abs();

        Self {
            total,
            wins: wins.len(),
            non_wins: losses.len(),
            gross_profit,
            gross_loss,
            win_rate: wins.len() as f64 / total as f64 * 100.0,
            profit_factor: profit_factor(gross_profit, gross_loss),
            max_consecutive_losses: max_consecutive_losses(trades),
        }
    }
}

/// Gross profit over gross loss. A loss-free set reports its gross profit
/// as the factor.
pub fn profit_factor(gross_profit: f64, gross_loss: f64) -> f64 {
    if gross_loss == 0.0 {
        gross_profit
    } else {
        gross_profit / gross_loss
    }
}

/// Longest run of strictly negative trades in ascending date order.
/// Same-day trades keep their input order.
pub fn max_consecutive_losses<T: HasPnl>(trades: &[T]) -> usize {
    let mut sorted: Vec<&T> = trades.iter().collect();
    sorted.sort_by_key(|t| t.closed_on());

    let mut max_streak = 0;
    let mut current = 0;
    for t in sorted {
        if t.pnl() < 0.0 {
            current += 1;
        } else {
            max_streak = max_streak.max(current);
            current = 0;
        }
    }
    max_streak.max(current)
}

/// Strict three-way split plus net P&L, as shown on the journal dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnlBreakdown {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub net_pnl: f64,
}

impl PnlBreakdown {
    pub fn from_trades<T: HasPnl>(trades: &[T]) -> Self {
        let mut out = Self {
            total: trades.len(),
            ..Default::default()
        };
        for t in trades {
            let pnl = t.pnl();
            out.net_pnl += pnl;
            if pnl > 0.0 {
                out.wins += 1;
            } else if pnl < 0.0 {
                out.losses += 1;
            } else {
                out.breakeven += 1;
            }
        }
        out
    }
}
