use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::stats::PnlBreakdown;
use crate::models::{HasPnl, UserSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// `None` for the starting point.
    pub date: Option<NaiveDate>,
    pub balance: f64,
    pub pnl: f64,
}

/// All-time wallet view over the full journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalSummary {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub total_pnl: f64,
    pub initial_capital: f64,
    pub current_balance: f64,
    pub variation_pct: f64,
    pub monthly_goal: f64,
    pub goal_progress_pct: f64,
    pub goal_remaining: f64,
    pub equity_curve: Vec<EquityPoint>,
}

impl JournalSummary {
    pub fn from_trades<T: HasPnl>(trades: &[T], settings: &UserSettings) -> Self {
        let breakdown = PnlBreakdown::from_trades(trades);
        let total_pnl = breakdown.net_pnl;
        let initial = settings.initial_capital;

        let variation_pct = if initial > 0.0 {
            total_pnl / initial * 100.0
        } else {
            0.0
        };

        // An unset goal counts as 1 so progress stays finite.
        let goal = if settings.monthly_goal == 0.0 {
            1.0
        } else {
            settings.monthly_goal
        };
        let goal_progress_pct = (total_pnl / goal * 100.0).clamp(0.0, 100.0);
        let goal_remaining = (goal - total_pnl).max(0.0);

        JournalSummary {
            total_trades: breakdown.total,
            wins: breakdown.wins,
            losses: breakdown.losses,
            breakeven: breakdown.breakeven,
            total_pnl,
            initial_capital: initial,
            current_balance: initial + total_pnl,
            variation_pct,
            monthly_goal: goal,
            goal_progress_pct,
            goal_remaining,
            equity_curve: equity_curve(trades, initial),
        }
    }
}

/// Running balance after each trade in date order, led by the starting point.
pub fn equity_curve<T: HasPnl>(trades: &[T], initial_capital: f64) -> Vec<EquityPoint> {
    let mut sorted: Vec<&T> = trades.iter().collect();
    sorted.sort_by_key(|t| t.closed_on());

    let mut curve = Vec::with_capacity(sorted.len() + 1);
    curve.push(EquityPoint {
        date: None,
        balance: initial_capital,
        pnl: 0.0,
    });

    let mut balance = initial_capital;
    for t in sorted {
        balance += t.pnl();
        curve.push(EquityPoint {
            date: Some(t.closed_on()),
            balance,
            pnl: t.pnl(),
        });
    }
    curve
}
