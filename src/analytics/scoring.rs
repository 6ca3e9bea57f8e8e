use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analytics::stats::TradeStats;

pub const BASELINE_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

const HIGH_WIN_RATE: f64 = 60.0;
const LOW_WIN_RATE: f64 = 40.0;
const HEALTHY_PROFIT_FACTOR: f64 = 1.5;
const BREAK_EVEN_PROFIT_FACTOR: f64 = 1.0;
const TILT_STREAK: usize = 3;
const OVERTRADING_VOLUME: usize = 50;

/// A scoring rule that fired, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    HighWinRate,
    LowWinRate,
    HealthyProfitFactor,
    NegativeProfitFactor,
    LossStreak,
    Overtrading,
}

impl Rule {
    pub fn delta(&self) -> i32 {
        match self {
            Rule::HighWinRate => 20,
            Rule::LowWinRate => -10,
            Rule::HealthyProfitFactor => 20,
            Rule::NegativeProfitFactor => -20,
            Rule::LossStreak => -15,
            Rule::Overtrading => -10,
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            Rule::HighWinRate => "Great win rate",
            Rule::LowWinRate => "Win rate below ideal",
            Rule::HealthyProfitFactor => "Healthy profit factor",
            Rule::NegativeProfitFactor => {
                "Negative profit factor \u{2014} losing more than winning"
            }
            Rule::LossStreak => "Loss streak detected (tilt)",
            Rule::Overtrading => "Excessive trade volume (overtrading)",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.feedback(), self.delta())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub score: i32,
    pub triggered: Vec<Rule>,
}

impl ScoreCard {
    pub fn feedback(&self) -> Vec<String> {
        self.triggered.iter().map(|r| r.feedback().to_string()).collect()
    }
}

/// Rules that fire for `stats`. Win-rate and profit-factor rules are
/// else-if pairs; streak and volume are independent.
pub fn evaluate_rules(stats: &TradeStats) -> Vec<Rule> {
    let mut fired = Vec::new();

    if stats.win_rate > HIGH_WIN_RATE {
        fired.push(Rule::HighWinRate);
    } else if stats.win_rate < LOW_WIN_RATE {
        fired.push(Rule::LowWinRate);
    }

    if stats.profit_factor > HEALTHY_PROFIT_FACTOR {
        fired.push(Rule::HealthyProfitFactor);
    } else if stats.profit_factor < BREAK_EVEN_PROFIT_FACTOR {
        fired.push(Rule::NegativeProfitFactor);
    }

    if stats.max_consecutive_losses > TILT_STREAK {
        fired.push(Rule::LossStreak);
    }

    if stats.total > OVERTRADING_VOLUME {
        fired.push(Rule::Overtrading);
    }

    fired
}

/// Baseline plus every fired rule's delta, clamped to `[0, 100]`.
pub fn score(stats: &TradeStats) -> ScoreCard {
    let triggered = evaluate_rules(stats);
    let raw = BASELINE_SCORE + triggered.iter().map(Rule::delta).sum::<i32>();
    ScoreCard {
        score: raw.clamp(MIN_SCORE, MAX_SCORE),
        triggered,
    }
}
