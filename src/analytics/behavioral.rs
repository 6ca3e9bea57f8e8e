use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::scoring::{self, BASELINE_SCORE};
use crate::analytics::stats::TradeStats;
use crate::analytics::verdict::classify;
use crate::analytics::window::ScoringWindow;
use crate::models::{Trade, UserSettings, Verdict};

pub const INSUFFICIENT_DATA_FEEDBACK: &str =
    "Not enough data this month for an accurate analysis";

/// Shown by callers when a non-empty window fires no rule.
pub const NO_FEEDBACK_MESSAGE: &str = "No specific feedback at the moment";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralMetrics {
    pub score: i32,
    pub verdict: Verdict,
    pub win_rate: f64,
    pub profit_factor: f64,
    pub consecutive_losses: usize,
    pub total_trades: usize,
    pub feedback: Vec<String>,
}

impl BehavioralMetrics {
    fn insufficient_data() -> Self {
        Self {
            score: BASELINE_SCORE,
            verdict: Verdict::Cautela,
            win_rate: 0.0,
            profit_factor: 0.0,
            consecutive_losses: 0,
            total_trades: 0,
            feedback: vec![INSUFFICIENT_DATA_FEEDBACK.to_string()],
        }
    }
}

/// Scores the trades that closed in the calendar month of `reference`.
///
/// `settings` is not read by the current rule set.
pub fn compute_behavioral_metrics(
    trades: &[Trade],
    _settings: &UserSettings,
    reference: NaiveDate,
) -> BehavioralMetrics {
    let window = ScoringWindow::containing(reference);
    let in_window = window.select(trades);

    if in_window.is_empty() {
        debug!("No trades in {}, returning default metrics", window);
        return BehavioralMetrics::insufficient_data();
    }

    let stats = TradeStats::from_trades(&in_window);
    let card = scoring::score(&stats);
    let verdict = classify(card.score);

    debug!(
        "Scored {}: {} trades | WR {:.1}% | PF {:.2} | streak {} -> {} ({})",
        window,
        stats.total,
        stats.win_rate,
        stats.profit_factor,
        stats.max_consecutive_losses,
        card.score,
        verdict
    );

    BehavioralMetrics {
        score: card.score,
        verdict,
        win_rate: stats.win_rate,
        profit_factor: stats.profit_factor,
        consecutive_losses: stats.max_consecutive_losses,
        total_trades: stats.total,
        feedback: card.feedback(),
    }
}
