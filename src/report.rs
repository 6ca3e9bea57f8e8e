use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::behavioral::NO_FEEDBACK_MESSAGE;
use crate::analytics::{
    compute_behavioral_metrics, BehavioralMetrics, JournalSummary, ScoringWindow,
};
use crate::models::{Trade, UserSettings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalReport {
    pub user_id: String,
    pub reference_date: NaiveDate,
    pub window: ScoringWindow,
    pub behavior: BehavioralMetrics,
    pub summary: JournalSummary,
}

impl JournalReport {
    pub fn build(
        user_id: &str,
        trades: &[Trade],
        settings: &UserSettings,
        reference_date: NaiveDate,
    ) -> Self {
        JournalReport {
            user_id: user_id.to_string(),
            reference_date,
            window: ScoringWindow::containing(reference_date),
            behavior: compute_behavioral_metrics(trades, settings, reference_date),
            summary: JournalSummary::from_trades(trades, settings),
        }
    }

    pub fn render(&self) -> String {
        let b = &self.behavior;
        let s = &self.summary;
        let rule = "=".repeat(60);
        let divider = "  ───────────────────────────────────".to_string();

        let mut lines = vec![
            rule.clone(),
            format!("  TRADE JOURNAL: {}", self.user_id),
            rule.clone(),
            format!("  Reference:   {} (window {})", self.reference_date, self.window),
            String::new(),
            "  BEHAVIOR".to_string(),
            divider.clone(),
            format!("  Verdict:     {} ({})", b.verdict.headline(), b.verdict),
            format!("  Score:       {}/100", b.score),
            format!("  Trades:      {}", b.total_trades),
            format!("  Win Rate:    {:.1}%", b.win_rate),
            format!("  Profit Factor: {:.2}", b.profit_factor),
            format!("  Loss Streak: {}", b.consecutive_losses),
            String::new(),
            "  FEEDBACK".to_string(),
            divider.clone(),
        ];

        if b.feedback.is_empty() {
            lines.push(format!("  - {}", NO_FEEDBACK_MESSAGE));
        }
        lines.extend(b.feedback.iter().map(|line| format!("  - {}", line)));

        lines.extend([
            String::new(),
            "  WALLET".to_string(),
            divider,
            format!("  Balance:     {:.2}", s.current_balance),
            format!("  Total PnL:   {:+.2}", s.total_pnl),
            format!("  Variation:   {:+.2}%", s.variation_pct),
            format!("  Win/Loss/BE: {} / {} / {}", s.wins, s.losses, s.breakeven),
            format!(
                "  Goal:        {:.1}% of {:.2} ({:.2} to go)",
                s.goal_progress_pct, s.monthly_goal, s.goal_remaining
            ),
            rule,
        ]);

        lines.join("\n")
    }

    pub fn print_summary(&self) {
        println!("{}", self.render());
    }
}
