use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_CAPITAL: f64 = 10_000.0;
pub const DEFAULT_MONTHLY_GOAL: f64 = 1_000.0;
pub const DEFAULT_RISK_PER_TRADE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub initial_capital: f64,
    pub monthly_goal: f64,
    /// Percent of the account risked per trade.
    pub risk_per_trade: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            initial_capital: DEFAULT_INITIAL_CAPITAL,
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            risk_per_trade: DEFAULT_RISK_PER_TRADE,
        }
    }
}
