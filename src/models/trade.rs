use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, MarketType, TradeOutcome};

/// A journaled trade. Field names match the columns of the `trades` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    /// Local calendar date the trade closed on.
    pub date: NaiveDate,
    #[serde(default)]
    pub asset: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub market_type: MarketType,

    #[serde(default)]
    pub entry_price: f64,
    #[serde(default)]
    pub exit_price: f64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub invested_value: f64,
    pub pnl: f64,

    #[serde(default)]
    pub stop_loss: f64,
    #[serde(default)]
    pub take_profit: f64,

    #[serde(default)]
    pub entry_reason: String,
    #[serde(default)]
    pub exit_reason: String,
    #[serde(default)]
    pub notes: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl Trade {
    pub fn outcome(&self) -> TradeOutcome {
        TradeOutcome::from_pnl(self.pnl)
    }
}

/// Anything that closed on a date with a realized P&L.
pub trait HasPnl {
    fn pnl(&self) -> f64;
    fn closed_on(&self) -> NaiveDate;
}

impl HasPnl for Trade {
    fn pnl(&self) -> f64 {
        self.pnl
    }
    fn closed_on(&self) -> NaiveDate {
        self.date
    }
}

impl<T: HasPnl + ?Sized> HasPnl for &T {
    fn pnl(&self) -> f64 {
        (**self).pnl()
    }
    fn closed_on(&self) -> NaiveDate {
        (**self).closed_on()
    }
}
