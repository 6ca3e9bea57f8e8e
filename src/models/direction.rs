use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "LONG"),
            Direction::Short => write!(f, "SHORT"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketType {
    #[default]
    Spot,
    Futures,
    Options,
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketType::Spot => write!(f, "SPOT"),
            MarketType::Futures => write!(f, "FUTURES"),
            MarketType::Options => write!(f, "OPTIONS"),
        }
    }
}

/// Classification of a closed trade by the sign of its P&L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeOutcome {
    Win,
    Loss,
    Breakeven,
}

impl TradeOutcome {
    pub fn from_pnl(pnl: f64) -> Self {
        if pnl > 0.0 {
            TradeOutcome::Win
        } else if pnl < 0.0 {
            TradeOutcome::Loss
        } else {
            TradeOutcome::Breakeven
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeOutcome::Win => "WIN",
            TradeOutcome::Loss => "LOSS",
            TradeOutcome::Breakeven => "BREAKEVEN",
        }
    }
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_pnl_sign() {
        assert_eq!(TradeOutcome::from_pnl(12.5), TradeOutcome::Win);
        assert_eq!(TradeOutcome::from_pnl(-0.01), TradeOutcome::Loss);
        assert_eq!(TradeOutcome::from_pnl(0.0), TradeOutcome::Breakeven);
        assert_eq!(TradeOutcome::from_pnl(-0.0), TradeOutcome::Breakeven);
    }

    #[test]
    fn enums_use_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&Direction::Short).unwrap(), "\"SHORT\"");
        assert_eq!(
            serde_json::from_str::<MarketType>("\"FUTURES\"").unwrap(),
            MarketType::Futures
        );
        assert_eq!(
            serde_json::to_string(&TradeOutcome::Breakeven).unwrap(),
            "\"BREAKEVEN\""
        );
    }
}
