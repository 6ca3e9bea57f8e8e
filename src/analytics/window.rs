use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::HasPnl;

/// A calendar month used as the scoring window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringWindow {
    pub year: i32,
    pub month: u32,
}

impl ScoringWindow {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Trades closed inside this window, in input order.
    pub fn select<'a, T: HasPnl>(&self, trades: &'a [T]) -> Vec<&'a T> {
        trades
            .iter()
            .filter(|t| self.contains(t.closed_on()))
            .collect()
    }
}

impl fmt::Display for ScoringWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
