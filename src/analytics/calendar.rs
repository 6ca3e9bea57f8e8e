use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::HasPnl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOutcome {
    NoTrades,
    Profit,
    Loss,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub trade_count: usize,
    pub pnl: f64,
    pub outcome: DayOutcome,
}

pub fn trades_on<T: HasPnl>(trades: &[T], date: NaiveDate) -> Vec<&T> {
    trades.iter().filter(|t| t.closed_on() == date).collect()
}

/// Summed P&L and trade count per closing date.
pub fn daily_pnl<T: HasPnl>(trades: &[T]) -> BTreeMap<NaiveDate, (usize, f64)> {
    let mut days: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    for t in trades {
        let entry = days.entry(t.closed_on()).or_default();
        entry.0 += 1;
        entry.1 += t.pnl();
    }
    days
}

/// One entry per day of `year`-`month`; empty for an invalid month.
pub fn month_calendar<T: HasPnl>(trades: &[T], year: i32, month: u32) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let days = daily_pnl(trades);

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| {
            let (trade_count, pnl) = days.get(&date).copied().unwrap_or((0, 0.0));
            let outcome = if trade_count == 0 {
                DayOutcome::NoTrades
            } else if pnl > 0.0 {
                DayOutcome::Profit
            } else if pnl < 0.0 {
                DayOutcome::Loss
            } else {
                DayOutcome::Flat
            };
            CalendarDay {
                date,
                trade_count,
                pnl,
                outcome,
            }
        })
        .collect()
}
