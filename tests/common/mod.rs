#![allow(dead_code)]

use chrono::NaiveDate;
use trade_journal::models::Trade;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_trade(id: &str, date: NaiveDate, pnl: f64) -> Trade {
    Trade {
        id: id.to_string(),
        date,
        asset: "PETR4".to_string(),
        pnl,
        ..Default::default()
    }
}

/// Trades with the given P&Ls, two per day starting on the 1st of the month.
pub fn two_per_day(year: i32, month: u32, pnls: &[f64]) -> Vec<Trade> {
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| make_trade(&format!("t{}", i), ymd(year, month, i as u32 / 2 + 1), pnl))
        .collect()
}
