use chrono::NaiveDate;

use crate::models::{Trade, UserSettings};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A trade closed on `date` with the given P&L; every other field is defaulted.
pub fn make_trade(date: NaiveDate, pnl: f64) -> Trade {
    Trade {
        id: format!("{}-{}", date, pnl),
        user_id: "test-user".to_string(),
        date,
        asset: "WINJ24".to_string(),
        pnl,
        ..Default::default()
    }
}

/// Trades closed on consecutive days of the given month, starting on the 1st.
pub fn make_daily_trades(year: i32, month: u32, pnls: &[f64]) -> Vec<Trade> {
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| {
            let mut t = make_trade(ymd(year, month, i as u32 + 1), pnl);
            t.id = format!("t{}", i);
            t
        })
        .collect()
}

pub fn default_test_settings() -> UserSettings {
    UserSettings {
        initial_capital: 10_000.0,
        monthly_goal: 1_000.0,
        risk_per_trade: 1.0,
    }
}
