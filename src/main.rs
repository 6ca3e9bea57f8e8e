use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::config::{parse_reference_date, Config};
use trade_journal::report::JournalReport;
use trade_journal::store::{JsonFileStore, TradeStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Optional reference date, defaulting to today in the configured zone
    let args: Vec<String> = std::env::args().collect();
    let reference = match args.get(1) {
        Some(raw) => parse_reference_date(raw)?,
        None => cfg.today(),
    };

    let store = JsonFileStore::new(&cfg.data_dir);
    let trades = store
        .get_trades(&cfg.user_id)
        .await
        .with_context(|| format!("loading trades for {}", cfg.user_id))?;
    let settings = store
        .get_settings(&cfg.user_id)
        .await
        .with_context(|| format!("loading settings for {}", cfg.user_id))?;

    info!(
        "Loaded {} trades for {} from {} (tz {})",
        trades.len(),
        cfg.user_id,
        store.root().display(),
        cfg.timezone_name()
    );

    let report = JournalReport::build(&cfg.user_id, &trades, &settings, reference);
    report.print_summary();

    Ok(())
}
