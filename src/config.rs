use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{JournalError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: String,
    pub user_id: String,

    /// Zone whose calendar defines the scoring window. `None` (JOURNAL_TZ
    /// unset) uses the host's local zone.
    pub timezone: Option<Tz>,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let timezone = match std::env::var("JOURNAL_TZ") {
            Ok(name) if !name.trim().is_empty() => Some(parse_timezone(&name)?),
            _ => None,
        };

        Ok(Config {
            data_dir: env("JOURNAL_DATA_DIR", "data"),
            user_id: env("JOURNAL_USER_ID", "local"),
            timezone,
            log_level: env("LOG_LEVEL", "INFO"),
        })
    }

    /// Local calendar date of `instant` in the configured zone.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self.timezone {
            Some(tz) => instant.with_timezone(&tz).date_naive(),
            None => instant.with_timezone(&Local).date_naive(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }

    pub fn timezone_name(&self) -> String {
        match self.timezone {
            Some(tz) => tz.name().to_string(),
            None => "host local".to_string(),
        }
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| JournalError::InvalidTimezone(name.to_string()))
}

pub fn parse_reference_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| JournalError::InvalidDate(raw.to_string()))
}
