use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{JournalError, Result};
use crate::models::{Trade, UserSettings};
use crate::store::TradeStore;

const TRADES_FILE: &str = "trades.json";
const SETTINGS_FILE: &str = "settings.json";
const TMP_SUFFIX: &str = ".tmp";

/// Keeps each user's journal under `<root>/<user_id>/` as pretty JSON.
pub struct JsonFileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_file(&self, user_id: &str, name: &str) -> PathBuf {
        self.root.join(user_id).join(name)
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        let display = path.display().to_string();
        match fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|e| JournalError::json(display, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::io(display, e)),
        }
    }

    /// Writes a sibling `.tmp` file and renames it over `path`, so readers
    /// see either the old or the new contents.
    async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
        let display = path.display().to_string();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| JournalError::io(parent.display().to_string(), e))?;
        }
        let json =
            serde_json::to_string_pretty(value).map_err(|e| JournalError::json(&display, e))?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(TMP_SUFFIX);
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json)
            .await
            .map_err(|e| JournalError::io(tmp.display().to_string(), e))?;
        fs::rename(&tmp, path)
            .await
            .map_err(|e| JournalError::io(display, e))
    }
}

#[async_trait]
impl TradeStore for JsonFileStore {
    async fn get_trades(&self, user_id: &str) -> Result<Vec<Trade>> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }
        let path = self.user_file(user_id, TRADES_FILE);
        let trades: Vec<Trade> = Self::read_json(&path).await?.unwrap_or_default();
        debug!("Loaded {} trades from {}", trades.len(), path.display());
        Ok(trades)
    }

    async fn save_trade(&self, user_id: &str, trade: &Trade) -> Result<()> {
        if user_id.is_empty() {
            return Ok(());
        }
        let _guard = self.write_lock.lock().await;
        let path = self.user_file(user_id, TRADES_FILE);
        let mut trades: Vec<Trade> = Self::read_json(&path).await?.unwrap_or_default();

        let mut stored = trade.clone();
        stored.user_id = user_id.to_string();
        match trades.iter_mut().find(|t| t.id == stored.id) {
            Some(existing) => *existing = stored,
            None => trades.push(stored),
        }

        Self::write_json(&path, &trades).await?;
        info!("Saved trade {} for {}", trade.id, user_id);
        Ok(())
    }

    async fn delete_trade(&self, user_id: &str, id: &str) -> Result<()> {
        if user_id.is_empty() {
            return Ok(());
        }
        let _guard = self.write_lock.lock().await;
        let path = self.user_file(user_id, TRADES_FILE);
        let Some(mut trades) = Self::read_json::<Vec<Trade>>(&path).await? else {
            return Ok(());
        };

        let before = trades.len();
        trades.retain(|t| t.id != id);
        if trades.len() == before {
            debug!("Trade {} not found for {}", id, user_id);
            return Ok(());
        }

        Self::write_json(&path, &trades).await?;
        info!("Deleted trade {} for {}", id, user_id);
        Ok(())
    }

    async fn get_settings(&self, user_id: &str) -> Result<UserSettings> {
        if user_id.is_empty() {
            return Ok(UserSettings::default());
        }
        let path = self.user_file(user_id, SETTINGS_FILE);
        Ok(Self::read_json(&path).await?.unwrap_or_default())
    }

    async fn save_settings(&self, user_id: &str, settings: &UserSettings) -> Result<()> {
        if user_id.is_empty() {
            return Ok(());
        }
        let _guard = self.write_lock.lock().await;
        let path = self.user_file(user_id, SETTINGS_FILE);
        Self::write_json(&path, settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_trade, ymd};
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_files_read_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.get_trades("alice").await.unwrap().is_empty());
        assert_eq!(store.get_settings("alice").await.unwrap(), UserSettings::default());
    }

    #[tokio::test]
    async fn save_upserts_by_id() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let mut trade = make_trade(ymd(2024, 5, 2), 40.0);
        trade.id = "a".to_string();
        trade.user_id = String::new();
        store.save_trade("alice", &trade).await.unwrap();

        trade.pnl = -15.0;
        store.save_trade("alice", &trade).await.unwrap();

        let mut other = make_trade(ymd(2024, 5, 3), 5.0);
        other.id = "b".to_string();
        store.save_trade("alice", &other).await.unwrap();

        let trades = store.get_trades("alice").await.unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].id, "a");
        assert_eq!(trades[0].pnl, -15.0);
        assert_eq!(trades[0].user_id, "alice");
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store
            .save_trade("alice", &make_trade(ymd(2024, 5, 2), 1.0))
            .await
            .unwrap();
        assert!(store.get_trades("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_matching_id() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        for (id, pnl) in [("a", 1.0), ("b", 2.0)] {
            let mut t = make_trade(ymd(2024, 5, 2), pnl);
            t.id = id.to_string();
            store.save_trade("alice", &t).await.unwrap();
        }

        store.delete_trade("alice", "a").await.unwrap();
        store.delete_trade("alice", "missing").await.unwrap();
        store.delete_trade("carol", "a").await.unwrap();

        let trades = store.get_trades("alice").await.unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].id, "b");
    }

    #[tokio::test]
    async fn empty_user_is_a_no_op() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store
            .save_trade("", &make_trade(ymd(2024, 5, 2), 1.0))
            .await
            .unwrap();
        assert!(store.get_trades("").await.unwrap().is_empty());
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let settings = UserSettings {
            initial_capital: 2_500.0,
            monthly_goal: 300.0,
            risk_per_trade: 0.5,
        };
        store.save_settings("alice", &settings).await.unwrap();
        assert_eq!(store.get_settings("alice").await.unwrap(), settings);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let user_dir = dir.path().join("alice");
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::write(user_dir.join(TRADES_FILE), "{ not json").unwrap();

        let err = store.get_trades("alice").await.unwrap_err();
        assert!(matches!(err, JournalError::Json { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn reads_during_saves_see_whole_files() {
        let dir = tempdir().unwrap();
        let store = std::sync::Arc::new(JsonFileStore::new(dir.path()));

        let seed: Vec<Trade> = (0..3000)
            .map(|i| {
                let mut t = make_trade(ymd(2024, 5, i % 28 + 1), i as f64 - 1500.0);
                t.id = format!("seed{}", i);
                t.user_id = "alice".to_string();
                t
            })
            .collect();
        JsonFileStore::write_json(&store.user_file("alice", TRADES_FILE), &seed)
            .await
            .unwrap();

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    let mut t = make_trade(ymd(2024, 6, 1), i as f64);
                    t.id = format!("new{}", i);
                    store.save_trade("alice", &t).await.unwrap();
                }
            })
        };

        loop {
            let trades = store.get_trades("alice").await.unwrap();
            assert!(trades.len() >= seed.len());
            if writer.is_finished() {
                break;
            }
        }
        writer.await.unwrap();

        assert_eq!(store.get_trades("alice").await.unwrap().len(), 3200);
        let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("alice"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(TMP_SUFFIX))
            .collect();
        assert!(leftovers.is_empty());
    }
}
