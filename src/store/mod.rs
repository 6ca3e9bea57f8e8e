pub mod json_file;

pub use json_file::JsonFileStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Trade, UserSettings};

/// Persistence for one user's journal. An empty `user_id` reads as an empty
/// journal and makes writes no-ops.
#[async_trait]
pub trait TradeStore: Send + Sync {
    async fn get_trades(&self, user_id: &str) -> Result<Vec<Trade>>;
    /// Insert, or replace the trade with the same id.
    async fn save_trade(&self, user_id: &str, trade: &Trade) -> Result<()>;
    async fn delete_trade(&self, user_id: &str, id: &str) -> Result<()>;
    /// Stored settings, or defaults when none were saved.
    async fn get_settings(&self, user_id: &str) -> Result<UserSettings>;
    async fn save_settings(&self, user_id: &str, settings: &UserSettings) -> Result<()>;
}
