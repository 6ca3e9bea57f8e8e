pub mod direction;
pub mod settings;
pub mod trade;
pub mod verdict;

pub use direction::*;
pub use settings::UserSettings;
pub use trade::{HasPnl, Trade};
pub use verdict::Verdict;
