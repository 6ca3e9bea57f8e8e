pub mod behavioral;
pub mod calendar;
pub mod scoring;
pub mod stats;
pub mod summary;
pub mod verdict;
pub mod window;

pub use behavioral::{compute_behavioral_metrics, BehavioralMetrics};
pub use stats::TradeStats;
pub use summary::JournalSummary;
pub use window::ScoringWindow;
