//! Durable, capped list of past generation results.

mod entry;
pub use entry::HistoryEntry;

mod store;
pub use store::{HistoryStore, HISTORY_LIMIT};

mod panel;
pub use panel::HistoryPanel;
