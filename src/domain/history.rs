use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A query that was run. `id` grows with each run in a session and across
/// sessions, so ordering by id matches run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub query: String,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(id: u64, query: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            id,
            query: query.into(),
            timestamp,
        }
    }
}
