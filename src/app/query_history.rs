use std::collections::{HashSet, VecDeque};

use chrono::{DateTime, Local};

use crate::domain::HistoryEntry;

pub const HISTORY_MAX_SIZE: usize = 10;

/// Most-recent-first list of run queries, capped and deduplicated by text.
#[derive(Debug, Clone)]
pub struct QueryHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(HISTORY_MAX_SIZE)
    }
}

impl QueryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Restores persisted entries (newest first), dropping repeated query
    /// texts and keeping at most `HISTORY_MAX_SIZE`. Ids continue after the
    /// largest one seen.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut history = Self::default();
        history.next_id = entries
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |id| id.saturating_add(1));

        let mut seen = HashSet::new();
        history.entries = entries
            .into_iter()
            .filter(|e| seen.insert(e.query.clone()))
            .take(history.capacity)
            .collect();
        history
    }

    /// Adds `query` at the front. An entry with the same text moves to the
    /// front instead of being duplicated; the oldest entry falls off past
    /// capacity.
    pub fn record(&mut self, query: &str, at: DateTime<Local>) -> &HistoryEntry {
        self.entries.retain(|e| e.query != query);
        let entry = HistoryEntry::new(self.next_id, query, at);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries(history: &QueryHistory) -> Vec<&str> {
        history.iter().map(|e| e.query.as_str()).collect()
    }

    #[test]
    fn record_puts_newest_first() {
        let mut history = QueryHistory::default();

        history.record("SELECT 1", Local::now());
        history.record("SELECT 2", Local::now());

        assert_eq!(queries(&history), vec!["SELECT 2", "SELECT 1"]);
    }

    #[test]
    fn duplicate_moves_to_front() {
        let mut history = QueryHistory::default();
        history.record("A", Local::now());
        history.record("B", Local::now());

        history.record("A", Local::now());

        assert_eq!(queries(&history), vec!["A", "B"]);
    }

    #[test]
    fn twelve_distinct_runs_keep_ten_newest() {
        let mut history = QueryHistory::default();

        for i in 1..=12 {
            history.record(&format!("Q{i}"), Local::now());
        }

        assert_eq!(history.len(), HISTORY_MAX_SIZE);
        assert_eq!(history.latest().unwrap().query, "Q12");
        assert_eq!(history.get(9).unwrap().query, "Q3");
    }

    #[test]
    fn ids_increase_per_run() {
        let mut history = QueryHistory::default();

        let first = history.record("A", Local::now()).id;
        let second = history.record("B", Local::now()).id;

        assert!(second > first);
    }

    #[test]
    fn from_entries_truncates_and_continues_ids() {
        let entries: Vec<HistoryEntry> = (1..=15)
            .rev()
            .map(|i| HistoryEntry::new(i, format!("Q{i}"), Local::now()))
            .collect();

        let mut history = QueryHistory::from_entries(entries);
        let next = history.record("new", Local::now()).id;

        assert_eq!(history.len(), HISTORY_MAX_SIZE);
        assert_eq!(history.get(1).unwrap().query, "Q15");
        assert_eq!(next, 16);
    }

    #[test]
    fn from_entries_drops_repeated_queries() {
        let entries = vec![
            HistoryEntry::new(3, "A", Local::now()),
            HistoryEntry::new(2, "B", Local::now()),
            HistoryEntry::new(1, "A", Local::now()),
        ];

        let history = QueryHistory::from_entries(entries);

        assert_eq!(queries(&history), vec!["A", "B"]);
        assert_eq!(history.latest().unwrap().id, 3);
    }

    #[test]
    fn from_entries_with_max_id_does_not_overflow() {
        let entries = vec![HistoryEntry::new(u64::MAX, "A", Local::now())];

        let mut history = QueryHistory::from_entries(entries);
        let next = history.record("B", Local::now()).id;

        assert_eq!(next, u64::MAX);
        assert_eq!(queries(&history), vec!["B", "A"]);
    }

    #[test]
    fn from_empty_entries_starts_at_one() {
        let mut history = QueryHistory::from_entries(Vec::new());

        assert_eq!(history.record("A", Local::now()).id, 1);
    }
}
