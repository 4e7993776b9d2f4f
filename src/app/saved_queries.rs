use chrono::{DateTime, Local};

use crate::domain::{SavedQuery, SavedQueryId};

/// Saved queries in insertion order, unique by name ignoring case.
#[derive(Debug, Clone, Default)]
pub struct SavedQueries {
    items: Vec<SavedQuery>,
}

impl SavedQueries {
    pub fn from_items(items: Vec<SavedQuery>) -> Self {
        Self { items }
    }

    /// Inserts a new entry, or overwrites the one whose name matches ignoring
    /// case. An overwritten entry keeps its id and position but takes the new
    /// name, text and timestamp.
    pub fn upsert(&mut self, name: &str, query: &str, at: DateTime<Local>) -> &SavedQuery {
        let index = match self.items.iter().position(|q| q.has_name(name)) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.name = name.to_string();
                existing.query = query.to_string();
                existing.timestamp = at;
                index
            }
            None => {
                self.items.push(SavedQuery::new(name, query, at));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &SavedQueryId) -> bool {
        let before = self.items.len();
        self.items.retain(|q| &q.id != id);
        self.items.len() != before
    }

    pub fn find(&self, id: &SavedQueryId) -> Option<&SavedQuery> {
        self.items.iter().find(|q| &q.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&SavedQuery> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedQuery> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<SavedQuery> {
        self.items.clone()
    }
}
