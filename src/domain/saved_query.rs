use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedQueryId(String);

impl SavedQueryId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SavedQueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SavedQueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named query kept across sessions. Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: SavedQueryId,
    pub name: String,
    pub query: String,
    pub timestamp: DateTime<Local>,
}

impl SavedQuery {
    pub fn new(name: impl Into<String>, query: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            id: SavedQueryId::new(),
            name: name.into(),
            query: query.into(),
            timestamp,
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
