use serde::{Deserialize, Serialize};

/// A single pairing between two team labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub home: String,
    pub away: String,
}

impl Match {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    pub fn involves(&self, label: &str) -> bool {
        self.home == label || self.away == label
    }
}

/// Matches played concurrently.
pub type Round = Vec<Match>;
