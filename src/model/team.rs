use serde::{Deserialize, Serialize};

use super::member::Member;

/// One generated team. Serialized as a bare array of members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    pub members: Vec<Member>,
}

impl Team {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn star_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_star).count()
    }
}

/// Display label for the team at `index` (0-based): "Team 1", "Team 2", ...
pub fn team_label(index: usize) -> String {
    format!("Team {}", index + 1)
}

pub fn team_labels(count: usize) -> Vec<String> {
    (0..count).map(team_label).collect()
}
