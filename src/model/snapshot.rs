use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ids::Id;

use super::member::Member;
use super::schedule::Round;
use super::team::Team;

/// The result of the last completed generation, in its persisted shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(rename = "savedMembers")]
    pub members: Vec<Member>,
    #[serde(rename = "savedTeams")]
    pub teams: Vec<Team>,
    #[serde(rename = "savedMatches")]
    pub rounds: Vec<Round>,
}

impl SnapshotData {
    /// Gives id-less members (from payloads predating member ids) stable
    /// ids: roster entries by position, team entries by matching an unclaimed
    /// roster entry with the same name and star flag.
    pub fn assign_missing_ids(&mut self) {
        for (i, member) in self.members.iter_mut().enumerate() {
            if member.id.is_nil() {
                member.id = Id::from_position(i);
            }
        }

        let mut claimed: HashSet<Id<Member>> = self
            .teams
            .iter()
            .flat_map(|t| &t.members)
            .filter(|m| !m.id.is_nil())
            .map(|m| m.id)
            .collect();
        let mut extra = self.members.len();

        for member in self.teams.iter_mut().flat_map(|t| t.members.iter_mut()) {
            if !member.id.is_nil() {
                continue;
            }
            let owner = self
                .members
                .iter()
                .find(|m| m.name == member.name && m.is_star == member.is_star && !claimed.contains(&m.id));
            member.id = match owner {
                Some(m) => m.id,
                None => {
                    extra += 1;
                    Id::from_position(extra - 1)
                }
            };
            claimed.insert(member.id);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Snapshot {
    #[default]
    Empty,
    Present(SnapshotData),
}

impl Snapshot {
    pub fn is_present(&self) -> bool {
        matches!(self, Snapshot::Present(_))
    }

    pub fn data(&self) -> Option<&SnapshotData> {
        match self {
            Snapshot::Present(data) => Some(data),
            Snapshot::Empty => None,
        }
    }

    pub fn into_data(self) -> Option<SnapshotData> {
        match self {
            Snapshot::Present(data) => Some(data),
            Snapshot::Empty => None,
        }
    }
}
