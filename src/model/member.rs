use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A participant. Names are not unique; `id` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub id: Id<Member>,
    pub name: String,
    #[serde(default)]
    pub is_star: bool,
}

impl Member {
    pub fn create(name: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            is_star: false,
        }
    }

    pub fn star(name: String) -> Self {
        let mut m = Self::create(name);
        m.is_star = true;
        m
    }
}

/// Ordered list of participants, in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
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

    /// Member at a 1-based list position, as shown to the user.
    pub fn at_position(&self, position: usize) -> Option<&Member> {
        position.checked_sub(1).and_then(|i| self.members.get(i))
    }

    pub fn find_by_id(&self, id: Id<Member>) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub(crate) fn members_mut(&mut self) -> &mut Vec<Member> {
        &mut self.members
    }
}
