use tracing::debug;

use crate::error::{PickerError, PickerResult};
use crate::model::{Id, Member, MemberStore};
use crate::validation;

/// Appends one non-starred member per comma-separated name.
/// Returns the members added; blank input adds nothing.
pub fn add_members(store: &mut MemberStore, raw: &str) -> Vec<Member> {
    let added: Vec<Member> = validation::split_names(raw)
        .into_iter()
        .map(Member::create)
        .collect();

    if !added.is_empty() {
        debug!(count = added.len(), "members added");
        store.members_mut().extend(added.iter().cloned());
    }
    added
}

/// Removes every member with this exact name. Returns how many were removed.
pub fn remove_by_name(store: &mut MemberStore, name: &str) -> usize {
    let members = store.members_mut();
    let before = members.len();
    members.retain(|m| m.name != name);
    before - members.len()
}

pub fn remove_by_id(store: &mut MemberStore, id: Id<Member>) -> PickerResult<Member> {
    let members = store.members_mut();
    let index = members
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| not_found(id))?;
    Ok(members.remove(index))
}

/// Flips the star flag on every member with this exact name.
/// Returns how many were toggled.
pub fn toggle_star_by_name(store: &mut MemberStore, name: &str) -> usize {
    let mut toggled = 0;
    for member in store.members_mut().iter_mut().filter(|m| m.name == name) {
        member.is_star = !member.is_star;
        toggled += 1;
    }
    toggled
}

pub fn toggle_star_by_id(store: &mut MemberStore, id: Id<Member>) -> PickerResult<Member> {
    let member = store
        .members_mut()
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| not_found(id))?;
    member.is_star = !member.is_star;
    Ok(member.clone())
}

fn not_found(id: Id<Member>) -> PickerError {
    PickerError::NotFound {
        entity_type: "Member".into(),
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_ignores_blank_input() {
        let mut store = MemberStore::new();
        assert!(add_members(&mut store, " , ,").is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn added_members_are_not_stars() {
        let mut store = MemberStore::new();
        add_members(&mut store, "An, Binh");
        assert_eq!(store.len(), 2);
        assert_eq!(store.star_count(), 0);
    }

    #[test]
    fn remove_by_id_leaves_namesakes() {
        let mut store = MemberStore::new();
        let added = add_members(&mut store, "An, An");
        let removed = remove_by_id(&mut store, added[0].id).unwrap();
        assert_eq!(removed.id, added[0].id);
        assert_eq!(store.members(), &added[1..]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = MemberStore::new();
        let err = toggle_star_by_id(&mut store, Id::generate()).unwrap_err();
        assert!(matches!(err, PickerError::NotFound { .. }));
    }
}
