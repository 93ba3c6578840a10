use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::model::{Member, Team};

/// Teams formed from one draw, plus whoever did not fit into a full team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub teams: Vec<Team>,
    /// The first `seeded` teams each carry exactly one star.
    pub seeded: usize,
    pub dropped: Vec<Member>,
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Shuffles the members, then groups them with [`split_into_teams`].
pub fn partition<R: Rng + ?Sized>(members: &[Member], group_size: usize, rng: &mut R) -> Partition {
    let mut order = members.to_vec();
    shuffle(&mut order, rng);
    split_into_teams(order, group_size)
}

/// Groups members in the order given.
///
/// Stars are dealt out first, one per team, each alongside `group_size - 1`
/// non-stars taken from the front. Remaining non-stars then fill teams of
/// `group_size`. Anyone left over that cannot complete a team is dropped, as
/// are all members when `group_size` is 0.
pub fn split_into_teams(ordered: Vec<Member>, group_size: usize) -> Partition {
    if group_size == 0 {
        return Partition {
            dropped: ordered,
            ..Partition::default()
        };
    }

    let (mut stars, non_stars): (Vec<Member>, Vec<Member>) =
        ordered.into_iter().partition(|m| m.is_star);
    let mut non_stars = VecDeque::from(non_stars);
    let partners = group_size - 1;
    let mut teams = Vec::new();

    while non_stars.len() >= partners {
        let Some(star) = stars.pop() else { break };
        let mut members = Vec::with_capacity(group_size);
        members.push(star);
        members.extend(non_stars.drain(..partners));
        teams.push(Team::new(members));
    }
    let seeded = teams.len();

    while non_stars.len() >= group_size {
        teams.push(Team::new(non_stars.drain(..group_size).collect()));
    }

    let mut dropped = stars;
    dropped.extend(non_stars);

    debug!(
        group_size,
        teams = teams.len(),
        seeded,
        dropped = dropped.len(),
        "members partitioned"
    );

    Partition {
        teams,
        seeded,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn plain(names: &[&str]) -> Vec<Member> {
        names.iter().map(|n| Member::create(n.to_string())).collect()
    }

    fn names(team: &Team) -> Vec<&str> {
        team.members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn four_plain_members_make_two_pairs() {
        let result = split_into_teams(plain(&["A", "B", "C", "D"]), 2);
        assert_eq!(result.teams.len(), 2);
        assert_eq!(names(&result.teams[0]), vec!["A", "B"]);
        assert_eq!(names(&result.teams[1]), vec!["C", "D"]);
        assert_eq!(result.seeded, 0);
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn odd_member_out_is_dropped() {
        let result = split_into_teams(plain(&["A", "B", "C"]), 2);
        assert_eq!(result.teams.len(), 1);
        assert_eq!(result.dropped.len(), 1);
        assert_eq!(result.dropped[0].name, "C");
    }

    #[test]
    fn star_leads_first_team() {
        let mut members = plain(&["B", "C", "D"]);
        members.insert(1, Member::star("A".into()));
        let result = split_into_teams(members, 2);
        assert_eq!(result.seeded, 1);
        assert_eq!(names(&result.teams[0]), vec!["A", "B"]);
        assert_eq!(names(&result.teams[1]), vec!["C", "D"]);
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn stars_are_taken_from_the_back() {
        let members = vec![
            Member::star("S1".into()),
            Member::star("S2".into()),
            Member::create("N1".into()),
            Member::create("N2".into()),
        ];
        let result = split_into_teams(members, 2);
        assert_eq!(names(&result.teams[0]), vec!["S2", "N1"]);
        assert_eq!(names(&result.teams[1]), vec!["S1", "N2"]);
    }

    #[test]
    fn surplus_stars_are_dropped() {
        let members = vec![
            Member::star("S1".into()),
            Member::star("S2".into()),
            Member::create("N1".into()),
        ];
        let result = split_into_teams(members, 2);
        assert_eq!(result.teams.len(), 1);
        assert_eq!(result.dropped.len(), 1);
        assert!(result.dropped[0].is_star);
    }

    #[test]
    fn group_size_one_makes_singletons_stars_first() {
        let members = vec![
            Member::create("N1".into()),
            Member::star("S1".into()),
            Member::create("N2".into()),
        ];
        let result = split_into_teams(members, 1);
        assert_eq!(result.teams.len(), 3);
        assert_eq!(result.seeded, 1);
        assert_eq!(names(&result.teams[0]), vec!["S1"]);
        assert!(result.teams.iter().all(|t| t.len() == 1));
    }

    #[test]
    fn group_size_zero_drops_everyone() {
        let result = split_into_teams(plain(&["A", "B"]), 0);
        assert!(result.teams.is_empty());
        assert_eq!(result.dropped.len(), 2);
    }

    #[test]
    fn too_few_members_form_no_team() {
        let result = split_into_teams(plain(&["A", "B"]), 3);
        assert!(result.teams.is_empty());
        assert_eq!(result.dropped.len(), 2);
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
        for _ in 0..6000 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!((800..1200).contains(&count), "{:?} drawn {} times", perm, count);
        }
    }
}
