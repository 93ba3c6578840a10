use tracing::debug;

use crate::model::{team_label, team_labels, Match, Round, Team};

/// Single round-robin over `team_count` teams using the circle method.
///
/// Labels are taken from `labels` by position; missing ones fall back to
/// "Team N". With an odd count a phantom slot is added and whoever meets it
/// sits the round out. Fewer than two teams yields no rounds.
pub fn round_robin(team_count: usize, labels: &[String]) -> Vec<Round> {
    if team_count < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<String>> = (0..team_count)
        .map(|i| Some(labels.get(i).cloned().unwrap_or_else(|| team_label(i))))
        .collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    let mut rounds = Vec::with_capacity(n - 1);

    for round in 0..n - 1 {
        let mut matches = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (&slots[i], &slots[n - 1 - i]) {
                // The fixed slot alternates home and away.
                if i == 0 && round % 2 == 1 {
                    matches.push(Match::new(b.clone(), a.clone()));
                } else {
                    matches.push(Match::new(a.clone(), b.clone()));
                }
            }
        }
        rounds.push(matches);
        slots[1..].rotate_right(1);
    }

    debug!(team_count, rounds = rounds.len(), "round robin generated");
    rounds
}

/// Schedule for generated teams, labelled "Team 1".."Team N" in team order.
pub fn schedule_for(teams: &[Team]) -> Vec<Round> {
    round_robin(teams.len(), &team_labels(teams.len()))
}

/// The label with no match in `round`, if any.
pub fn bye_for<'a>(round: &[Match], labels: &'a [String]) -> Option<&'a str> {
    labels
        .iter()
        .find(|label| !round.iter().any(|m| m.involves(label)))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_pairs(rounds: &[Round]) -> Vec<(String, String)> {
        rounds
            .iter()
            .flatten()
            .map(|m| {
                if m.home < m.away {
                    (m.home.clone(), m.away.clone())
                } else {
                    (m.away.clone(), m.home.clone())
                }
            })
            .collect()
    }

    #[test]
    fn fewer_than_two_teams_play_nothing() {
        assert!(round_robin(0, &[]).is_empty());
        assert!(round_robin(1, &team_labels(1)).is_empty());
    }

    #[test]
    fn two_teams_play_once() {
        let rounds = round_robin(2, &team_labels(2));
        assert_eq!(rounds, vec![vec![Match::new("Team 1", "Team 2")]]);
    }

    #[test]
    fn every_pair_meets_exactly_once() {
        for n in 2..=11 {
            let rounds = round_robin(n, &team_labels(n));
            let pairs = all_pairs(&rounds);
            let unique: HashSet<_> = pairs.iter().cloned().collect();
            assert_eq!(pairs.len(), n * (n - 1) / 2, "n = {}", n);
            assert_eq!(unique.len(), pairs.len(), "n = {}", n);
            assert!(pairs.iter().all(|(a, b)| a != b));
        }
    }

    #[test]
    fn round_counts_follow_parity() {
        let even = round_robin(6, &team_labels(6));
        assert_eq!(even.len(), 5);
        assert!(even.iter().all(|r| r.len() == 3));

        let odd = round_robin(5, &team_labels(5));
        assert_eq!(odd.len(), 5);
        assert!(odd.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn no_team_plays_twice_in_a_round() {
        let labels = team_labels(8);
        for round in round_robin(8, &labels) {
            let mut seen = HashSet::new();
            for m in &round {
                assert!(seen.insert(m.home.clone()));
                assert!(seen.insert(m.away.clone()));
            }
        }
    }

    #[test]
    fn each_team_sits_out_once_with_odd_count() {
        let labels = team_labels(3);
        let rounds = round_robin(3, &labels);
        let byes: HashSet<&str> = rounds.iter().filter_map(|r| bye_for(r, &labels)).collect();
        assert_eq!(byes.len(), 3);
    }

    #[test]
    fn no_bye_with_even_count() {
        let labels = team_labels(4);
        assert!(round_robin(4, &labels).iter().all(|r| bye_for(r, &labels).is_none()));
    }

    #[test]
    fn custom_labels_are_used() {
        let labels = vec!["Red".to_string(), "Blue".to_string()];
        let rounds = round_robin(2, &labels);
        assert_eq!(rounds[0][0], Match::new("Red", "Blue"));
    }

    #[test]
    fn missing_labels_fall_back_to_numbering() {
        let rounds = round_robin(2, &["Red".to_string()]);
        assert_eq!(rounds[0][0], Match::new("Red", "Team 2"));
    }
}
