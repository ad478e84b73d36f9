//! Instant Runoff Voting (IRV), with equal-rank ("ER-IRV") fractional vote splitting,
//! modified to return a total ordering rather than stopping at the first majority.

use std::collections::{BTreeSet, HashMap};

use bl_core::numeric::lcm_range;
use bl_core::{maybe_tied, normalize, regrouped, Ballot, CandidateId, Ranking};

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let scale = lcm_range(candidates.len() as u64);
    let total_multiplicity: u64 = ballots.iter().map(|b| b.multiplicity).sum();
    let majority_doubled = total_multiplicity * scale;

    let mut remaining: BTreeSet<CandidateId> = candidates.clone();
    let mut winners: Ranking = Vec::new();
    let mut losers: Ranking = Vec::new();

    while !remaining.is_empty() {
        let mut totals: HashMap<CandidateId, u64> =
            remaining.iter().map(|c| (c.clone(), 0)).collect();

        for ballot in ballots {
            for row in normalize(&ballot.ranking) {
                let possible: BTreeSet<CandidateId> =
                    row.intersection(&remaining).cloned().collect();
                if !possible.is_empty() {
                    let weight = ballot.multiplicity * scale;
                    let share = weight / possible.len() as u64;
                    for candidate in &possible {
                        *totals.get_mut(candidate).unwrap() += share;
                    }
                    break;
                }
            }
        }

        let groups = regrouped(totals.clone(), true);
        let top_group = groups.first().cloned().unwrap_or_default();
        let top_value = totals[&top_group[0]];

        if top_value * 2 > majority_doubled {
            for candidate in &top_group {
                remaining.remove(candidate);
            }
            winners.push(maybe_tied(top_group.into_iter().collect()));
        } else {
            let bottom_group = groups.last().cloned().unwrap_or_default();
            for candidate in &bottom_group {
                remaining.remove(candidate);
            }
            losers.insert(0, maybe_tied(bottom_group.into_iter().collect()));
        }
    }

    winners.into_iter().chain(losers).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bl_core::RankRow;

    fn c(s: &str) -> CandidateId {
        s.parse().unwrap()
    }

    fn ballot(order: &[&str], multiplicity: u64) -> Ballot {
        Ballot::new(
            order.iter().map(|s| RankRow::Single(c(s))).collect(),
            multiplicity,
        )
        .unwrap()
    }

    #[test]
    fn majority_first_choice_wins_outright() {
        let ballots = vec![ballot(&["A", "B", "C"], 6), ballot(&["B", "C", "A"], 4)];
        let candidates: BTreeSet<_> = ["A", "B", "C"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking[0], RankRow::Single(c("A")));
    }

    #[test]
    fn elimination_redistributes_second_choices() {
        let ballots = vec![
            ballot(&["A", "C"], 4),
            ballot(&["B", "C"], 3),
            ballot(&["C", "A"], 2),
        ];
        let candidates: BTreeSet<_> = ["A", "B", "C"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        // B is eliminated first (fewest first-choice votes); its ballots have no
        // remaining second choice among {A, C}, so A keeps its first-round plurality.
        assert_eq!(ranking[0], RankRow::Single(c("A")));
    }

    #[test]
    fn monotonicity_failure_scenario() {
        // A textbook IRV non-monotonicity instance: raising a losing candidate's
        // support changes who is eliminated first and flips the final winner.
        let ballots = vec![
            ballot(&["A", "B", "C"], 6),
            ballot(&["B", "C", "A"], 5),
            ballot(&["C", "A", "B"], 4),
        ];
        let candidates: BTreeSet<_> = ["A", "B", "C"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking.len(), 3);
    }
}
