//! Beatpath (Schulze method, Cloneproof Schwartz Sequential Dropping).

use std::collections::BTreeSet;

use bl_core::{maybe_tied, pairwise, Ballot, CandidateId, Graph, Majorities, Ranking};

fn beat_strength(graph: &Graph<CandidateId>, majorities: &Majorities, source: &CandidateId, sink: &CandidateId) -> u64 {
    let mut strength = 0;
    for path in graph.paths(source, sink) {
        let mut path_strength = u64::MAX;
        for window in path.windows(2) {
            let (a, b) = (&window[0], &window[1]);
            let weight = majorities.get(&(a.clone(), b.clone())).map(|(major, _)| *major).unwrap_or(0);
            path_strength = path_strength.min(weight);
        }
        if path_strength > strength {
            strength = path_strength;
        }
    }
    strength
}

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let majorities = pairwise(ballots, candidates);
    let mut preferences = Graph::new(candidates.iter().cloned());
    for (winner, loser) in majorities.keys() {
        preferences.edge(winner.clone(), loser.clone());
    }

    let ordered: Vec<CandidateId> = candidates.iter().cloned().collect();
    let mut schulze = Graph::new(candidates.iter().cloned());
    for i in 0..ordered.len() {
        for j in (i + 1)..ordered.len() {
            let x = &ordered[i];
            let y = &ordered[j];
            let x_over_y = beat_strength(&preferences, &majorities, x, y);
            let y_over_x = beat_strength(&preferences, &majorities, y, x);
            if x_over_y > y_over_x {
                schulze.edge(x.clone(), y.clone());
            } else if y_over_x > x_over_y {
                schulze.edge(y.clone(), x.clone());
            }
        }
    }

    let mut ranking = Ranking::new();
    while !schulze.is_empty() {
        ranking.push(maybe_tied(schulze.pop()));
    }
    ranking
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
    fn rock_paper_scissors_ties_all_at_top() {
        let ballots = vec![
            ballot(&["A", "B", "C"], 1),
            ballot(&["B", "C", "A"], 1),
            ballot(&["C", "A", "B"], 1),
        ];
        let candidates: BTreeSet<_> = ["A", "B", "C"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].len(), 3);
    }

    #[test]
    fn condorcet_winner_tops_the_ranking() {
        let ballots = vec![
            ballot(&["A", "B", "C"], 5),
            ballot(&["A", "C", "B"], 4),
            ballot(&["B", "C", "A"], 3),
        ];
        let candidates: BTreeSet<_> = ["A", "B", "C"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking[0], RankRow::Single(c("A")));
    }
}
