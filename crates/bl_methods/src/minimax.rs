//! Minimax (Simpson), also called Successive Reversal: select unbeaten candidates; if
//! none remain (the majority graph has a cycle), drop the weakest surviving win and
//! try again.

use std::collections::BTreeSet;

use bl_core::{maybe_tied, pairwise, regrouped, Ballot, CandidateId, Graph, Ranking};

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let majorities = pairwise(ballots, candidates);
    let mut graph = Graph::new(candidates.iter().cloned());
    for (winner, loser) in majorities.keys() {
        graph.edge(winner.clone(), loser.clone());
    }

    let groups = regrouped(majorities, false);
    let mut next_group = groups.into_iter();

    let mut ranking = Ranking::new();
    while !graph.is_empty() {
        let winners = graph.pop();
        if !winners.is_empty() {
            ranking.push(maybe_tied(winners));
        } else if let Some(weakest) = next_group.next() {
            let current: BTreeSet<(CandidateId, CandidateId)> = graph.edges().collect();
            for (winner, loser) in weakest {
                if current.contains(&(winner.clone(), loser.clone())) {
                    let _ = graph.remove_edge(&winner, &loser);
                }
            }
        } else {
            break;
        }
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
    fn condorcet_cycle_drops_weakest_win() {
        let ballots = vec![
            ballot(&["A", "B", "C"], 3),
            ballot(&["B", "C", "A"], 3),
            ballot(&["C", "A", "B"], 2),
        ];
        let candidates: BTreeSet<_> = ["A", "B", "C"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking.iter().map(RankRow::len).sum::<usize>(), 3);
    }

    #[test]
    fn undefeated_candidate_wins_outright() {
        let ballots = vec![ballot(&["A", "B"], 5), ballot(&["B", "A"], 2)];
        let candidates: BTreeSet<_> = ["A", "B"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking[0], RankRow::Single(c("A")));
    }
}
