//! Ranked Pairs (Tideman), using the graph of pairwise preferences.
//!
//! Unstated candidates are simply never compared rather than assumed worse than the
//! ranked ones, so a ballot that omits a candidate never penalizes it here.

use std::collections::BTreeSet;

use bl_core::{maybe_tied, pairwise, regrouped, Ballot, CandidateId, Graph, Ranking};

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let majorities = pairwise(ballots, candidates);
    let mut graph = Graph::new(candidates.iter().cloned());

    for group in regrouped(majorities.clone(), true) {
        graph.acyclic_edges(group);
    }

    let mut ranking = Ranking::new();
    while !graph.is_empty() {
        ranking.push(maybe_tied(graph.pop()));
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
    fn tennessee_capital_example() {
        // Classic Tideman textbook example: Memphis/Nashville/Chattanooga/Knoxville.
        let ballots = vec![
            ballot(&["M", "N", "C", "K"], 42),
            ballot(&["N", "C", "K", "M"], 26),
            ballot(&["C", "K", "N", "M"], 15),
            ballot(&["K", "C", "N", "M"], 17),
        ];
        let candidates: BTreeSet<_> = ["M", "N", "C", "K"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking[0], RankRow::Single(c("N")));
    }

    #[test]
    fn perfect_tie_yields_no_edge() {
        let ballots = vec![ballot(&["A", "B"], 5), ballot(&["B", "A"], 5)];
        let candidates: BTreeSet<_> = ["A", "B"].iter().map(|s| c(s)).collect();
        let ranking = tabulate(&ballots, &candidates);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].len(), 2);
    }
}
