//! River: a compromise between Ranked Pairs and Beatpath. The accepted graph must stay
//! both acyclic and in-degree <= 1 at every vertex (a forest); pairs rejected for
//! branching get a second chance as a plain acyclic insertion once the forest shape no
//! longer constrains them.

use std::collections::BTreeSet;

use bl_core::{maybe_tied, pairwise, regrouped, Ballot, CandidateId, Graph, Ranking};

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let majorities = pairwise(ballots, candidates);
    let mut graph = Graph::new(candidates.iter().cloned());

    let mut retries = Vec::new();
    for group in regrouped(majorities.clone(), true) {
        let rejected = graph.river_edges(group);
        if !rejected.is_empty() {
            retries.push(rejected);
        }
    }

    for rejected in retries {
        graph.acyclic_edges(rejected);
    }

    let mut ranking = Ranking::new();
    while !graph.is_empty() {
        ranking.push(maybe_tied(graph.pop()));
    }
    ranking
}
