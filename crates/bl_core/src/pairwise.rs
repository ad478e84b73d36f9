//! Pairwise majority aggregation.

use std::collections::{BTreeSet, HashMap};

use crate::ballot::Ballot;
use crate::candidate::CandidateId;
use crate::rank::normalize;

/// `(winner, loser) -> (votes_for, votes_against)`, populated only for pairs where the
/// winner holds a strict majority over the loser. A pair with `votes_for == votes_against`
/// (including ties where both are zero, i.e. neither candidate was ever compared) is
/// omitted entirely rather than stored with a `false` flag, so downstream code can use
/// plain map membership as the majority test.
pub type Majorities = HashMap<(CandidateId, CandidateId), (u64, u64)>;

/// Tally pairwise majorities across a set of ballots, restricted to `candidates`.
///
/// For each ballot, every candidate ranked above another is credited with one
/// comparison win, weighted by the ballot's multiplicity; candidates tied in the same
/// row are not compared against each other. Unranked candidates are simply never
/// compared, rather than being treated as tied for last. Any identifier appearing in a
/// ballot but outside `candidates` is ignored entirely, so it can never enter a
/// comparison, a majority, or (downstream) a graph vertex.
pub fn pairwise(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Majorities {
    let mut comparisons: HashMap<(CandidateId, CandidateId), u64> = HashMap::new();

    for ballot in ballots {
        let mut above: Vec<CandidateId> = Vec::new();
        for row in normalize(&ballot.ranking) {
            let row: Vec<CandidateId> = row.into_iter().filter(|c| candidates.contains(c)).collect();
            for candidate in &row {
                for former in &above {
                    *comparisons
                        .entry((former.clone(), candidate.clone()))
                        .or_insert(0) += ballot.multiplicity;
                }
            }
            above.extend(row);
        }
    }

    let mut majorities = Majorities::new();
    for ((a, b), major) in &comparisons {
        let minor = comparisons.get(&(b.clone(), a.clone())).copied().unwrap_or(0);
        if *major > minor {
            majorities.insert((a.clone(), b.clone()), (*major, minor));
        }
    }
    majorities
}
