//! Borda Count, zero-sum variant: a ballot awards points relative to how many
//! candidates it ranks above and below each row, so unranked candidates get nothing
//! rather than being treated as ranked last. This keeps every ballot zero-sum and
//! limits the influence an incomplete ballot has over candidates it declines to rank.

use std::collections::{BTreeSet, HashMap};

use bl_core::{maybe_tied, normalize, regrouped, Ballot, CandidateId, Ranking};

/// The zero-sum Borda score of every candidate: summing every entry over a single
/// ballot (restricted to the candidates that ballot ranks) always nets to zero, since
/// each comparison credits one candidate and debits the other by the same amount.
fn ratings(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> HashMap<CandidateId, i64> {
    let mut ratings: HashMap<CandidateId, i64> =
        candidates.iter().map(|c| (c.clone(), 0)).collect();

    for ballot in ballots {
        let count = ballot.multiplicity as i64;

        let mut seen: i64 = 0;
        for row in normalize(&ballot.ranking) {
            let value = count * seen;
            seen += row.len() as i64;
            for candidate in &row {
                if let Some(rating) = ratings.get_mut(candidate) {
                    *rating -= value;
                }
            }
        }

        for row in normalize(&ballot.ranking) {
            seen -= row.len() as i64;
            let value = count * seen;
            for candidate in &row {
                if let Some(rating) = ratings.get_mut(candidate) {
                    *rating += value;
                }
            }
        }
    }

    ratings
}

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    regrouped(ratings(ballots, candidates), true)
        .into_iter()
        .map(|group| maybe_tied(group.into_iter().collect()))
        .collect()
}
