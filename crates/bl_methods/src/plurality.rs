//! Plurality ("first past the post"): only the first non-empty rank row of each ballot
//! is examined.

use std::collections::{BTreeSet, HashMap};

use bl_core::numeric::lcm_range;
use bl_core::{maybe_tied, normalize, regrouped, Ballot, CandidateId, Ranking};

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let scale = lcm_range(candidates.len() as u64);
    let mut totals: HashMap<CandidateId, u64> =
        candidates.iter().map(|c| (c.clone(), 0)).collect();

    for ballot in ballots {
        if let Some(row) = normalize(&ballot.ranking).next() {
            let weight = ballot.multiplicity * scale;
            let share = weight / row.len() as u64;
            for candidate in &row {
                if let Some(slot) = totals.get_mut(candidate) {
                    *slot += share;
                }
            }
        }
    }

    regrouped(totals, true)
        .into_iter()
        .map(|group| maybe_tied(group.into_iter().collect()))
        .collect()
}
