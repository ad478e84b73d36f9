//! Bucklin (Grand Junction) voting: raise the threshold one rank position at a time
//! until some candidate's cumulative total crosses a majority.

use std::collections::{BTreeSet, HashMap};

use bl_core::numeric::lcm_range;
use bl_core::{maybe_tied, normalize, regrouped, Ballot, CandidateId, Ranking};

pub fn tabulate(ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
    let k = candidates.len() as u64;
    let scale = lcm_range(k);
    let total_multiplicity: u64 = ballots.iter().map(|b| b.multiplicity).sum();
    let majority_doubled = total_multiplicity * scale;

    for n in 1..=k.max(1) {
        let mut totals: HashMap<CandidateId, u64> =
            candidates.iter().map(|c| (c.clone(), 0)).collect();

        for ballot in ballots {
            let weight = ballot.multiplicity * scale;
            let mut seen: u64 = 0;
            for row in normalize(&ballot.ranking) {
                let row_len = row.len() as u64;
                let value = if row_len > n.saturating_sub(seen) {
                    weight * (n - seen) / row_len
                } else {
                    weight
                };
                for candidate in &row {
                    if let Some(slot) = totals.get_mut(candidate) {
                        *slot += value;
                    }
                }
                seen += row_len;
                if seen >= n {
                    break;
                }
            }
        }

        let groups = regrouped(totals.clone(), true);
        let top_value = totals[&groups[0][0]];
        if top_value * 2 > majority_doubled {
            return groups
                .into_iter()
                .map(|group| maybe_tied(group.into_iter().collect()))
                .collect();
        }
    }

    vec![maybe_tied(candidates.clone())]
}
