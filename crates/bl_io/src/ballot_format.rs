//! Parses the ballot-line wire format: `"group1;group2;group3"`, each group a
//! comma-separated sorted sequence of candidate identifiers. Rejects malformed input
//! rather than repairing it; tabulation never sees a ballot that didn't parse cleanly.

use std::collections::BTreeSet;

use bl_core::{Ballot, CandidateId, RankRow};

use crate::errors::BallotLineError;

pub fn parse_ballot_line(line: &str) -> Result<Ballot, BallotLineError> {
    if line.trim().is_empty() {
        return Err(BallotLineError::EmptyInput);
    }

    let mut rows = Vec::new();
    for (index, group) in line.split(';').enumerate() {
        if group.trim().is_empty() {
            return Err(BallotLineError::EmptyGroup(index));
        }

        let mut candidates = Vec::new();
        for token in group.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(BallotLineError::MalformedToken(token.to_string()));
            }
            candidates.push(CandidateId::new(token));
        }

        let deduped: BTreeSet<&CandidateId> = candidates.iter().collect();
        if deduped.len() != candidates.len() {
            let mut sorted = candidates.clone();
            sorted.sort_unstable();
            let repeat = sorted
                .windows(2)
                .find(|pair| pair[0] == pair[1])
                .expect("len mismatch implies adjacent equal candidates once sorted")[0]
                .as_str()
                .to_string();
            return Err(BallotLineError::RepeatedCandidate(repeat, index));
        }

        let row = RankRow::from_candidates(candidates)
            .expect("a non-empty group always yields a non-empty row");
        rows.push(row);
    }

    Ballot::new(rows, 1).map_err(|_| BallotLineError::EmptyInput)
}

/// Render a ballot back to the wire format, at multiplicity 1 (the format carries no
/// multiplicity field; a caller repeats the line to represent a higher count).
pub fn render_ballot_line(ballot: &Ballot) -> String {
    ballot
        .ranking
        .iter()
        .map(|row| {
            let mut tokens: Vec<&str> = row.as_set().iter().map(CandidateId::as_str).collect();
            tokens.sort_unstable();
            tokens.join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}
