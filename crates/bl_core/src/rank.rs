//! Rank rows, rank normalization, and the `Ranking` output type.
//!
//! A ballot row is either a single candidate or a set of candidates tied at that rank;
//! both shapes normalize to a `BTreeSet<CandidateId>` at the boundary so downstream
//! code never has to branch on which one it got.

use std::collections::BTreeSet;

use crate::candidate::CandidateId;

/// One row of a ballot's ranking, or of a method's output ranking: either a single
/// candidate, or a non-empty set of candidates tied at that rank.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RankRow {
    Single(CandidateId),
    Tied(BTreeSet<CandidateId>),
}

impl RankRow {
    /// Build a row from any non-empty iterable of candidates; a singleton becomes
    /// `Single`, anything larger becomes `Tied`.
    pub fn from_candidates(candidates: impl IntoIterator<Item = CandidateId>) -> Option<Self> {
        let set: BTreeSet<CandidateId> = candidates.into_iter().collect();
        match set.len() {
            0 => None,
            1 => Some(RankRow::Single(set.into_iter().next().unwrap())),
            _ => Some(RankRow::Tied(set)),
        }
    }

    /// View this row as a set, regardless of its representation.
    pub fn as_set(&self) -> BTreeSet<CandidateId> {
        match self {
            RankRow::Single(c) => BTreeSet::from([c.clone()]),
            RankRow::Tied(set) => set.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RankRow::Single(_) => 1,
            RankRow::Tied(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, c: &CandidateId) -> bool {
        match self {
            RankRow::Single(s) => s == c,
            RankRow::Tied(set) => set.contains(c),
        }
    }
}

/// A total, ties-permitted ordering of the candidate universe: the output of every
/// tabulation method.
pub type Ranking = Vec<RankRow>;

/// Convert a set of candidates into a single output row: a singleton becomes
/// `Single`, otherwise `Tied`.
pub fn maybe_tied(candidates: BTreeSet<CandidateId>) -> RankRow {
    if candidates.len() == 1 {
        RankRow::Single(candidates.into_iter().next().unwrap())
    } else {
        RankRow::Tied(candidates)
    }
}

/// Normalize a ballot's rank sequence into a lazy sequence of disjoint candidate sets,
/// preserving row order. No deduplication across rows is performed here: a malformed
/// ballot that repeats a candidate across rows is the caller's problem (see §4.1); the
/// pairwise aggregator and per-method tabulators are written to tolerate it by ignoring
/// the repeat rather than by rejecting the whole ballot.
pub fn normalize<'a>(rows: &'a [RankRow]) -> impl Iterator<Item = BTreeSet<CandidateId>> + 'a {
    rows.iter().map(RankRow::as_set)
}
