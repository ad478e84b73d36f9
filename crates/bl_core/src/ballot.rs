//! The `Ballot` type: a ranking plus how many voters cast it.

use crate::errors::CoreError;
use crate::rank::RankRow;

/// One distinct ranking pattern and the number of voters who submitted it. Ballots are
/// aggregated by pattern rather than stored one-per-voter, matching how every method in
/// this crate consumes `(ranking, count)` pairs rather than a flat list of individual
/// voters.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Ballot {
    pub ranking: Vec<RankRow>,
    pub multiplicity: u64,
}

impl Ballot {
    /// Construct a ballot, rejecting an empty ranking, any empty row within it, or a
    /// non-positive multiplicity.
    pub fn new(ranking: Vec<RankRow>, multiplicity: u64) -> Result<Self, CoreError> {
        if ranking.iter().any(RankRow::is_empty) {
            return Err(CoreError::EmptyRankRow);
        }
        if multiplicity == 0 {
            return Err(CoreError::NonPositiveMultiplicity);
        }
        Ok(Ballot { ranking, multiplicity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateId;

    fn c(s: &str) -> CandidateId {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_zero_multiplicity() {
        let result = Ballot::new(vec![RankRow::Single(c("A"))], 0);
        assert_eq!(result, Err(CoreError::NonPositiveMultiplicity));
    }

    #[test]
    fn accepts_well_formed_ballot() {
        let result = Ballot::new(vec![RankRow::Single(c("A"))], 7);
        assert!(result.is_ok());
    }
}
