//! Typed AST for the solver's pairwise-ordering statement language.
//!
//! This module owns only the parsed shape; turning the textual grammar into these
//! types is a wire-format concern that lives elsewhere.

use crate::candidate::CandidateId;

/// A single token within a rank group: either a pairwise-sum token `XY` ("X ranked over
/// Y"), or a plurality token `A`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Token {
    Pairwise(CandidateId, CandidateId),
    Plurality(CandidateId),
}

/// A set of tokens whose underlying sums are asserted equal to one another.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RankGroup(pub Vec<Token>);

/// A full statement: an ordered sequence of rank groups, each strictly greater than the
/// next. Groups later in the sequence denote strictly smaller sums.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Statement {
    pub ranks: Vec<RankGroup>,
}

impl Statement {
    pub fn new(ranks: Vec<RankGroup>) -> Self {
        Statement { ranks }
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Every token mentioned anywhere in the statement, in encounter order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.ranks.iter().flat_map(|group| group.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CandidateId {
        s.parse().unwrap()
    }

    #[test]
    fn tokens_iterates_in_order() {
        let statement = Statement::new(vec![
            RankGroup(vec![Token::Pairwise(c("A"), c("B"))]),
            RankGroup(vec![Token::Plurality(c("C"))]),
        ]);
        let tokens: Vec<_> = statement.tokens().collect();
        assert_eq!(tokens.len(), 2);
    }
}
