//! Wire-format error enum: failures parsing either textual format, kept separate from
//! the core domain errors since these are about malformed external input, not invalid
//! construction of an already-tokenized value.

use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BallotLineError {
    #[error("ballot line is empty")]
    EmptyInput,

    #[error("group {0} of the ballot line is empty")]
    EmptyGroup(usize),

    #[error("malformed candidate token {0:?}")]
    MalformedToken(String),

    #[error("candidate {0:?} repeated within group {1}")]
    RepeatedCandidate(String, usize),
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StatementError {
    #[error("statement is empty")]
    EmptyStatement,

    #[error("rank group {0} of the statement is empty")]
    EmptyRankGroup(usize),

    #[error("malformed token {0:?}: must be one or two uppercase letters")]
    MalformedToken(String),
}
