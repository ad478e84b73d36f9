//! Solver error enum. Infeasibility and non-convergence are *not* represented here —
//! they are normal `SolverReport` statuses, not `Err` values. This enum covers only
//! genuine misuse or backend failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("candidate universe must be non-empty")]
    EmptyCandidateUniverse,

    #[error("statement mentions candidate(s) outside the universe: {0:?}")]
    UnknownCandidateInStatement(Vec<String>),

    #[error("pinned winner {0:?} is not in the candidate universe")]
    UnknownWinner(String),

    #[error("candidate universe of size {0} is too large to enumerate permutations for")]
    UniverseTooLarge(usize),

    #[error("LP backend error: {0}")]
    Backend(String),
}
