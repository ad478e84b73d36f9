//! Core error enum.
//!
//! A small, `Display`-only error set for the domain types defined in this crate.
//! Wire-format-level errors (malformed ballot lines, malformed statements) live in
//! `bl_io`, one layer up, so this enum doesn't grow parsing concerns it doesn't own.

use thiserror::Error;

/// Errors produced while constructing or validating core domain types.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum CoreError {
    #[error("candidate token must not be empty")]
    EmptyCandidateToken,

    #[error("rank row must not be empty")]
    EmptyRankRow,

    #[error("ballot multiplicity must be positive")]
    NonPositiveMultiplicity,

    #[error("edge ({0}, {1}) does not exist")]
    NoSuchEdge(String, String),

    #[error("vertex {0} does not exist")]
    NoSuchVertex(String),
}
