//! Core domain types shared by every tabulation method and by the ballot-synthesis
//! solver: candidate identity, ballots and rank rows, the directed graph used by the
//! graph-based methods, pairwise majority aggregation, value regrouping, scaled-integer
//! arithmetic for fractional vote splitting, and the solver's statement AST.

pub mod ballot;
pub mod candidate;
pub mod errors;
pub mod graph;
pub mod numeric;
pub mod pairwise;
pub mod rank;
pub mod regroup;
pub mod statement;

pub use ballot::Ballot;
pub use candidate::CandidateId;
pub use errors::CoreError;
pub use graph::Graph;
pub use pairwise::{pairwise, Majorities};
pub use rank::{maybe_tied, normalize, RankRow, Ranking};
pub use regroup::regrouped;
pub use statement::{RankGroup, Statement, Token};
