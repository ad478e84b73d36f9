//! The eight ranked-voting tabulation methods, each a pure function of
//! `(ballots, candidates) -> ranking`, plus a name-keyed registry so an embedding
//! application can select one by name rather than by function reference.

pub mod beatpath;
pub mod borda;
pub mod bucklin;
pub mod instant_runoff;
pub mod minimax;
pub mod plurality;
pub mod ranked_pairs;
pub mod river;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use bl_core::{Ballot, CandidateId, Ranking};
use thiserror::Error;

/// The tabulation methods this crate implements, keyed by the name used at the CLI and
/// in the method registry.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Method {
    RankedPairs,
    Beatpath,
    River,
    Minimax,
    InstantRunoff,
    Plurality,
    Borda,
    Bucklin,
}

#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("unknown tabulation method {0:?}")]
pub struct UnknownMethod(pub String);

impl Method {
    pub const ALL: [Method; 8] = [
        Method::RankedPairs,
        Method::Beatpath,
        Method::River,
        Method::Minimax,
        Method::InstantRunoff,
        Method::Plurality,
        Method::Borda,
        Method::Bucklin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::RankedPairs => "rankedpairs",
            Method::Beatpath => "beatpath",
            Method::River => "river",
            Method::Minimax => "minimax",
            Method::InstantRunoff => "instantrunoff",
            Method::Plurality => "plurality",
            Method::Borda => "borda",
            Method::Bucklin => "bucklin",
        }
    }

    /// Run this method over a ballot set and candidate universe.
    pub fn tabulate(&self, ballots: &[Ballot], candidates: &BTreeSet<CandidateId>) -> Ranking {
        match self {
            Method::RankedPairs => ranked_pairs::tabulate(ballots, candidates),
            Method::Beatpath => beatpath::tabulate(ballots, candidates),
            Method::River => river::tabulate(ballots, candidates),
            Method::Minimax => minimax::tabulate(ballots, candidates),
            Method::InstantRunoff => instant_runoff::tabulate(ballots, candidates),
            Method::Plurality => plurality::tabulate(ballots, candidates),
            Method::Borda => borda::tabulate(ballots, candidates),
            Method::Bucklin => bucklin::tabulate(ballots, candidates),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}
