//! Ballot synthesis: given a candidate universe and a pairwise-ordering statement
//! (optionally pinning a plurality and/or Borda winner), find a minimal multiset of
//! ballots realizing it. Used as a research tool to probe criterion failures among the
//! tabulation methods.

pub mod errors;
pub mod iterative;
pub mod lp;
pub mod model;
pub mod report;

use std::collections::BTreeSet;

use bl_core::{CandidateId, Statement};

pub use errors::SolverError;
pub use iterative::IterativeConfig;
pub use model::{build_model, Model};
pub use report::{SolverReport, SolverStatus};

/// Which backend synthesizes the ballot multiset.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Backend {
    Lp,
    Iterative,
}

/// Build the model for `(candidates, statement)` and solve it with the requested
/// backend.
pub fn solve(
    candidates: &BTreeSet<CandidateId>,
    statement: &Statement,
    plurality_winner: Option<&CandidateId>,
    borda_winner: Option<&CandidateId>,
    backend: Backend,
) -> Result<SolverReport, SolverError> {
    let model = build_model(candidates, statement, plurality_winner, borda_winner)?;
    tracing::debug!(
        candidates = model.candidates.len(),
        permutations = model.permutations.len(),
        constraints = model.constraints.len(),
        ?backend,
        "built ballot-synthesis model"
    );
    match backend {
        Backend::Lp => lp::solve(&model),
        Backend::Iterative => Ok(iterative::solve(&model, &IterativeConfig::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bl_core::statement::{RankGroup, Token};

    fn c(s: &str) -> CandidateId {
        s.parse().unwrap()
    }

    #[test]
    fn two_candidate_strict_order_converges_iteratively() {
        let candidates: BTreeSet<_> = ["A", "B"].iter().map(|s| c(s)).collect();
        let statement = Statement::new(vec![RankGroup(vec![Token::Pairwise(c("A"), c("B"))])]);
        let report = solve(&candidates, &statement, None, None, Backend::Iterative).unwrap();
        match report.status {
            SolverStatus::Optimal => {
                let ballots = report.as_ballots();
                assert!(!ballots.is_empty());
            }
            other => panic!("expected convergence, got {other:?}"),
        }
    }
}
