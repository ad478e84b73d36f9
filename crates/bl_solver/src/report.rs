//! The solver's output type: status, per-permutation counts, and (optionally) the
//! ranking each tabulation method produces for the synthesized election.

use std::collections::BTreeMap;

use bl_core::{Ballot, CandidateId, RankRow, Ranking};
use bl_methods::Method;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SolverStatus {
    Optimal,
    Infeasible,
    NonConvergent { residual_error: i64 },
}

/// A synthesized election: one ballot per permutation with a positive count.
#[derive(Clone, Debug, Default)]
pub struct SolverReport {
    pub status: SolverStatus,
    pub permutation_counts: Vec<(Vec<CandidateId>, u64)>,
    pub method_rankings: BTreeMap<&'static str, Ranking>,
}

impl Default for SolverStatus {
    fn default() -> Self {
        SolverStatus::Infeasible
    }
}

impl SolverReport {
    pub fn infeasible() -> Self {
        SolverReport {
            status: SolverStatus::Infeasible,
            permutation_counts: Vec::new(),
            method_rankings: BTreeMap::new(),
        }
    }

    /// Turn the permutation counts into the ballot multiset every tabulation method
    /// expects, dropping zero-count permutations.
    pub fn as_ballots(&self) -> Vec<Ballot> {
        self.permutation_counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(perm, count)| {
                let ranking = perm.iter().cloned().map(RankRow::Single).collect();
                Ballot::new(ranking, *count).expect("synthesized ballots are always well-formed")
            })
            .collect()
    }

    /// Populate `method_rankings` by running every requested method over the
    /// synthesized ballots.
    pub fn run_methods(&mut self, methods: &[Method], candidates: &std::collections::BTreeSet<CandidateId>) {
        let ballots = self.as_ballots();
        for method in methods {
            let ranking = method.tabulate(&ballots, candidates);
            self.method_rankings.insert(method.name(), ranking);
        }
    }
}
