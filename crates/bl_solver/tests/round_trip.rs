//! Ballot-synthesis round trip: build a model from a pairwise-ordering statement
//! with a pinned Borda winner, solve it with both backends, and check that the
//! synthesized ballots actually realize the statement and the pinned winner when
//! read back through the same primitives the model was built from.

use std::collections::BTreeSet;

use bl_core::{Ballot, CandidateId};
use bl_io::parse_statement;
use bl_methods::borda;
use bl_solver::{solve, Backend, SolverStatus};

fn c(s: &str) -> CandidateId {
    s.parse().unwrap()
}

/// Weighted count of ballots ranking `ahead` strictly before `behind`, mirroring
/// how the model's own pairwise sum is built from permutation positions.
fn ahead_count(ballots: &[Ballot], ahead: &CandidateId, behind: &CandidateId) -> i64 {
    ballots
        .iter()
        .filter_map(|ballot| {
            let pos_ahead = ballot.ranking.iter().position(|r| r.contains(ahead))?;
            let pos_behind = ballot.ranking.iter().position(|r| r.contains(behind))?;
            (pos_ahead < pos_behind).then_some(ballot.multiplicity as i64)
        })
        .sum()
}

#[test]
fn synthesized_ballots_realize_the_statement_and_pinned_borda_winner() {
    let candidates: BTreeSet<CandidateId> =
        ["A", "B", "C", "D"].iter().map(|s| c(s)).collect();
    let statement = parse_statement("AB>CD>BD>AD>BC>AC").unwrap();
    let borda_winner = c("D");

    for backend in [Backend::Lp, Backend::Iterative] {
        let report = solve(&candidates, &statement, None, Some(&borda_winner), backend).unwrap();
        assert_eq!(
            report.status,
            SolverStatus::Optimal,
            "expected {backend:?} backend to converge"
        );

        let ballots = report.as_ballots();
        assert!(!ballots.is_empty());

        let (a, b, cc, dd) = (c("A"), c("B"), c("C"), c("D"));
        let ab = ahead_count(&ballots, &a, &b);
        let cd = ahead_count(&ballots, &cc, &dd);
        let bd = ahead_count(&ballots, &b, &dd);
        let ad = ahead_count(&ballots, &a, &dd);
        let bc = ahead_count(&ballots, &b, &cc);
        let ac = ahead_count(&ballots, &a, &cc);

        assert!(ab > cd, "AB ({ab}) should exceed CD ({cd}) under {backend:?}");
        assert!(cd > bd, "CD ({cd}) should exceed BD ({bd}) under {backend:?}");
        assert!(bd > ad, "BD ({bd}) should exceed AD ({ad}) under {backend:?}");
        assert!(ad > bc, "AD ({ad}) should exceed BC ({bc}) under {backend:?}");
        assert!(bc > ac, "BC ({bc}) should exceed AC ({ac}) under {backend:?}");

        let borda_ranking = borda::tabulate(&ballots, &candidates);
        assert_eq!(
            borda_ranking[0],
            bl_core::RankRow::Single(borda_winner.clone()),
            "the pinned Borda winner should uniquely top the synthesized election under {backend:?}"
        );
    }
}
