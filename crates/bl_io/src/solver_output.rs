//! Serializes a solver report to JSON with a stable field order, suitable for a
//! research run that emits one object per `(statement, borda_winner, plurality_winner)`
//! triple.

use serde::Serialize;

use bl_core::{CandidateId, RankRow};
use bl_solver::{SolverReport, SolverStatus};

#[derive(Serialize)]
struct RankRowJson(Vec<String>);

impl From<&RankRow> for RankRowJson {
    fn from(row: &RankRow) -> Self {
        let mut ids: Vec<String> = row.as_set().iter().map(CandidateId::to_string).collect();
        ids.sort_unstable();
        RankRowJson(ids)
    }
}

#[derive(Serialize)]
struct PermutationCountJson {
    permutation: Vec<String>,
    count: u64,
}

#[derive(Serialize)]
struct SolverReportJson {
    status: String,
    residual_error: Option<i64>,
    permutation_counts: Vec<PermutationCountJson>,
    method_rankings: Vec<(String, Vec<RankRowJson>)>,
}

/// Serialize a report to a JSON string with stable key ordering.
pub fn render_solver_report(report: &SolverReport) -> serde_json::Result<String> {
    let (status, residual_error) = match &report.status {
        SolverStatus::Optimal => ("optimal".to_string(), None),
        SolverStatus::Infeasible => ("infeasible".to_string(), None),
        SolverStatus::NonConvergent { residual_error } => {
            ("non_convergent".to_string(), Some(*residual_error))
        }
    };

    let permutation_counts = report
        .permutation_counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(perm, count)| PermutationCountJson {
            permutation: perm.iter().map(CandidateId::to_string).collect(),
            count: *count,
        })
        .collect();

    let method_rankings = report
        .method_rankings
        .iter()
        .map(|(name, ranking)| {
            let rows: Vec<RankRowJson> = ranking.iter().map(RankRowJson::from).collect();
            (name.to_string(), rows)
        })
        .collect();

    let doc = SolverReportJson {
        status,
        residual_error,
        permutation_counts,
        method_rankings,
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_report_serializes_with_empty_lists() {
        let report = SolverReport::infeasible();
        let json = render_solver_report(&report).unwrap();
        assert!(json.contains("\"infeasible\""));
        assert!(json.contains("\"permutation_counts\": []"));
    }
}
