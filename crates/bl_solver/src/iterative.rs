//! Iterative hill-climb solver: start every permutation count at a midrange value,
//! then repeatedly move one unit from the variable most responsible for an excess
//! toward the variable most responsible for a deficit on the most-violated
//! constraint, remembering the last-moved pair so a step never immediately undoes
//! itself.
//!
//! Not guaranteed to converge; callers bound the work with `max_iterations` and accept
//! a best-effort assignment plus the residual error when it doesn't.

use std::collections::HashMap;

use crate::model::{Constraint, Model};
use crate::report::{SolverReport, SolverStatus};

pub struct IterativeConfig {
    pub max_iterations: usize,
    pub start_value: u64,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        IterativeConfig { max_iterations: 20_000, start_value: 10 }
    }
}

fn violation(constraint: &Constraint, assignment: &[u64]) -> i64 {
    let lhs = constraint.lhs.evaluate(assignment);
    let rhs = constraint.rhs.evaluate(assignment);
    let diff = lhs - rhs;
    if constraint.strict {
        (1 - diff).max(0)
    } else {
        diff.abs()
    }
}

/// Per-variable derivative of `lhs - rhs` with respect to a unit increase in that
/// variable, for a single constraint.
fn derivatives(constraint: &Constraint) -> HashMap<usize, i64> {
    let mut deriv = HashMap::new();
    for (var, coeff) in &constraint.lhs.0 {
        *deriv.entry(*var).or_insert(0) += coeff;
    }
    for (var, coeff) in &constraint.rhs.0 {
        *deriv.entry(*var).or_insert(0) -= coeff;
    }
    deriv
}

fn total_error(model: &Model, assignment: &[u64]) -> i64 {
    model.constraints.iter().map(|c| violation(c, assignment)).sum()
}

/// Run the hill-climb. Returns a report with status `Optimal` if every constraint is
/// satisfied within `max_iterations`, or `NonConvergent` with the best assignment found
/// and its residual error otherwise.
pub fn solve(model: &Model, config: &IterativeConfig) -> SolverReport {
    let mut assignment: Vec<u64> = vec![config.start_value; model.permutations.len()];
    let mut taboo: (Option<usize>, Option<usize>) = (None, None);

    for _ in 0..config.max_iterations {
        let worst = model
            .constraints
            .iter()
            .map(|c| violation(c, &assignment))
            .enumerate()
            .max_by_key(|(_, v)| *v);

        let (idx, worst_violation) = match worst {
            Some(pair) => pair,
            None => break,
        };
        if worst_violation == 0 {
            break;
        }

        let constraint = &model.constraints[idx];
        let lhs = constraint.lhs.evaluate(&assignment);
        let rhs = constraint.rhs.evaluate(&assignment);
        let diff = lhs - rhs - if constraint.strict { 1 } else { 0 };
        let need_increase = diff < 0;

        let deriv = derivatives(constraint);

        let pick_increment = |taboo_var: Option<usize>| -> Option<usize> {
            deriv
                .iter()
                .filter(|(var, d)| {
                    let matches_direction = if need_increase { **d > 0 } else { **d < 0 };
                    matches_direction && Some(**var) != taboo_var
                })
                .max_by_key(|(_, d)| d.abs())
                .map(|(var, _)| *var)
                .or_else(|| {
                    deriv
                        .iter()
                        .filter(|(_, d)| if need_increase { **d > 0 } else { **d < 0 })
                        .max_by_key(|(_, d)| d.abs())
                        .map(|(var, _)| *var)
                })
        };

        let pick_decrement = |taboo_var: Option<usize>| -> Option<usize> {
            let direction_matches = |d: &i64| if need_increase { *d < 0 } else { *d > 0 };
            deriv
                .iter()
                .filter(|(var, d)| direction_matches(d) && Some(**var) != taboo_var && assignment[**var] > 0)
                .max_by_key(|(_, d)| d.abs())
                .map(|(var, _)| *var)
                .or_else(|| {
                    deriv
                        .iter()
                        .filter(|(var, d)| direction_matches(d) && assignment[**var] > 0)
                        .max_by_key(|(_, d)| d.abs())
                        .map(|(var, _)| *var)
                })
        };

        let low = pick_increment(taboo.1);
        let high = pick_decrement(taboo.0);

        match (low, high) {
            (Some(low), Some(high)) if low != high => {
                assignment[low] += 1;
                if assignment[high] > 0 {
                    assignment[high] -= 1;
                }
                taboo = (Some(high), Some(low));
            }
            (Some(low), _) => {
                assignment[low] += 1;
                taboo = (None, Some(low));
            }
            (_, Some(high)) if assignment[high] > 0 => {
                assignment[high] -= 1;
                taboo = (Some(high), None);
            }
            _ => break,
        }
    }

    let residual = total_error(model, &assignment);
    let permutation_counts = model
        .permutations
        .iter()
        .cloned()
        .zip(assignment.iter().copied())
        .collect();

    SolverReport {
        status: if residual == 0 {
            SolverStatus::Optimal
        } else {
            SolverStatus::NonConvergent { residual_error: residual }
        },
        permutation_counts,
        method_rankings: Default::default(),
    }
}
