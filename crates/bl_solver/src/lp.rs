//! LP backend: relax the permutation counts to non-negative reals, minimize their sum
//! subject to the model's constraints, and round the optimum for reporting. Solved with
//! `good_lp`'s pure-Rust `microlp` backend, so this crate has no system solver
//! dependency.

use good_lp::{constraint, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};

use crate::errors::SolverError;
use crate::model::{Constraint, Model};
use crate::report::{SolverReport, SolverStatus};

fn to_lp_expression(expr: &crate::model::Expr, vars: &[Variable]) -> Expression {
    let mut out = Expression::from(0.0);
    for (index, coeff) in &expr.0 {
        out += vars[*index] * (*coeff as f64);
    }
    out
}

pub fn solve(model: &Model) -> Result<SolverReport, SolverError> {
    let mut problem = ProblemVariables::new();
    let vars: Vec<Variable> = (0..model.permutations.len())
        .map(|_| problem.add(variable().min(0.0)))
        .collect();

    let objective = to_lp_expression(&model.total, &vars);
    let mut lp_model = problem.minimise(objective).using(good_lp::solvers::microlp::microlp);

    for Constraint { lhs, rhs, strict } in &model.constraints {
        let lhs_expr = to_lp_expression(lhs, &vars);
        let rhs_expr = to_lp_expression(rhs, &vars);
        lp_model = if *strict {
            lp_model.with(constraint!(lhs_expr >= rhs_expr + 1.0))
        } else {
            lp_model.with(constraint!(lhs_expr == rhs_expr))
        };
    }

    match lp_model.solve() {
        Ok(solution) => {
            let permutation_counts = model
                .permutations
                .iter()
                .cloned()
                .zip(vars.iter().map(|v| solution.value(*v).round().max(0.0) as u64))
                .collect();
            Ok(SolverReport {
                status: SolverStatus::Optimal,
                permutation_counts,
                method_rankings: Default::default(),
            })
        }
        Err(good_lp::ResolutionError::Infeasible) => Ok(SolverReport::infeasible()),
        Err(other) => Err(SolverError::Backend(other.to_string())),
    }
}
