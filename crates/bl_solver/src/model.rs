//! Builds the permutation-count model from a candidate universe and an ordering
//! statement: one variable per permutation of the universe, four kinds of named sum
//! expressions over those variables, and a constraint per statement relationship.

use std::collections::{BTreeSet, HashMap};

use bl_core::{CandidateId, Statement, Token};
use itertools::Itertools;

use crate::errors::SolverError;

/// A linear combination of permutation-count variables: `sum(coeff * n_var)`.
#[derive(Clone, Debug, Default)]
pub struct Expr(pub Vec<(usize, i64)>);

impl Expr {
    pub fn evaluate(&self, assignment: &[u64]) -> i64 {
        self.0
            .iter()
            .map(|(var, coeff)| coeff * assignment[*var] as i64)
            .sum()
    }
}

/// `lhs > rhs` (strict, by at least 1) or `lhs == rhs`.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub lhs: Expr,
    pub rhs: Expr,
    pub strict: bool,
}

/// The fully built model: permutations, named sums, and constraints, ready for either
/// solver backend.
pub struct Model {
    pub candidates: Vec<CandidateId>,
    pub permutations: Vec<Vec<CandidateId>>,
    pub constraints: Vec<Constraint>,
    /// Sum of every variable, the objective the LP backend minimizes.
    pub total: Expr,
}

fn pairwise_sum(permutations: &[Vec<CandidateId>], ahead: &CandidateId, behind: &CandidateId) -> Expr {
    let terms = permutations
        .iter()
        .enumerate()
        .filter(|(_, perm)| {
            let pos_ahead = perm.iter().position(|c| c == ahead).unwrap();
            let pos_behind = perm.iter().position(|c| c == behind).unwrap();
            pos_ahead < pos_behind
        })
        .map(|(i, _)| (i, 1))
        .collect();
    Expr(terms)
}

fn candidate_first_sum(permutations: &[Vec<CandidateId>], candidate: &CandidateId) -> Expr {
    let terms = permutations
        .iter()
        .enumerate()
        .filter(|(_, perm)| perm.first() == Some(candidate))
        .map(|(i, _)| (i, 1))
        .collect();
    Expr(terms)
}

fn borda_sum(permutations: &[Vec<CandidateId>], candidate: &CandidateId) -> Expr {
    let k = permutations.first().map(|p| p.len()).unwrap_or(0) as i64;
    let terms = permutations
        .iter()
        .enumerate()
        .map(|(i, perm)| {
            let position = perm.iter().position(|c| c == candidate).unwrap() as i64;
            (i, k - 1 - 2 * position)
        })
        .collect();
    Expr(terms)
}

/// A token's sum expression, built lazily and cached by its canonical form.
struct Sums<'a> {
    permutations: &'a [Vec<CandidateId>],
    pairwise: HashMap<(CandidateId, CandidateId), Expr>,
    candidate: HashMap<CandidateId, Expr>,
    borda: HashMap<CandidateId, Expr>,
}

impl<'a> Sums<'a> {
    fn new(permutations: &'a [Vec<CandidateId>]) -> Self {
        Sums {
            permutations,
            pairwise: HashMap::new(),
            candidate: HashMap::new(),
            borda: HashMap::new(),
        }
    }

    fn of_token(&mut self, token: &Token) -> Expr {
        match token {
            Token::Pairwise(a, b) => self
                .pairwise
                .entry((a.clone(), b.clone()))
                .or_insert_with(|| pairwise_sum(self.permutations, a, b))
                .clone(),
            Token::Plurality(c) => self
                .candidate
                .entry(c.clone())
                .or_insert_with(|| candidate_first_sum(self.permutations, c))
                .clone(),
        }
    }

    fn of_borda(&mut self, candidate: &CandidateId) -> Expr {
        self.borda
            .entry(candidate.clone())
            .or_insert_with(|| borda_sum(self.permutations, candidate))
            .clone()
    }
}

/// Build the full model. `plurality_winner`/`borda_winner`, when given, pin that
/// candidate strictly above every other candidate under the corresponding sum.
pub fn build_model(
    candidates: &BTreeSet<CandidateId>,
    statement: &Statement,
    plurality_winner: Option<&CandidateId>,
    borda_winner: Option<&CandidateId>,
) -> Result<Model, SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateUniverse);
    }
    if candidates.len() > 8 {
        return Err(SolverError::UniverseTooLarge(candidates.len()));
    }

    let unknown: Vec<String> = statement
        .tokens()
        .flat_map(|t| match t {
            Token::Pairwise(a, b) => vec![a.clone(), b.clone()],
            Token::Plurality(c) => vec![c.clone()],
        })
        .filter(|c| !candidates.contains(c))
        .map(|c| c.to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(SolverError::UnknownCandidateInStatement(unknown));
    }

    let ordered: Vec<CandidateId> = candidates.iter().cloned().collect();
    let permutations: Vec<Vec<CandidateId>> = ordered
        .iter()
        .cloned()
        .permutations(ordered.len())
        .collect();

    let mut sums = Sums::new(&permutations);
    let mut constraints = Vec::new();

    for pair in ordered.iter().combinations(2) {
        let (a, b) = (pair[0].clone(), pair[1].clone());
        let ab = sums.of_token(&Token::Pairwise(a.clone(), b.clone()));
        let ba = sums.of_token(&Token::Pairwise(b.clone(), a.clone()));

        let mentions_ab = statement
            .tokens()
            .any(|t| matches!(t, Token::Pairwise(x, y) if *x == a && *y == b));
        let mentions_ba = statement
            .tokens()
            .any(|t| matches!(t, Token::Pairwise(x, y) if *x == b && *y == a));

        if mentions_ab {
            constraints.push(Constraint { lhs: ab, rhs: ba, strict: true });
        } else if mentions_ba {
            constraints.push(Constraint { lhs: ba, rhs: ab, strict: true });
        } else {
            constraints.push(Constraint { lhs: ab, rhs: ba, strict: false });
        }
    }

    for group in &statement.ranks {
        if let Some(first) = group.0.first() {
            let reference = sums.of_token(first);
            for other in &group.0[1..] {
                let expr = sums.of_token(other);
                constraints.push(Constraint {
                    lhs: reference.clone(),
                    rhs: expr,
                    strict: false,
                });
            }
        }
    }

    for window in statement.ranks.windows(2) {
        let higher = window[0].0.first();
        let lower = window[1].0.first();
        if let (Some(higher), Some(lower)) = (higher, lower) {
            let lhs = sums.of_token(higher);
            let rhs = sums.of_token(lower);
            constraints.push(Constraint { lhs, rhs, strict: true });
        }
    }

    if let Some(winner) = plurality_winner {
        if !candidates.contains(winner) {
            return Err(SolverError::UnknownWinner(winner.to_string()));
        }
        let winner_sum = sums.of_token(&Token::Plurality(winner.clone()));
        for other in &ordered {
            if other != winner {
                let other_sum = sums.of_token(&Token::Plurality(other.clone()));
                constraints.push(Constraint {
                    lhs: winner_sum.clone(),
                    rhs: other_sum,
                    strict: true,
                });
            }
        }
    }

    if let Some(winner) = borda_winner {
        if !candidates.contains(winner) {
            return Err(SolverError::UnknownWinner(winner.to_string()));
        }
        let winner_sum = sums.of_borda(winner);
        for other in &ordered {
            if other != winner {
                let other_sum = sums.of_borda(other);
                constraints.push(Constraint {
                    lhs: winner_sum.clone(),
                    rhs: other_sum,
                    strict: true,
                });
            }
        }
    }

    let total = Expr((0..permutations.len()).map(|i| (i, 1)).collect());

    Ok(Model {
        candidates: ordered,
        permutations,
        constraints,
        total,
    })
}
