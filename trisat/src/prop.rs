//! Unit propagation and pure literal elimination.
//!
//! Propagation always works on the full clause list and a partial assignment. Clauses that are
//! satisfied are skipped and false literals are dropped, leaving the residual clauses that still
//! constrain the undecided variables. Clauses are given as literal lists in written order, which
//! determines the branching literal.
use log::trace;

use crate::config::SolverConfig;
use crate::lit::{Lit, Var};
use crate::state::SolverStats;

pub mod assignment;

pub use assignment::Assignment;

/// Some clause has all its literals false.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Conflict;

/// Outcome of propagating to a fixpoint.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Propagation {
    /// The assignment falsifies a clause.
    Conflict,
    /// Every clause contains a true literal.
    Satisfied,
    /// Clauses remain undecided, a decision on `branch`'s variable is needed.
    Undecided { branch: Lit },
}

/// Residual clauses under a partial assignment.
///
/// Satisfied clauses are removed and false literals are removed from the remaining clauses. Clause
/// order and literal order are preserved.
pub fn reduce(clauses: &[Vec<Lit>], assignment: &Assignment) -> Result<Vec<Vec<Lit>>, Conflict> {
    let mut residual = vec![];

    for clause in clauses {
        if clause.iter().any(|&lit| assignment.lit_is_true(lit)) {
            continue;
        }
        let lits: Vec<Lit> = clause
            .iter()
            .cloned()
            .filter(|&lit| !assignment.lit_is_false(lit))
            .collect();
        if lits.is_empty() {
            return Err(Conflict);
        }
        residual.push(lits);
    }

    Ok(residual)
}

/// Find a literal whose variable occurs with a single polarity in the residual clauses.
///
/// Positive pure literals are preferred over negative ones, smaller variables over larger ones.
pub fn pure_literal(residual: &[Vec<Lit>]) -> Option<Lit> {
    // Indexed by literal code, so both polarities of a variable are adjacent.
    let mut occurs: Vec<bool> = vec![];

    for &lit in residual.iter().flatten() {
        if occurs.len() <= lit.code() {
            occurs.resize((lit.index() + 1) * 2, false);
        }
        occurs[lit.code()] = true;
    }

    let pure = |polarity: bool| {
        (0..occurs.len() / 2)
            .map(|index| Var::from_index(index).lit(polarity))
            .find(|&lit| occurs[lit.code()] && !occurs[(!lit).code()])
    };

    pure(true).or_else(|| pure(false))
}

/// Propagate unit clauses and pure literals until neither is left.
///
/// Unit clauses take priority: a pure literal is only assigned when no clause is unit. The
/// assignment is extended in place, also when the result is a conflict.
pub fn propagate(
    clauses: &[Vec<Lit>],
    assignment: &mut Assignment,
    config: &SolverConfig,
    stats: &mut SolverStats,
) -> Propagation {
    loop {
        let residual = match reduce(clauses, assignment) {
            Ok(residual) => residual,
            Err(Conflict) => return Propagation::Conflict,
        };

        if residual.is_empty() {
            return Propagation::Satisfied;
        }

        if let Some(unit) = residual.iter().find(|lits| lits.len() == 1) {
            trace!("unit {}", unit[0]);
            stats.propagations += 1;
            assignment.assign_lit(unit[0]);
            continue;
        }

        if config.pure_literals {
            if let Some(pure) = pure_literal(&residual) {
                trace!("pure {}", pure);
                stats.pure_literals += 1;
                assignment.assign_lit(pure);
                continue;
            }
        }

        return Propagation::Undecided {
            branch: residual[0][0],
        };
    }
}
