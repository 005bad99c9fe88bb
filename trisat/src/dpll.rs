//! Backtracking search with unit propagation and pure literal elimination.
//!
//! The search tree is explored depth first using an explicit stack of pending partial
//! assignments, so the depth of the tree is not limited by the call stack.
use log::{debug, trace};

use crate::config::SolverConfig;
use crate::lit::Lit;
use crate::prop::{propagate, Assignment, Propagation};
use crate::simplify::{simplify_written, Simplified};
use crate::state::SolverStats;

/// Decide the clauses by DPLL search, returning a model if satisfiable.
///
/// Clauses are literal lists in written order. Branches on the variable of the first literal of
/// the first residual clause, trying true before false.
pub fn solve(
    clauses: Vec<Vec<Lit>>,
    var_count: usize,
    config: &SolverConfig,
    stats: &mut SolverStats,
) -> Option<Assignment> {
    let clauses = match simplify_written(clauses) {
        Simplified::Unsat => return None,
        Simplified::Sat => return Some(Assignment::new(var_count)),
        Simplified::Open(clauses) => clauses,
    };

    let mut pending = vec![Assignment::new(var_count)];

    while let Some(mut assignment) = pending.pop() {
        match propagate(&clauses, &mut assignment, config, stats) {
            Propagation::Conflict => {
                stats.conflicts += 1;
            }
            Propagation::Satisfied => {
                debug!(
                    "model found after {} decisions and {} conflicts",
                    stats.decisions, stats.conflicts
                );
                return Some(assignment);
            }
            Propagation::Undecided { branch } => {
                let var = branch.var();
                trace!("decide {} at depth {}", var, pending.len());
                stats.decisions += 1;

                let mut alternative = assignment.clone();
                alternative.assign_var(var, false);
                assignment.assign_var(var, true);

                pending.push(alternative);
                pending.push(assignment);
            }
        }
    }

    debug!(
        "search space exhausted after {} decisions and {} conflicts",
        stats.decisions, stats.conflicts
    );
    None
}
