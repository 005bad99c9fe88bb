//! Davis-Putnam variable elimination.
//!
//! Variables are eliminated in ascending order. Eliminating `p` replaces all clauses containing
//! `p` by their resolvents on `p`, which yields an equisatisfiable formula without `p`. Once the
//! formula is trivially satisfiable, a model is built by revisiting the eliminated variables in
//! reverse order.
use log::debug;
use rustc_hash::FxHashSet;

use crate::lit::Var;
use crate::prop::Assignment;
use crate::resolution::resolve_on;
use crate::simplify::{simplify, Simplified};
use crate::state::SolverStats;
use trisat_formula::{variables_of, Clause};

/// The clause set present when a variable was eliminated.
struct Level {
    pivot: Var,
    clauses: Vec<Clause>,
}

/// Decide the clauses by variable elimination, returning a model if satisfiable.
pub fn solve(
    mut clauses: Vec<Clause>,
    var_count: usize,
    stats: &mut SolverStats,
) -> Option<Assignment> {
    let mut levels: Vec<Level> = vec![];

    loop {
        clauses = match simplify(clauses) {
            Simplified::Unsat => {
                debug!("empty clause after eliminating {} variables", levels.len());
                return None;
            }
            Simplified::Sat => break,
            Simplified::Open(clauses) => clauses,
        };

        let pivot = match variables_of(&clauses).iter().next() {
            Some(&pivot) => pivot,
            None => unreachable!("non-empty clause without variables"),
        };

        let mut positive = vec![];
        let mut negative = vec![];
        let mut rest = vec![];

        for clause in clauses.iter() {
            if clause.contains(pivot.positive()) {
                positive.push(clause);
            } else if clause.contains(pivot.negative()) {
                negative.push(clause);
            } else {
                rest.push(clause.clone());
            }
        }

        let resolvents = resolve_on(&positive, &negative, pivot, stats);

        debug!(
            "eliminating {}: {} positive, {} negative, {} resolvents, {} untouched",
            pivot,
            positive.len(),
            negative.len(),
            resolvents.len(),
            rest.len()
        );

        let mut seen = FxHashSet::default();
        let next: Vec<Clause> = rest
            .into_iter()
            .chain(resolvents)
            .filter(|clause| seen.insert(clause.clone()))
            .collect();

        stats.eliminated_vars += 1;
        levels.push(Level { pivot, clauses });
        clauses = next;
    }

    let mut assignment = Assignment::new(var_count);

    for level in levels.iter().rev() {
        extend_model(&mut assignment, level);
    }

    Some(assignment)
}

/// Assign the pivot of a level, given a model of all later levels.
///
/// Variables of the level's clauses that no later level assigned are unconstrained and set to
/// false. The pivot is set to false unless that leaves a clause of the level unsatisfied, in which
/// case it is set to true.
fn extend_model(assignment: &mut Assignment, level: &Level) {
    for clause in level.clauses.iter() {
        for lit in clause.iter() {
            if lit.var() != level.pivot && assignment.var_value(lit.var()).is_none() {
                assignment.assign_var(lit.var(), false);
            }
        }
    }

    assignment.assign_var(level.pivot, false);

    if !level.clauses.iter().all(|clause| assignment.satisfies(clause)) {
        assignment.unassign(level.pivot);
        assignment.assign_var(level.pivot, true);

        debug_assert!(
            level.clauses.iter().all(|clause| assignment.satisfies(clause)),
            "no value of {} satisfies its level",
            level.pivot
        );
    }
}
