//! Satisfiability by saturation under resolution.
use log::debug;

use crate::resolution::{saturate, Saturation};
use crate::simplify::{simplify, Simplified};
use crate::state::SolverStats;
use trisat_formula::Clause;

/// Decide the clauses by computing their resolution closure.
///
/// Only answers satisfiability, no model is constructed.
pub fn solve(clauses: Vec<Clause>, stats: &mut SolverStats) -> bool {
    let clauses = match simplify(clauses) {
        Simplified::Unsat => return false,
        Simplified::Sat => return true,
        Simplified::Open(clauses) => clauses,
    };

    match saturate(clauses, stats) {
        Saturation::Refuted => false,
        Saturation::Closed(closure) => {
            debug!("closure has {} clauses", closure.len());
            true
        }
    }
}
