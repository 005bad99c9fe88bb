//! Checking models against the input formula.
use crate::cnf::CnfFormula;
use crate::prop::Assignment;
use crate::solver::SolverError;
use trisat_formula::Clause;

/// Verify that an assignment satisfies every clause of a formula.
///
/// Tautological clauses hold under every completion of the assignment and are skipped.
pub fn check_model(formula: &CnfFormula, assignment: &Assignment) -> Result<(), SolverError> {
    for lits in formula.iter() {
        let clause = Clause::new(lits.iter().cloned());
        if !clause.is_tautological() && !assignment.satisfies(&clause) {
            return Err(SolverError::InvalidModel {
                clause: lits.to_vec(),
            });
        }
    }
    Ok(())
}
