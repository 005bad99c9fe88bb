//! Removal of tautologies and detection of trivial formulas.
use crate::cnf::CnfFormula;
use crate::lit::Lit;
use trisat_formula::Clause;

/// Result of simplifying a clause list.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Simplified<C = Clause> {
    /// An empty clause is present.
    Unsat,
    /// No clause is left, the empty assignment satisfies the formula.
    Sat,
    /// The remaining non-tautological clauses.
    Open(Vec<C>),
}

/// Normalize the clauses of an input formula.
///
/// Duplicated literals within a clause are merged. Tautologies and duplicated clauses are kept.
pub fn normalize(formula: &CnfFormula) -> Vec<Clause> {
    formula
        .iter()
        .map(|lits| Clause::new(lits.iter().cloned()))
        .collect()
}

/// Merge duplicated literals of each input clause, keeping the order in which they were written.
pub fn written_order(formula: &CnfFormula) -> Vec<Vec<Lit>> {
    formula
        .iter()
        .map(|lits| {
            let mut written: Vec<Lit> = Vec::with_capacity(lits.len());
            for &lit in lits {
                if !written.contains(&lit) {
                    written.push(lit);
                }
            }
            written
        })
        .collect()
}

fn classify<C: AsRef<[Lit]>>(
    mut clauses: Vec<C>,
    is_tautological: impl Fn(&C) -> bool,
) -> Simplified<C> {
    clauses.retain(|clause| !is_tautological(clause));

    if clauses.iter().any(|clause| clause.as_ref().is_empty()) {
        Simplified::Unsat
    } else if clauses.is_empty() {
        Simplified::Sat
    } else {
        Simplified::Open(clauses)
    }
}

/// Drop tautological clauses and check for the trivial cases.
///
/// An empty clause makes the formula unsatisfiable regardless of the other clauses.
pub fn simplify(clauses: Vec<Clause>) -> Simplified {
    classify(clauses, Clause::is_tautological)
}

/// Same as [`simplify`] for clauses in written order, which is preserved.
pub fn simplify_written(clauses: Vec<Vec<Lit>>) -> Simplified<Vec<Lit>> {
    classify(clauses, |lits| {
        Clause::new(lits.iter().cloned()).is_tautological()
    })
}
