//! Input formulas in conjunctive normal form.
use std::collections::BTreeSet;
use std::fmt;

use crate::lit::{Lit, Var};

/// A CNF formula as read from the input.
///
/// Clauses are stored exactly as written, so repeated literals and tautologies survive until a
/// procedure normalizes them. The literals of all clauses are concatenated into one buffer and
/// `ends[i]` is the offset one past the last literal of clause `i`.
#[derive(Default, PartialEq, Eq)]
pub struct CnfFormula {
    var_count: usize,
    literals: Vec<Lit>,
    ends: Vec<usize>,
}

impl CnfFormula {
    pub fn new() -> CnfFormula {
        CnfFormula::default()
    }

    /// One more than the largest variable index used, unless raised by
    /// [`set_var_count`](CnfFormula::set_var_count).
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Raise the variable count, for variables declared but never used. Never lowers it.
    pub fn set_var_count(&mut self, count: usize) {
        if count > self.var_count {
            self.var_count = count;
        }
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Append a clause, given by owned or borrowed literals.
    pub fn add_clause<L>(&mut self, literals: impl IntoIterator<Item = L>)
    where
        Vec<Lit>: Extend<L>,
    {
        let start = self.literals.len();
        self.literals.extend(literals);

        let used = self.literals[start..].iter().map(|lit| lit.index() + 1).max();
        self.set_var_count(used.unwrap_or(0));

        self.ends.push(self.literals.len());
    }

    /// The literals of clause `index`, in written order.
    pub fn clause(&self, index: usize) -> &[Lit] {
        let start = if index == 0 { 0 } else { self.ends[index - 1] };
        &self.literals[start..self.ends[index]]
    }

    /// Clauses in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &[Lit]> {
        (0..self.len()).map(move |index| self.clause(index))
    }

    /// Variables that occur in at least one clause, in ascending order.
    pub fn variables(&self) -> BTreeSet<Var> {
        self.literals.iter().map(|lit| lit.var()).collect()
    }
}

/// Build a formula from clauses given as iterables of literals.
impl<F, C, L> From<F> for CnfFormula
where
    F: IntoIterator<Item = C>,
    C: IntoIterator<Item = L>,
    Vec<Lit>: Extend<L>,
{
    fn from(clauses: F) -> CnfFormula {
        clauses
            .into_iter()
            .fold(CnfFormula::new(), |mut formula, clause| {
                formula.add_clause(clause);
                formula
            })
    }
}

impl fmt::Debug for CnfFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} vars ", self.var_count)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;

    use proptest::{collection, collection::SizeRange, prelude::*};

    use crate::lit::strategy::lit;

    /// Random clause lists over the variables `0..vars`.
    pub fn vec_formula(
        vars: impl Strategy<Value = usize>,
        clauses: impl Into<SizeRange>,
        clause_len: impl Into<SizeRange>,
    ) -> impl Strategy<Value = Vec<Vec<Lit>>> {
        let (clauses, clause_len) = (clauses.into(), clause_len.into());

        // Independent flat map keeps shrinking cheap
        vars.prop_ind_flat_map(move |vars| {
            let clause = collection::vec(lit(0..vars), clause_len.clone());
            collection::vec(clause, clauses.clone())
        })
    }

    pub fn cnf_formula(
        vars: impl Strategy<Value = usize>,
        clauses: impl Into<SizeRange>,
        clause_len: impl Into<SizeRange>,
    ) -> impl Strategy<Value = CnfFormula> {
        vec_formula(vars, clauses, clause_len).prop_map(CnfFormula::from)
    }
}
