//! Normalized clauses.
use std::collections::BTreeSet;
use std::fmt;

use crate::lit::{Lit, Var};

/// A disjunction of literals, stored as a sorted set.
///
/// The literals are sorted by code and free of duplicates, so two clauses built from the same
/// literals in any order compare and hash equal.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    lits: Vec<Lit>,
}

impl Clause {
    /// Create a clause from any collection of literals.
    pub fn new(lits: impl IntoIterator<Item = Lit>) -> Clause {
        let mut lits: Vec<Lit> = lits.into_iter().collect();
        lits.sort_unstable();
        lits.dedup();
        Clause { lits }
    }

    /// The empty clause.
    pub fn empty() -> Clause {
        Clause::default()
    }

    /// Sorted literals of the clause.
    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Whether this is the empty clause, which cannot be satisfied.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.lits.binary_search(&lit).is_ok()
    }

    /// Whether the clause contains a literal together with its negation.
    pub fn is_tautological(&self) -> bool {
        // Both polarities of a variable are adjacent in literal order.
        self.lits.windows(2).any(|pair| pair[0] == !pair[1])
    }

    pub fn iter(&self) -> impl Iterator<Item = Lit> + '_ {
        self.lits.iter().cloned()
    }
}

impl AsRef<[Lit]> for Clause {
    fn as_ref(&self) -> &[Lit] {
        &self.lits
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.lits.iter()).finish()
    }
}

/// All variables occurring in the given clauses, in ascending order.
pub fn variables_of<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> BTreeSet<Var> {
    clauses
        .into_iter()
        .flat_map(|clause| clause.lits.iter().map(|lit| lit.var()))
        .collect()
}
