//! Literals, clauses and CNF formulas shared by the trisat procedures.
//!
//! With the `internal-testing` feature the crate also exports macros that build these values from
//! DIMACS numbers, and the formula generators of the `test` module.

/// Literal of a DIMACS number.
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! lit {
    ($number:expr) => {
        $crate::Lit::from_dimacs($number)
    };
}

/// Variable of a positive DIMACS number.
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! var {
    ($number:expr) => {
        $crate::Var::from_dimacs($number)
    };
}

/// Array of literals, in the given order.
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! lits {
    ($($number:expr),* $(,)?) => {
        [$($crate::lit!($number)),*]
    };
}

/// Normalized [`Clause`] of the given literals.
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! clause {
    ($($number:expr),* $(,)?) => {
        $crate::Clause::new($crate::lits![$($number),*].iter().cloned())
    };
}

/// Array of literal slices, one per `;`-terminated clause.
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! cnf {
    ($($($number:expr),*;)*) => {
        [$(&[$($crate::lit!($number)),*] as &[$crate::Lit]),*]
    };
}

/// [`CnfFormula`] with the clauses of [`cnf!`].
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! cnf_formula {
    ($($clauses:tt)*) => {
        $crate::CnfFormula::from($crate::cnf![$($clauses)*].iter().cloned())
    };
}

pub mod clause;
pub mod cnf;
pub mod lit;

#[cfg(any(test, feature = "internal-testing"))]
pub mod test;

pub use clause::{variables_of, Clause};
pub use cnf::CnfFormula;
pub use lit::{Lit, Var};
