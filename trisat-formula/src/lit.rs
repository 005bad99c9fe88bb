//! Variables and literals.
//!
//! Variables are numbered from 0 internally. At the DIMACS boundary they are numbered from 1 and
//! a negative number stands for the negated variable.
use std::{fmt, ops};

/// A boolean variable, stored as its 0-based index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(u32);

impl Var {
    /// Variable of a positive DIMACS number.
    pub fn from_dimacs(number: isize) -> Var {
        debug_assert!(number > 0, "variable numbers start at 1, got {}", number);
        Var::from_index(number as usize - 1)
    }

    pub fn from_index(index: usize) -> Var {
        debug_assert!(index < Var::max_count(), "variable index {} out of range", index);
        Var(index as u32)
    }

    pub fn to_dimacs(self) -> isize {
        self.index() as isize + 1
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The variable with the largest index a formula may use.
    ///
    /// The low bit of a literal code is its sign and a few high bits stay unused, so indices are
    /// limited to 28 bits.
    pub const fn max_var() -> Var {
        Var(u32::max_value() >> 4)
    }

    /// Number of distinct variables, one more than the index of [`max_var`](Var::max_var).
    pub const fn max_count() -> usize {
        Var::max_var().index() + 1
    }

    /// This variable as a literal that is true when the variable has the value `polarity`.
    pub fn lit(self, polarity: bool) -> Lit {
        Lit::from_var(self, polarity)
    }

    pub fn positive(self) -> Lit {
        Lit::from_var(self, true)
    }

    pub fn negative(self) -> Lit {
        Lit::from_var(self, false)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_dimacs(), f)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A variable or its negation.
///
/// Stored as a code of `2 * index + sign`, where the sign bit is set for negated variables. Sorting
/// by code puts `v` directly before `¬v`, so a sorted clause is tautological exactly when two
/// neighbouring literals are complementary.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit(u32);

impl Lit {
    pub fn from_var(var: Var, polarity: bool) -> Lit {
        Lit(var.0 << 1 | !polarity as u32)
    }

    pub fn from_index(index: usize, polarity: bool) -> Lit {
        Var::from_index(index).lit(polarity)
    }

    /// Literal of a nonzero DIMACS number.
    ///
    /// For numbers that were not validated yet use [`try_from_dimacs`](Lit::try_from_dimacs).
    pub fn from_dimacs(number: isize) -> Lit {
        Var::from_dimacs(number.abs()).lit(number > 0)
    }

    /// Literal of a DIMACS number, `None` for 0 and for numbers past [`Var::max_var`].
    pub fn try_from_dimacs(number: isize) -> Option<Lit> {
        match number.checked_abs() {
            Some(magnitude) if magnitude != 0 && magnitude <= Var::max_var().to_dimacs() => {
                Some(Lit::from_dimacs(number))
            }
            _ => None,
        }
    }

    pub fn to_dimacs(self) -> isize {
        if self.is_negative() {
            -self.var().to_dimacs()
        } else {
            self.var().to_dimacs()
        }
    }

    /// Index of the underlying variable.
    pub fn index(self) -> usize {
        self.var().index()
    }

    pub fn var(self) -> Var {
        Var(self.0 >> 1)
    }

    pub fn is_negative(self) -> bool {
        self.0 & 1 == 1
    }

    pub fn is_positive(self) -> bool {
        self.0 & 1 == 0
    }

    /// The `2 * index + sign` code, usable as an index into per-literal tables.
    pub fn code(self) -> usize {
        self.0 as usize
    }
}

impl ops::Not for Lit {
    type Output = Lit;

    fn not(self) -> Lit {
        Lit(self.0 ^ 1)
    }
}

/// `lit ^ true` is the negation of `lit`, `lit ^ false` is `lit` itself.
impl ops::BitXor<bool> for Lit {
    type Output = Lit;

    fn bitxor(self, negate: bool) -> Lit {
        Lit(self.0 ^ negate as u32)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_dimacs(), f)
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;
    use proptest::prelude::*;

    pub fn var(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Var> {
        index.prop_map(Var::from_index)
    }

    pub fn lit(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Lit> {
        (index, any::<bool>()).prop_map(|(index, polarity)| Lit::from_index(index, polarity))
    }
}
