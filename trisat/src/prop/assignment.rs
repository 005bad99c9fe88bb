//! Partial assignments.
use crate::lit::{Lit, Var};
use trisat_formula::Clause;

/// A partial assignment of truth values to variables.
///
/// Each variable is bound at most once. Rebinding a variable requires an explicit
/// [`unassign`](Assignment::unassign) first.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Assignment {
    assignment: Vec<Option<bool>>,
}

impl Assignment {
    /// An empty assignment able to hold `count` variables.
    pub fn new(count: usize) -> Assignment {
        Assignment {
            assignment: vec![None; count],
        }
    }

    pub fn var_value(&self, var: Var) -> Option<bool> {
        self.assignment.get(var.index()).cloned().flatten()
    }

    pub fn lit_value(&self, lit: Lit) -> Option<bool> {
        self.var_value(lit.var()).map(|b| b ^ lit.is_negative())
    }

    pub fn lit_is_true(&self, lit: Lit) -> bool {
        self.lit_value(lit) == Some(true)
    }

    pub fn lit_is_false(&self, lit: Lit) -> bool {
        self.lit_value(lit) == Some(false)
    }

    /// Make the given literal true.
    ///
    /// The literal's variable has to be unassigned.
    pub fn assign_lit(&mut self, lit: Lit) {
        debug_assert!(
            self.var_value(lit.var()).is_none(),
            "variable {} is already assigned",
            lit.var()
        );
        if self.assignment.len() <= lit.index() {
            self.assignment.resize(lit.index() + 1, None);
        }
        self.assignment[lit.index()] = Some(lit.is_positive());
    }

    pub fn assign_var(&mut self, var: Var, value: bool) {
        self.assign_lit(var.lit(value))
    }

    /// Remove the binding of a variable.
    pub fn unassign(&mut self, var: Var) {
        if let Some(value) = self.assignment.get_mut(var.index()) {
            *value = None;
        }
    }

    /// Whether some literal of the clause is true.
    pub fn satisfies(&self, clause: &Clause) -> bool {
        clause.iter().any(|lit| self.lit_is_true(lit))
    }

    /// The assigned variables as literals that are true, in ascending variable order.
    pub fn true_lits(&self) -> Vec<Lit> {
        self.assignment
            .iter()
            .enumerate()
            .flat_map(|(index, value)| value.map(|polarity| Lit::from_index(index, polarity)))
            .collect()
    }
}
