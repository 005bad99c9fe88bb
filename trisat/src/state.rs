//! Miscellaneous solver state.
use std::fmt;

/// Satisfiability state.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SatState {
    Unknown,
    Sat,
    Unsat,
}

impl Default for SatState {
    fn default() -> SatState {
        SatState::Unknown
    }
}

/// Counters collected during a single solve.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct SolverStats {
    /// DPLL branching decisions.
    pub decisions: u64,
    /// DPLL branches that ended in a falsified clause.
    pub conflicts: u64,
    /// Unit clauses propagated.
    pub propagations: u64,
    /// Pure literals assigned.
    pub pure_literals: u64,
    /// Variables eliminated by DP.
    pub eliminated_vars: u64,
    /// Non-tautological resolvents generated.
    pub resolvents: u64,
    /// Rounds of the saturation loop.
    pub saturation_rounds: u64,
}

impl fmt::Display for SolverStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "decisions: {}, conflicts: {}, propagations: {}, pure literals: {}, \
             eliminated variables: {}, resolvents: {}, saturation rounds: {}",
            self.decisions,
            self.conflicts,
            self.propagations,
            self.pure_literals,
            self.eliminated_vars,
            self.resolvents,
            self.saturation_rounds
        )
    }
}
