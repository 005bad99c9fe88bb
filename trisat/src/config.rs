//! Solver configuration.
use std::fmt;

use serde::Deserialize;

/// The decision procedure used by [`Solver::solve`](crate::solver::Solver::solve).
///
/// All procedures are complete and agree on satisfiability. Only DP and DPLL produce a model.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Procedure {
    /// Davis-Putnam variable elimination.
    Dp,
    /// Backtracking search with unit propagation and pure literal elimination.
    Dpll,
    /// Saturation of the formula under resolution.
    Resolution,
}

impl Default for Procedure {
    fn default() -> Procedure {
        Procedure::Dpll
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Procedure::Dp => "dp",
            Procedure::Dpll => "dpll",
            Procedure::Resolution => "resolution",
        })
    }
}

/// Configurable parameters used during solving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Decision procedure to use. (Default: dpll)
    pub procedure: Procedure,

    /// Assign pure literals during DPLL propagation. (Default: true)
    pub pure_literals: bool,

    /// Check a found model against the input formula. (Default: true)
    pub check_model: bool,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            procedure: Procedure::default(),
            pure_literals: true,
            check_model: true,
        }
    }
}

impl SolverConfig {
    /// Description of all options, as accepted by [`SolverConfigUpdate`].
    pub fn help() -> String {
        concat!(
            "procedure = \"dp\" | \"dpll\" | \"resolution\"\n",
            "    Decision procedure to use. (Default: \"dpll\")\n",
            "pure_literals = true | false\n",
            "    Assign pure literals during DPLL propagation. (Default: true)\n",
            "check_model = true | false\n",
            "    Check a found model against the input formula. (Default: true)\n",
        )
        .to_owned()
    }

    /// Apply all values present in an update.
    pub fn apply(&mut self, update: &SolverConfigUpdate) {
        if let Some(procedure) = update.procedure {
            self.procedure = procedure;
        }
        if let Some(pure_literals) = update.pure_literals {
            self.pure_literals = pure_literals;
        }
        if let Some(check_model) = update.check_model {
            self.check_model = check_model;
        }
    }
}

/// A partial set of configuration values.
///
/// Deserializes from TOML tables using the field names of [`SolverConfig`].
#[derive(Clone, Default, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfigUpdate {
    pub procedure: Option<Procedure>,
    pub pure_literals: Option<bool>,
    pub check_model: Option<bool>,
}

impl SolverConfigUpdate {
    /// Create an empty config update.
    pub fn new() -> SolverConfigUpdate {
        SolverConfigUpdate::default()
    }

    /// Merge two config updates, values of `other` take precedence.
    pub fn merge(&mut self, other: SolverConfigUpdate) {
        self.procedure = other.procedure.or(self.procedure);
        self.pure_literals = other.pure_literals.or(self.pure_literals);
        self.check_model = other.check_model.or(self.check_model);
    }
}
