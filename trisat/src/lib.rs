//! Trisat decides the satisfiability of boolean formulas in [conjunctive normal form][cnf] using
//! three classical procedures:
//!
//! * [Davis-Putnam][dp] variable elimination, which also builds a model,
//! * [DPLL][dpll] backtracking search with unit propagation and pure literal elimination,
//! * saturation of the clause set under [resolution][resolution], which only decides
//!   satisfiability.
//!
//! All procedures are complete, so they always agree on the verdict. The procedure is selected
//! through [`SolverConfigUpdate`](config::SolverConfigUpdate).
//!
//! [cnf]: https://en.wikipedia.org/wiki/Conjunctive_normal_form
//! [dp]: https://en.wikipedia.org/wiki/Davis%E2%80%93Putnam_algorithm
//! [dpll]: https://en.wikipedia.org/wiki/DPLL_algorithm
//! [resolution]: https://en.wikipedia.org/wiki/Resolution_(logic)

pub mod config;
pub mod solver;

mod dp;
mod dpll;
mod model;
mod prop;
mod resolution;
mod saturation;
mod simplify;
mod state;

pub use state::SolverStats;
pub use trisat_formula::{clause, cnf, lit, Clause, CnfFormula, Lit, Var};

pub mod dimacs {
    //! DIMACS CNF parser and writer.
    pub use trisat_dimacs::*;
}
