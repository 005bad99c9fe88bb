//! Boolean satisfiability solver.
use std::io;

use anyhow::Error;
use log::{info, warn};
use thiserror::Error;

use crate::cnf::CnfFormula;
use crate::config::{Procedure, SolverConfig, SolverConfigUpdate};
use crate::dimacs::DimacsParser;
use crate::lit::Lit;
use crate::model::check_model;
use crate::simplify::{normalize, written_order};
use crate::state::{SatState, SolverStats};
use crate::{dp, dpll, saturation};

/// Possible errors while solving a formula.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Internal error: model does not satisfy input clause {:?}", clause)]
    InvalidModel { clause: Vec<Lit> },
}

/// A boolean satisfiability solver.
///
/// Collects clauses and decides them with the configured [`Procedure`]. Every call to
/// [`solve`](Solver::solve) starts from scratch.
#[derive(Default)]
pub struct Solver {
    config: SolverConfig,
    formula: CnfFormula,
    sat_state: SatState,
    model: Option<Vec<Lit>>,
    stats: SolverStats,
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Solver {
        Solver::default()
    }

    /// Change the solver configuration.
    pub fn config(&mut self, config_update: &SolverConfigUpdate) {
        self.config.apply(config_update);
    }

    /// Add a formula to the solver.
    pub fn add_formula(&mut self, formula: &CnfFormula) {
        for clause in formula.iter() {
            self.formula.add_clause(clause);
        }
        self.formula.set_var_count(formula.var_count());
        self.sat_state = SatState::Unknown;
        self.model = None;
    }

    /// Reads and adds a formula in DIMACS CNF format.
    ///
    /// A header that disagrees with the parsed formula is reported but not rejected.
    pub fn add_dimacs_cnf(&mut self, input: impl io::Read) -> Result<(), Error> {
        let parser = DimacsParser::parse_incremental(input, |parser| {
            self.add_formula(&parser.take_formula());
            Ok(())
        })?;

        if let Some(header) = parser.header() {
            info!(
                "Header declares {} variables and {} clauses",
                header.var_count, header.clause_count
            );
        }

        if let Err(err) = parser.check_header() {
            warn!("{}", err);
        }

        info!(
            "Parsed formula with {} variables and {} clauses",
            parser.var_count(),
            parser.clause_count()
        );

        Ok(())
    }

    /// Check the satisfiability of the current formula.
    pub fn solve(&mut self) -> Result<bool, SolverError> {
        self.sat_state = SatState::Unknown;
        self.model = None;
        self.stats = SolverStats::default();

        let formula = &self.formula;
        let var_count = formula.var_count();
        let stats = &mut self.stats;

        info!(
            "Solving {} clauses over {} variables using {}",
            formula.len(),
            var_count,
            self.config.procedure
        );

        let (sat, assignment) = match self.config.procedure {
            Procedure::Dp => {
                let assignment = dp::solve(normalize(formula), var_count, stats);
                (assignment.is_some(), assignment)
            }
            Procedure::Dpll => {
                let clauses = written_order(formula);
                let assignment = dpll::solve(clauses, var_count, &self.config, stats);
                (assignment.is_some(), assignment)
            }
            Procedure::Resolution => (saturation::solve(normalize(formula), stats), None),
        };

        if let Some(assignment) = assignment {
            if self.config.check_model {
                check_model(&self.formula, &assignment)?;
            }
            self.model = Some(assignment.true_lits());
        }

        self.sat_state = if sat { SatState::Sat } else { SatState::Unsat };

        Ok(sat)
    }

    /// Set of literals that satisfy the formula.
    ///
    /// Only available after a satisfiable result of a procedure that builds models. Variables
    /// that are not needed to satisfy the formula may be missing.
    pub fn model(&self) -> Option<Vec<Lit>> {
        if self.sat_state == SatState::Sat {
            self.model.clone()
        } else {
            None
        }
    }

    /// Statistics of the last call to [`solve`](Solver::solve).
    pub fn stats(&self) -> SolverStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use trisat_formula::{
        cnf::strategy::cnf_formula, cnf_formula, lit,
        test::{pigeon_hole, sat_formula, sgen_unsat_formula},
    };

    use crate::dimacs::write_dimacs;

    const PROCEDURES: [Procedure; 3] = [Procedure::Dp, Procedure::Dpll, Procedure::Resolution];

    fn solver_for(procedure: Procedure, formula: &CnfFormula) -> Solver {
        let mut solver = Solver::new();
        solver.config(&SolverConfigUpdate {
            procedure: Some(procedure),
            ..SolverConfigUpdate::new()
        });
        solver.add_formula(formula);
        solver
    }

    fn check_witness(formula: &CnfFormula, model: &[Lit]) -> bool {
        formula.iter().all(|clause| {
            clause.iter().any(|lit| clause.contains(&!*lit))
                || clause.iter().any(|lit| model.contains(lit))
        })
    }

    #[test]
    fn empty_formula() {
        for &procedure in PROCEDURES.iter() {
            let mut solver = solver_for(procedure, &CnfFormula::new());
            assert_eq!(solver.solve().unwrap(), true);
            if procedure != Procedure::Resolution {
                assert_eq!(solver.model(), Some(vec![]));
            }
        }
    }

    #[test]
    fn unit_contradiction() {
        let formula = cnf_formula![
            1;
            -1;
        ];
        for &procedure in PROCEDURES.iter() {
            let mut solver = solver_for(procedure, &formula);
            assert_eq!(solver.solve().unwrap(), false);
            assert_eq!(solver.model(), None);
        }
    }

    #[test]
    fn minimal_sat() {
        let formula = cnf_formula![
            1, 2;
            -1, 2;
            1, -2;
        ];
        for &procedure in PROCEDURES.iter() {
            let mut solver = solver_for(procedure, &formula);
            assert_eq!(solver.solve().unwrap(), true);
            match procedure {
                Procedure::Resolution => assert_eq!(solver.model(), None),
                _ => {
                    let model = solver.model().unwrap();
                    assert!(check_witness(&formula, &model));
                    assert!(model.contains(&lit!(1)));
                    assert!(model.contains(&lit!(2)));
                }
            }
        }
    }

    #[test]
    fn tautology_does_not_influence_verdict() {
        let with_tautology = cnf_formula![
            1, -1, 2;
            -2;
        ];
        for &procedure in PROCEDURES.iter() {
            let mut solver = solver_for(procedure, &with_tautology);
            assert_eq!(solver.solve().unwrap(), true);
            if let Some(model) = solver.model() {
                assert!(check_witness(&with_tautology, &model));
            }
        }
    }

    #[test]
    fn pure_literal_in_dpll() {
        let formula = cnf_formula![
            1, 2;
            1, 3;
        ];
        let mut solver = solver_for(Procedure::Dpll, &formula);
        assert_eq!(solver.solve().unwrap(), true);
        assert!(solver.model().unwrap().contains(&lit!(1)));
        assert_eq!(solver.stats().decisions, 0);
        assert_eq!(solver.stats().pure_literals, 1);
    }

    #[test]
    fn pigeon_hole_is_unsat() {
        let formula = pigeon_hole(2);
        for &procedure in PROCEDURES.iter() {
            let mut solver = solver_for(procedure, &formula);
            assert_eq!(solver.solve().unwrap(), false);
        }
    }

    #[test]
    fn repeated_solves_agree() {
        let formulas = [
            pigeon_hole(2),
            cnf_formula![
                1, 2, -3;
                -1, 3;
                -2, 3;
                2, -1;
            ],
        ];
        for formula in formulas.iter() {
            for &procedure in PROCEDURES.iter() {
                let mut solver = solver_for(procedure, formula);
                let first = solver.solve().unwrap();
                let first_stats = solver.stats();
                let first_model = solver.model();
                for _ in 0..3 {
                    assert_eq!(solver.solve().unwrap(), first);
                    assert_eq!(solver.stats(), first_stats);
                    assert_eq!(solver.model(), first_model);
                }
                if procedure == Procedure::Resolution {
                    assert!(first_stats.saturation_rounds > 0);
                    assert!(first_stats.resolvents > 0);
                }
            }
        }
    }

    #[test]
    fn dpll_branches_on_first_written_literal() {
        let mut solver = solver_for(Procedure::Dpll, &cnf_formula![2, 1; -2, -1;]);
        assert_eq!(solver.solve().unwrap(), true);
        assert_eq!(solver.model(), Some(vec![lit!(-1), lit!(2)]));

        let mut solver = solver_for(Procedure::Dpll, &cnf_formula![1, 2; -1, -2;]);
        assert_eq!(solver.solve().unwrap(), true);
        assert_eq!(solver.model(), Some(vec![lit!(1), lit!(-2)]));
    }

    #[test]
    fn clauses_accumulate() {
        let mut solver = Solver::new();
        solver.add_formula(&cnf_formula![1, 2;]);
        assert_eq!(solver.solve().unwrap(), true);
        solver.add_formula(&cnf_formula![-1; -2;]);
        assert_eq!(solver.model(), None);
        assert_eq!(solver.solve().unwrap(), false);
    }

    #[test]
    fn dimacs_input() -> Result<(), Error> {
        let mut solver = Solver::new();
        solver.add_dimacs_cnf(&b"c example\np cnf 3 2\n1 -2 0\n2 3\n-1\n"[..])?;
        assert_eq!(solver.solve()?, true);

        let model = solver.model().unwrap();
        assert!(model.contains(&lit!(-1)));
        assert!(model.contains(&lit!(-2)));
        assert!(model.contains(&lit!(3)));

        Ok(())
    }

    proptest! {
        #[test]
        fn procedures_agree(formula in cnf_formula(1..6usize, 0..12, 0..4)) {
            let mut verdicts = vec![];

            for &procedure in PROCEDURES.iter() {
                let mut solver = solver_for(procedure, &formula);
                let sat = solver.solve().unwrap();
                if let Some(model) = solver.model() {
                    prop_assert!(check_witness(&formula, &model));
                }
                verdicts.push(sat);
            }

            prop_assert!(verdicts.iter().all(|&sat| sat == verdicts[0]), "{:?}", verdicts);
        }

        #[test]
        fn sgen_unsat(formula in sgen_unsat_formula(1..2usize)) {
            for &procedure in PROCEDURES.iter() {
                let mut solver = solver_for(procedure, &formula);
                prop_assert_eq!(solver.solve().unwrap(), false);
            }
        }

        #[test]
        fn sat(formula in sat_formula(4..9usize, 5..25usize, 0.05..0.3, 0.6..1.0)) {
            for &procedure in [Procedure::Dp, Procedure::Dpll].iter() {
                let mut solver = solver_for(procedure, &formula);
                prop_assert_eq!(solver.solve().unwrap(), true);

                let model = solver.model().unwrap();
                prop_assert!(check_witness(&formula, &model));
            }
        }

        #[test]
        fn sat_via_dimacs(formula in sat_formula(4..20usize, 10..100usize, 0.05..0.2, 0.9..1.0)) {
            let mut solver = Solver::new();

            let mut dimacs = vec![];

            write_dimacs(&mut dimacs, &formula).unwrap();

            solver.add_dimacs_cnf(&mut &dimacs[..]).unwrap();

            prop_assert_eq!(solver.solve().unwrap(), true);

            let model = solver.model().unwrap();

            for clause in formula.iter() {
                prop_assert!(clause.iter().any(|lit| model.contains(lit)));
            }
        }
    }
}
