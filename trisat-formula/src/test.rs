//! Formula generators for tests.
use proptest::{prelude::*, *};

use rand::distributions::Bernoulli;
use rand::seq::SliceRandom;

use crate::cnf::CnfFormula;
use crate::lit::Lit;

/// Generate small hard unsat instances.
///
/// Implementation of http://www.cs.qub.ac.uk/~i.spence/sgen/ but with random partitions. A
/// formula with `blocks` blocks has `4 * blocks + 1` variables.
pub fn sgen_unsat_formula(
    blocks: impl Strategy<Value = usize>,
) -> impl Strategy<Value = CnfFormula> {
    blocks.prop_flat_map(|blocks| {
        collection::vec(bool::ANY, blocks * 4 + 1).prop_perturb(|polarity, mut rng| {
            let mut clauses: Vec<Vec<Lit>> = vec![];
            let mut lits: Vec<Lit> = polarity
                .into_iter()
                .enumerate()
                .map(|(index, polarity)| Lit::from_index(index, polarity))
                .collect();

            for &invert in [false, true].iter() {
                lits.shuffle(&mut rng);
                for block in lits.chunks_exact(4) {
                    for a in 0..4 {
                        for b in 0..a {
                            for c in 0..b {
                                let mut clause =
                                    vec![block[a] ^ invert, block[b] ^ invert, block[c] ^ invert];
                                clause.shuffle(&mut rng);
                                clauses.push(clause);
                            }
                        }
                    }
                }
                let &lit_a = lits.last().unwrap();
                for b in 0..4 {
                    for c in 0..b {
                        let mut clause = vec![lit_a ^ invert, lits[b] ^ invert, lits[c] ^ invert];
                        clause.shuffle(&mut rng);
                        clauses.push(clause);
                    }
                }
            }

            clauses.shuffle(&mut rng);
            CnfFormula::from(clauses)
        })
    })
}

/// Generate a sat instance.
///
/// Picks a hidden full assignment and only emits clauses containing at least one literal that is
/// true under it. No generated clause is tautological.
pub fn sat_formula(
    vars: impl Strategy<Value = usize>,
    clause_count: impl Strategy<Value = usize>,
    density: impl Strategy<Value = f64>,
    polarity_dist: impl Strategy<Value = f64>,
) -> impl Strategy<Value = CnfFormula> {
    (vars, clause_count, density, polarity_dist).prop_flat_map(
        |(vars, clause_count, density, polarity_dist)| {
            let density = Bernoulli::new(density).unwrap();
            let polarity_dist = Bernoulli::new(polarity_dist).unwrap();

            collection::vec(bool::ANY, vars).prop_perturb(move |polarity, mut rng| {
                let mut clauses: Vec<Vec<Lit>> = vec![];
                let hidden: Vec<Lit> = polarity
                    .into_iter()
                    .enumerate()
                    .map(|(index, polarity)| Lit::from_index(index, polarity))
                    .collect();

                for _ in 0..clause_count {
                    let &fixed_lit = hidden.choose(&mut rng).unwrap();
                    let mut clause = vec![fixed_lit];
                    for &lit in hidden.iter() {
                        if lit != fixed_lit && rng.sample(density) {
                            clause.push(lit ^ rng.sample(polarity_dist));
                        }
                    }
                    clause.shuffle(&mut rng);
                    clauses.push(clause);
                }

                clauses.shuffle(&mut rng);
                CnfFormula::from(clauses)
            })
        },
    )
}

/// The pigeon hole principle for `holes + 1` pigeons, which is unsatisfiable.
///
/// Variable `p * holes + h` (0-based) states that pigeon `p` sits in hole `h`.
pub fn pigeon_hole(holes: usize) -> CnfFormula {
    let pigeons = holes + 1;
    let sits = |pigeon: usize, hole: usize| Lit::from_index(pigeon * holes + hole, true);

    let mut formula = CnfFormula::new();
    for pigeon in 0..pigeons {
        formula.add_clause((0..holes).map(|hole| sits(pigeon, hole)));
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in 0..a {
                formula.add_clause(vec![!sits(a, hole), !sits(b, hole)]);
            }
        }
    }
    formula
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pigeon_hole_size() {
        let formula = pigeon_hole(2);
        assert_eq!(formula.var_count(), 6);
        // 3 "somewhere" clauses, 3 pairs per hole
        assert_eq!(formula.len(), 3 + 2 * 3);
    }

    proptest! {
        #[test]
        fn sgen_var_count(formula in sgen_unsat_formula(1..4usize)) {
            prop_assert_eq!(formula.var_count() % 4, 1);
        }
    }
}
