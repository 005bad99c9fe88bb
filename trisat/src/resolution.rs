//! Resolution of clauses and saturation of clause sets.
use log::debug;
use rustc_hash::FxHashSet;

use crate::lit::Var;
use crate::state::SolverStats;
use trisat_formula::Clause;

/// Outcome of saturating a clause set.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Saturation {
    /// The empty clause was derived.
    Refuted,
    /// Every resolvent is already present. Contains the closed clause set.
    Closed(Vec<Clause>),
}

/// Resolve two clauses on a variable occurring with opposite polarity in them.
///
/// Returns `None` if the resolvent is tautological. An empty resolvent is a contradiction.
pub fn resolve(a: &Clause, b: &Clause, pivot: Var) -> Option<Clause> {
    let lit = if a.contains(pivot.positive()) {
        pivot.positive()
    } else {
        pivot.negative()
    };
    debug_assert!(a.contains(lit) && b.contains(!lit));

    let resolvent = Clause::new(
        a.iter()
            .filter(|&other| other != lit)
            .chain(b.iter().filter(|&other| other != !lit)),
    );

    if resolvent.is_tautological() {
        None
    } else {
        Some(resolvent)
    }
}

/// All distinct non-tautological resolvents between clauses containing `pivot` positively and
/// clauses containing it negatively.
pub fn resolve_on(
    positive: &[&Clause],
    negative: &[&Clause],
    pivot: Var,
    stats: &mut SolverStats,
) -> Vec<Clause> {
    let mut seen = FxHashSet::default();
    let mut resolvents = vec![];

    for &a in positive {
        for &b in negative {
            if let Some(resolvent) = resolve(a, b, pivot) {
                stats.resolvents += 1;
                if seen.insert(resolvent.clone()) {
                    resolvents.push(resolvent);
                }
            }
        }
    }

    resolvents
}

/// Add resolvents until the empty clause is derived or nothing new can be derived.
///
/// Each round resolves every pair of current clauses on every clashing literal. The input must not
/// contain tautologies.
pub fn saturate(clauses: Vec<Clause>, stats: &mut SolverStats) -> Saturation {
    let mut seen: FxHashSet<Clause> = FxHashSet::default();
    let mut clauses: Vec<Clause> = clauses
        .into_iter()
        .filter(|clause| seen.insert(clause.clone()))
        .collect();

    if clauses.iter().any(Clause::is_empty) {
        return Saturation::Refuted;
    }

    loop {
        stats.saturation_rounds += 1;

        let mut added = vec![];

        for (i, a) in clauses.iter().enumerate() {
            for b in clauses[i + 1..].iter() {
                for lit in a.iter() {
                    if !b.contains(!lit) {
                        continue;
                    }
                    if let Some(resolvent) = resolve(a, b, lit.var()) {
                        stats.resolvents += 1;
                        if resolvent.is_empty() {
                            debug!(
                                "derived the empty clause in round {}",
                                stats.saturation_rounds
                            );
                            return Saturation::Refuted;
                        }
                        if seen.insert(resolvent.clone()) {
                            added.push(resolvent);
                        }
                    }
                }
            }
        }

        debug!(
            "saturation round {}: {} clauses, {} new",
            stats.saturation_rounds,
            clauses.len(),
            added.len()
        );

        if added.is_empty() {
            return Saturation::Closed(clauses);
        }

        clauses.extend(added);
    }
}
