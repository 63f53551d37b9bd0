use crate::formula::Formula;
use crate::trail::Trail;

/// Checks whether every clause in `formula` is satisfied under `trail`.
///
/// A clause counts as satisfied only if it has a literal that is *assigned*
/// and true. An unassigned literal never counts, even for a formula solved
/// to completion (where in practice every variable is assigned anyway).
///
/// Grounded on `examples/original_source/src/solver.c`'s `is_satisfied`.
pub fn is_satisfied(formula: &Formula, trail: &Trail) -> bool {
    formula
        .clauses()
        .iter()
        .all(|clause| clause.iter().any(|lit| trail.is_true(lit)))
}
