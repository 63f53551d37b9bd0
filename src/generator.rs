//! Planted-assignment random formula generation, used by tests, `proptest`
//! strategies, and the benchmark harness's `--self-check` mode.
//!
//! Grounded on `examples/original_source/src/test.c`'s
//! `generate_random_formula`. Unlike the original's unseeded `srand(time(NULL))`,
//! this takes an explicit `rand::Rng`, so a seeded `StdRng` makes generation
//! reproducible and keeps the solver's own determinism (spec P7) testable
//! end to end.

use rand::Rng;

use crate::clause::Clause;
use crate::formula::Formula;
use crate::literal::Literal;

/// Generates a formula over `num_vars` variables with `num_clauses` clauses
/// of `clause_size` distinct variables each, together with a planted
/// assignment that satisfies every clause.
///
/// Each clause gets one literal forced to agree with the planted assignment
/// at a randomly chosen position; the remaining literals get independent
/// random polarity over distinct, not-yet-used variables.
pub fn generate_planted_formula(
    rng: &mut impl Rng,
    num_vars: usize,
    num_clauses: usize,
    clause_size: usize,
) -> (Formula, Vec<bool>) {
    assert!(clause_size <= num_vars, "clause_size cannot exceed num_vars when variables must be distinct");

    let planted: Vec<bool> = (0..num_vars).map(|_| rng.gen_bool(0.5)).collect();
    let mut formula = Formula::new(num_vars);

    for _ in 0..num_clauses {
        let satisfied_position = rng.gen_range(0..clause_size);
        let mut vars_used: Vec<usize> = Vec::with_capacity(clause_size);
        let mut literals: Vec<Literal> = Vec::with_capacity(clause_size);

        for position in 0..clause_size {
            let mut var;
            loop {
                var = rng.gen_range(1..=num_vars);
                if !vars_used.contains(&var) {
                    break;
                }
            }
            vars_used.push(var);

            let is_positive = if position == satisfied_position {
                planted[var - 1]
            } else {
                rng.gen_bool(0.5)
            };

            let signed = if is_positive { var as i32 } else { -(var as i32) };
            literals.push(Literal::new(signed));
        }

        formula.push_clause(Clause::from_vec(literals).expect("clause_size > 0 implies non-empty"));
    }

    (formula, planted)
}
