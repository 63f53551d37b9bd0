use log::{debug, trace};

use crate::analyze::analyze;
use crate::backtrack::backtrack;
use crate::formula::Formula;
use crate::literal::Literal;
use crate::propagate::{propagate, PropagateResult};
use crate::trail::Trail;

/// Outcome of a complete solve.
#[derive(Debug)]
pub enum Outcome {
    /// A complete, satisfying assignment.
    Sat(Trail),
    Unsat,
}

/// Runs the CDCL driver to completion: decide, propagate, analyse,
/// backtrack, repeat, with non-chronological backtracking and clause
/// learning. The formula grows monotonically as learned clauses are
/// appended; no clause is ever removed.
///
/// Branching rule is fixed: lowest-index unassigned variable, positive
/// phase, deliberately the simplest possible choice, so correctness of the
/// learning machinery can be judged in isolation from any heuristic.
///
/// Grounded on the teacher's `Solver::solve` and
/// `examples/original_source/src/solver.c`'s `solve_dpll` control flow (the
/// name there predates the learning loop it grew into; this repository
/// gives the learning driver its own name).
pub fn solve_cdcl(formula: &mut Formula) -> Outcome {
    let mut trail = Trail::new(formula.num_variables());

    if let PropagateResult::Conflict(_) = propagate(formula, &mut trail) {
        debug!("conflict at decision level 0 during initial propagation");
        return Outcome::Unsat;
    }

    while !trail.all_assigned() {
        let var_index = trail
            .first_unassigned()
            .expect("all_assigned() is false, so an unassigned variable exists");
        let decision = Literal::new((var_index + 1) as i32);
        trail.push_decision(decision);
        debug!(
            "decision: {} at level {}",
            decision,
            trail.current_depth_level()
        );

        loop {
            match propagate(formula, &mut trail) {
                PropagateResult::NoConflict => break,
                PropagateResult::Conflict(conflict_clause) => {
                    trace!("conflict in clause {conflict_clause}");
                    match analyze(formula, conflict_clause, &trail) {
                        None => {
                            debug!("conflict analysis reached decision level 0: UNSAT");
                            return Outcome::Unsat;
                        }
                        Some(analysis) => {
                            debug!(
                                "learned clause {} ({}), backtracking to level {}",
                                analysis.learned,
                                formula.clause(analysis.learned),
                                analysis.backtrack_level
                            );
                            backtrack(&mut trail, analysis.backtrack_level);
                        }
                    }
                }
            }
        }
    }

    Outcome::Sat(trail)
}
