use log::{debug, trace};

use crate::cdcl::Outcome;
use crate::formula::Formula;
use crate::literal::Literal;
use crate::propagate::{propagate, PropagateResult};
use crate::trail::Trail;

/// Runs the pure DPLL baseline: unit propagation plus chronological
/// backtracking, no clause learning. Explores the lowest-index unassigned
/// variable's positive phase first, then its negative phase, each over a
/// disjoint copy of the trail rather than mutating one trail in place and
/// undoing it. CDCL mode mutates in place and relies on `backtrack` to
/// restore; this mode makes the branches' independence a matter of
/// ownership instead.
///
/// Documented as a baseline correctness-reference mode, not a performance
/// mode (spec §1, §4.6): several execution artifacts in the source this was
/// distilled from exercise exactly this entry point
/// (`examples/original_source/src/solver.c`'s `solve_dpll`,
/// `sat.h`'s `bool solve_dpll(...)` prototype).
pub fn solve_dpll(formula: &Formula) -> Outcome {
    let mut trail = Trail::new(formula.num_variables());

    if let PropagateResult::Conflict(_) = propagate(formula, &mut trail) {
        debug!("conflict at decision level 0 during initial propagation (dpll)");
        return Outcome::Unsat;
    }

    match search(formula, trail) {
        Some(trail) => Outcome::Sat(trail),
        None => Outcome::Unsat,
    }
}

fn search(formula: &Formula, trail: Trail) -> Option<Trail> {
    if trail.all_assigned() {
        return Some(trail);
    }

    let var_index = trail
        .first_unassigned()
        .expect("all_assigned() is false, so an unassigned variable exists");
    let var = (var_index + 1) as i32;

    for phase in [true, false] {
        let mut branch = trail.snapshot();
        let decision = if phase { Literal::new(var) } else { Literal::new(-var) };
        branch.push_decision(decision);
        trace!(
            "dpll decision: {} at level {}",
            decision,
            branch.current_depth_level()
        );

        if let PropagateResult::Conflict(_) = propagate(formula, &mut branch) {
            trace!("dpll branch {decision} conflicts, backtracking chronologically");
            continue;
        }

        if let Some(result) = search(formula, branch) {
            return Some(result);
        }
    }

    None
}
