use crate::formula::{ClauseId, Formula};
use crate::status::{classify, unit_literal, ClauseStatus};
use crate::trail::Trail;

/// Outcome of a propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagateResult {
    /// Fixed point reached; invariant I4 holds (no clause is UNIT or UNSAT).
    NoConflict,
    /// Clause `0` (by [`ClauseId`]) is UNSAT under the current assignment.
    Conflict(ClauseId),
}

/// Runs unit propagation to a fixed point.
///
/// Scans clauses in ascending index order on every pass; a UNIT clause
/// immediately assigns its unassigned literal (`depth` = the trail's current
/// level, `antecedent` = this clause, `decision` = Implied) and restarts the
/// "any change this pass" bookkeeping; a UNSAT clause stops the scan and
/// returns that clause as the conflict, without touching the trail further.
///
/// Grounded on the teacher's `Solver::unit_propagate` and
/// `examples/original_source/src/solver.c`'s `unit_propagation`.
pub fn propagate(formula: &Formula, trail: &mut Trail) -> PropagateResult {
    loop {
        let mut changed = false;

        for (id, clause) in formula.iter() {
            match classify(clause, trail) {
                ClauseStatus::Sat | ClauseStatus::Unresolved => continue,
                ClauseStatus::Unit => {
                    let lit = unit_literal(clause, trail);
                    trail.push_implied(lit, id);
                    changed = true;
                }
                ClauseStatus::Unsat => return PropagateResult::Conflict(id),
            }
        }

        if !changed {
            return PropagateResult::NoConflict;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;
    use crate::literal::Literal;

    #[test]
    fn chains_unit_propagation_to_fixed_point() {
        let mut f = Formula::new(3);
        f.push_clause(Clause::new([1]));
        f.push_clause(Clause::new([-1, 2]));
        f.push_clause(Clause::new([-2, 3]));

        let mut t = Trail::new(3);
        let result = propagate(&f, &mut t);

        assert_eq!(result, PropagateResult::NoConflict);
        assert!(t.is_true(Literal::new(1)));
        assert!(t.is_true(Literal::new(2)));
        assert!(t.is_true(Literal::new(3)));
    }

    #[test]
    fn detects_conflict_clause() {
        let mut f = Formula::new(2);
        f.push_clause(Clause::new([1]));
        f.push_clause(Clause::new([-1]));

        let mut t = Trail::new(2);
        let result = propagate(&f, &mut t);

        assert_eq!(result, PropagateResult::Conflict(1));
    }

    #[test]
    fn already_sat_clause_never_forces_a_redundant_assignment() {
        let mut f = Formula::new(2);
        f.push_clause(Clause::new([1, 2]));

        let mut t = Trail::new(2);
        t.push_decision(Literal::new(1));
        let before = t.assigned_count();
        let result = propagate(&f, &mut t);

        assert_eq!(result, PropagateResult::NoConflict);
        assert_eq!(t.assigned_count(), before);
    }
}
