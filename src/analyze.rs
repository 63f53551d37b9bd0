use crate::clause::Clause;
use crate::formula::{ClauseId, Formula};
use crate::resolve::resolve;
use crate::trail::{DecisionKind, Trail};

/// Outcome of conflict analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// Where the learned clause landed in the formula.
    pub learned: ClauseId,
    /// Level to backtrack to; `0` forces the assertion literal at the root.
    pub backtrack_level: usize,
}

/// Runs first-UIP conflict analysis starting from `conflict_clause`,
/// appends the learned clause to `formula`, and reports the backtrack
/// level.
///
/// Returns `None` if the conflict arose at decision level 0: the formula
/// is unsatisfiable and there is nowhere left to backtrack to.
///
/// The "choose any IMPLIED literal at the current depth" step in the spec's
/// 1-UIP loop is fixed here to the first such literal in the clause's
/// current literal order, to keep search traces bit-reproducible across
/// runs (spec §5, §9).
///
/// Grounded on the teacher's `conflict_analysis_and_backtrack` and
/// `examples/original_source/src/solver.c`'s `conflict_analysis` /
/// `getSecondLargest`.
pub fn analyze(formula: &mut Formula, conflict_clause: ClauseId, trail: &Trail) -> Option<Analysis> {
    let current_level = trail.current_depth_level();
    if current_level == 0 {
        return None;
    }

    let mut learned: Clause = formula.clause(conflict_clause).clone();

    loop {
        let at_current_depth = |c: &Clause| {
            c.iter()
                .filter(|lit| trail.depth(lit.var_index()) == current_level)
                .count()
        };

        if at_current_depth(&learned) <= 1 {
            break;
        }

        let pivot = learned
            .iter()
            .find(|lit| {
                trail.depth(lit.var_index()) == current_level
                    && trail.decision_kind(lit.var_index()) == DecisionKind::Implied
            })
            .expect("more than one current-depth literal implies at least one is Implied");

        let antecedent_id = trail
            .antecedent(pivot.var_index())
            .expect("pivot was selected for having an antecedent");
        let antecedent = formula.clause(antecedent_id).clone();

        learned = resolve(&learned, &antecedent, pivot);
    }

    let learned_id = formula.push_clause(learned.clone());

    let backtrack_level = if learned.len() <= 1 {
        0
    } else {
        second_largest_depth(&learned, trail)
    };

    Some(Analysis {
        learned: learned_id,
        backtrack_level,
    })
}

/// The largest depth strictly less than the maximum depth among the
/// clause's literals. "Second-largest" in the sense of the spec's §4.4
/// step 5, not the second entry of a sorted list with ties collapsed away.
fn second_largest_depth(clause: &Clause, trail: &Trail) -> usize {
    let mut depths: Vec<usize> = clause.iter().map(|lit| trail.depth(lit.var_index())).collect();
    depths.sort_unstable();
    let max = *depths.last().expect("clause is non-empty");
    depths
        .into_iter()
        .rev()
        .find(|&d| d != max)
        .unwrap_or(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;
    use crate::literal::Literal;
    use crate::propagate::{propagate, PropagateResult};

    #[test]
    fn unit_learned_clause_backtracks_to_root() {
        // 1 is a decision; -1 is a unit clause; the conflict at level 1 must
        // learn a clause forcing -1 at level 0.
        let mut f = Formula::new(1);
        f.push_clause(Clause::new([-1]));

        let mut t = Trail::new(1);
        t.push_decision(Literal::new(1));
        let conflict = match propagate(&f, &mut t) {
            PropagateResult::Conflict(id) => id,
            PropagateResult::NoConflict => panic!("expected a conflict"),
        };

        let analysis = analyze(&mut f, conflict, &t).expect("level > 0, should not be UNSAT");
        assert_eq!(analysis.backtrack_level, 0);
        assert_eq!(f.clause(analysis.learned).len(), 1);
    }

    #[test]
    fn conflict_at_root_returns_none() {
        let mut f = Formula::new(1);
        f.push_clause(Clause::new([1]));
        f.push_clause(Clause::new([-1]));

        let mut t = Trail::new(1);
        let conflict = match propagate(&f, &mut t) {
            PropagateResult::Conflict(id) => id,
            PropagateResult::NoConflict => panic!("expected a conflict"),
        };

        assert!(analyze(&mut f, conflict, &t).is_none());
    }

    #[test]
    fn learned_clause_is_appended_to_formula() {
        let mut f = Formula::new(3);
        f.push_clause(Clause::new([1, 2]));
        f.push_clause(Clause::new([-1, 3]));
        f.push_clause(Clause::new([-2, -3]));

        let mut t = Trail::new(3);
        t.push_decision(Literal::new(1));
        t.push_decision(Literal::new(2));
        let before = f.num_clauses();
        let conflict = match propagate(&f, &mut t) {
            PropagateResult::Conflict(id) => id,
            PropagateResult::NoConflict => panic!("expected a conflict"),
        };
        let analysis = analyze(&mut f, conflict, &t).expect("level 2 conflict has somewhere to go");
        assert_eq!(f.num_clauses(), before + 1);
        assert_eq!(analysis.learned, before);
    }
}
