use crate::formula::ClauseId;
use crate::literal::Literal;

/// The kind of assignment recorded for a variable.
///
/// Redundant with `antecedent == None` vs. `depth == 0`, but kept explicit
/// per the data model (spec §3) so backtracking and analysis never have to
/// reconstruct it from the other two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Unassigned.
    None,
    /// A branching decision pushed by the driver.
    Branch,
    /// Forced by unit propagation.
    Implied,
}

/// Per-variable assignment state, indexed 1-based by variable (`var()`),
/// stored 0-based internally (`var_index()`).
#[derive(Debug, Clone)]
struct VarState {
    assigned: bool,
    value: bool,
    depth: usize,
    antecedent: Option<ClauseId>,
    decision: DecisionKind,
}

impl VarState {
    fn unassigned() -> VarState {
        VarState {
            assigned: false,
            value: false,
            depth: 0,
            antecedent: None,
            decision: DecisionKind::None,
        }
    }
}

/// The assignment trail: per-variable value/depth/antecedent/decision-kind,
/// plus the scalar `current_depth_level` counter.
///
/// Invariants (checked by the driver between steps, exercised by the
/// `proptest` suite in `tests/`):
/// - I1: `assigned[v] ⇒ depth[v] ≤ current_depth_level`.
/// - I2: `antecedent[v] ≠ None` ⇒ the forcing clause's literal for `v`
///   matches `value[v]`'s polarity and every other literal is falsified at
///   or before `depth[v]`.
/// - I3: `Branch` variables have unique depths forming `1..=current_depth_level`.
/// - I4: after a successful `propagate`, no clause classifies as UNIT or UNSAT.
#[derive(Debug, Clone)]
pub struct Trail {
    vars: Vec<VarState>,
    current_depth_level: usize,
}

impl Trail {
    pub fn new(num_variables: usize) -> Trail {
        Trail {
            vars: (0..num_variables).map(|_| VarState::unassigned()).collect(),
            current_depth_level: 0,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.vars.len()
    }

    pub fn current_depth_level(&self) -> usize {
        self.current_depth_level
    }

    pub fn assigned_count(&self) -> usize {
        self.vars.iter().filter(|v| v.assigned).count()
    }

    pub fn all_assigned(&self) -> bool {
        self.assigned_count() == self.vars.len()
    }

    pub fn is_assigned(&self, var_index: usize) -> bool {
        self.vars[var_index].assigned
    }

    /// True if `literal` is satisfied under the current assignment; false
    /// if it is falsified *or* unassigned (callers needing to distinguish
    /// falsified-from-unassigned should check [`Trail::is_assigned`] first).
    pub fn is_true(&self, literal: Literal) -> bool {
        let v = &self.vars[literal.var_index()];
        v.assigned && literal.satisfied_by(v.value)
    }

    /// True if `literal` is falsified under the current assignment.
    pub fn is_false(&self, literal: Literal) -> bool {
        let v = &self.vars[literal.var_index()];
        v.assigned && !literal.satisfied_by(v.value)
    }

    pub fn value(&self, var_index: usize) -> Option<bool> {
        let v = &self.vars[var_index];
        v.assigned.then_some(v.value)
    }

    pub fn depth(&self, var_index: usize) -> usize {
        self.vars[var_index].depth
    }

    pub fn antecedent(&self, var_index: usize) -> Option<ClauseId> {
        self.vars[var_index].antecedent
    }

    pub fn decision_kind(&self, var_index: usize) -> DecisionKind {
        self.vars[var_index].decision
    }

    /// Picks the lowest-indexed unassigned variable, 0-based. `None` if all
    /// variables are assigned. This is the branching rule fixed by the spec
    /// (lowest unassigned index, positive phase; the phase is applied by the
    /// caller when constructing the decision literal).
    pub fn first_unassigned(&self) -> Option<usize> {
        self.vars.iter().position(|v| !v.assigned)
    }

    /// Pushes a branching decision, bumping `current_depth_level`.
    pub fn push_decision(&mut self, literal: Literal) {
        self.current_depth_level += 1;
        self.set(literal, self.current_depth_level, None, DecisionKind::Branch);
    }

    /// Records a literal forced by unit propagation at the current depth.
    pub fn push_implied(&mut self, literal: Literal, antecedent: ClauseId) {
        let depth = self.current_depth_level;
        self.set(literal, depth, Some(antecedent), DecisionKind::Implied);
    }

    fn set(
        &mut self,
        literal: Literal,
        depth: usize,
        antecedent: Option<ClauseId>,
        decision: DecisionKind,
    ) {
        let idx = literal.var_index();
        self.vars[idx] = VarState {
            assigned: true,
            value: literal.is_positive(),
            depth,
            antecedent,
            decision,
        };
    }

    /// Clears a variable's assignment entirely (used for variables strictly
    /// above the backtrack target, and for invalidated implications at the
    /// target level).
    pub fn clear(&mut self, var_index: usize) {
        self.vars[var_index] = VarState::unassigned();
    }

    /// Flips the value of an already-assigned branch variable in place,
    /// keeping its depth and `Branch` kind but clearing its (already-absent)
    /// antecedent. Used by [`crate::backtrack::backtrack`].
    pub fn flip_branch(&mut self, var_index: usize) {
        let v = &mut self.vars[var_index];
        debug_assert_eq!(v.decision, DecisionKind::Branch);
        v.value = !v.value;
        v.antecedent = None;
    }

    pub fn set_current_depth_level(&mut self, level: usize) {
        self.current_depth_level = level;
    }

    /// A full snapshot, used by DPLL mode which explores both phases of a
    /// decision over disjoint copies rather than mutating in place.
    pub fn snapshot(&self) -> Trail {
        self.clone()
    }
}
