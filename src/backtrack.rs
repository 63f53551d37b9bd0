use crate::trail::{DecisionKind, Trail};

/// Undoes assignments above decision level `target`, resolving the spec's
/// flip/no-flip open question by flipping the branch variable at `target`
/// (matching `examples/original_source/src/solver.c`'s
/// `backtrack_assignment`, whose `values[i] = !values[i]` for the
/// antecedent-less variable at the backtrack level is unconditional).
///
/// For every variable `v`:
/// - `depth[v] > target`: cleared entirely.
/// - `depth[v] == target` and it was the branch variable: value flipped,
///   stays assigned, antecedent stays `None`, kind stays `Branch`.
/// - `depth[v] == target` and it was implied: cleared. An implication made
///   at the level being returned to is invalidated along with everything
///   above it, and will be re-derived (or replaced) once the just-appended
///   learned clause becomes unit.
///
/// `current_depth_level` is set to `target`.
pub fn backtrack(trail: &mut Trail, target: usize) {
    for var_index in 0..trail.num_variables() {
        let depth = trail.depth(var_index);
        if depth > target {
            trail.clear(var_index);
        } else if depth == target {
            match trail.decision_kind(var_index) {
                DecisionKind::Branch => trail.flip_branch(var_index),
                DecisionKind::Implied => trail.clear(var_index),
                DecisionKind::None => {}
            }
        }
    }

    trail.set_current_depth_level(target);
}
