use crate::clause::Clause;
use crate::literal::Literal;

/// Produces the resolvent of `clause_a` and `clause_b` over `pivot`.
///
/// The result contains every literal of `clause_a` except `±pivot`,
/// followed by every literal of `clause_b` except `±pivot` not already
/// present. The result is tautology-free and duplicate-free by construction; callers
/// (the conflict analyser) guarantee exactly one of the two input clauses
/// contains `pivot` and the other contains `-pivot`; this primitive does not
/// verify that.
///
/// Grounded on the teacher's `Solver::resolve` and
/// `examples/original_source/src/solver.c`'s `resolve_clauses`.
pub fn resolve(clause_a: &Clause, clause_b: &Clause, pivot: Literal) -> Clause {
    let mut literals: Vec<Literal> = Vec::with_capacity(clause_a.len() + clause_b.len());

    for lit in clause_a.iter() {
        if lit != pivot && lit != !pivot {
            literals.push(lit);
        }
    }

    for lit in clause_b.iter() {
        if lit != pivot && lit != !pivot && !literals.contains(&lit) {
            literals.push(lit);
        }
    }

    Clause::from_vec(literals).expect("resolving two non-tautological clauses over a shared pivot cannot be empty")
}
