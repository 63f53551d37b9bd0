use std::fmt;

use crate::literal::Literal;

/// An ordered, growable disjunction of literals.
///
/// Storage does not enforce distinctness; the resolution primitive
/// ([`crate::resolve::resolve`]) is responsible for deduplicating its
/// output, not `Clause` itself. Empty clauses are never constructed:
/// [`Clause::new`] and [`Clause::from_vec`] both reject them, since an empty
/// clause is only ever a transient concept (the analyser deriving UNSAT),
/// never something stored in a [`crate::formula::Formula`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

/// A clause with zero literals was about to be constructed or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("empty clauses cannot be constructed or stored")]
pub struct EmptyClause;

impl Clause {
    /// Builds a clause from a literal vector, rejecting the empty case.
    pub fn from_vec(literals: Vec<Literal>) -> Result<Clause, EmptyClause> {
        if literals.is_empty() {
            Err(EmptyClause)
        } else {
            Ok(Clause { literals })
        }
    }

    /// Builds a clause from two or more literals provided directly, useful
    /// for tests and literal scenario construction.
    pub fn new(literals: impl IntoIterator<Item = i32>) -> Clause {
        let literals: Vec<Literal> = literals.into_iter().map(Literal::new).collect();
        Clause::from_vec(literals).expect("scenario clauses must be non-empty")
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " \u{2228} ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, ")")
    }
}
