//! Clauses as sets of literals

use super::literal::Literal;
use super::term::Variable;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::fmt;

/// A clause: an unordered set of literals
///
/// Duplicate literals collapse and equality ignores order. Insertion order is
/// kept only so that enumeration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    literals: IndexSet<Literal>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause
    pub fn empty() -> Self {
        Clause::default()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// Insert a literal, returning false if it was already present
    pub fn insert(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    /// A copy of this clause with `literal` removed
    pub fn without(&self, literal: &Literal) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .filter(|l| *l != literal)
                .cloned()
                .collect(),
        }
    }

    /// Check whether every literal of `self` also occurs in `other`
    pub fn is_subset(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// Collect all variables in this clause
    pub fn variables(&self) -> HashSet<Variable> {
        let mut vars = HashSet::new();
        for lit in &self.literals {
            lit.collect_variables(&mut vars);
        }
        vars
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl IntoIterator for Clause {
    type Item = Literal;
    type IntoIter = indexmap::set::IntoIter<Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = indexmap::set::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}
