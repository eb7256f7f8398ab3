//! Term-pair substitution used by the LGG engine
//!
//! Generalizing two clauses maps every pair of terms found at corresponding
//! positions to a single generalized term. The mapping is memoized so that
//! the same pair always yields the same term within one generalization,
//! which is what ties variables together across literals: generalizing
//! `parent(ingrid,jana)` with `parent(anna,eva)` and `female(ingrid)` with
//! `female(anna)` must use one variable for the pair `(ingrid, anna)`.

use crate::logic::{CommonAncestor, Term, Variable};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of fresh variables `V1`, `V2`, ...
///
/// Names are never reissued by the same generator. The counter is atomic so a
/// generator can be shared by reference.
#[derive(Debug)]
pub struct FreshVariables {
    prefix: String,
    next: AtomicUsize,
}

impl FreshVariables {
    pub fn new() -> Self {
        FreshVariables::with_prefix("V")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        FreshVariables::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: usize) -> Self {
        FreshVariables {
            prefix: prefix.into(),
            next: AtomicUsize::new(first),
        }
    }

    /// Mint a variable whose name is not in `reserved`
    pub fn fresh(&self, reserved: &HashSet<Variable>) -> Variable {
        loop {
            let n = self.next.fetch_add(1, Ordering::Relaxed);
            let var = Variable::new(format!("{}{}", self.prefix, n));
            if !reserved.contains(&var) {
                return var;
            }
        }
    }

}

impl Default for FreshVariables {
    fn default() -> Self {
        FreshVariables::new()
    }
}

/// Memoizing map from a pair of terms to their generalization
///
/// The key is the ordered pair (term of the first clause, term of the second
/// clause). Scoped to a single generalization call.
pub struct Substitution<'a> {
    taxonomy: &'a dyn CommonAncestor,
    variables: &'a FreshVariables,
    reserved: &'a HashSet<Variable>,
    map: HashMap<(Term, Term), Term>,
}

impl<'a> Substitution<'a> {
    /// `reserved` holds the variables of both input clauses, which fresh
    /// variables must not collide with.
    pub fn new(
        taxonomy: &'a dyn CommonAncestor,
        variables: &'a FreshVariables,
        reserved: &'a HashSet<Variable>,
    ) -> Self {
        Substitution {
            taxonomy,
            variables,
            reserved,
            map: HashMap::new(),
        }
    }

    /// Generalization of `left` (first clause) and `right` (second clause)
    pub fn resolve(&mut self, left: &Term, right: &Term) -> Term {
        let key = (left.clone(), right.clone());
        if let Some(term) = self.map.get(&key) {
            return term.clone();
        }
        let term = self.resolve_pair(left, right);
        self.map.insert(key, term.clone());
        term
    }

    fn resolve_pair(&self, left: &Term, right: &Term) -> Term {
        if left == right {
            return left.clone();
        }
        match (left, right) {
            (Term::Constant(a), Term::Constant(b)) => self
                .taxonomy
                .closest_common_ancestor(a, b)
                .map(Term::Constant)
                .unwrap_or_else(|| self.fresh()),
            // A variable absorbs a mismatched constant
            (Term::Constant(_), Term::Variable(v)) | (Term::Variable(v), Term::Constant(_)) => {
                Term::Variable(v.clone())
            }
            _ => self.fresh(),
        }
    }

    fn fresh(&self) -> Term {
        Term::Variable(self.variables.fresh(self.reserved))
    }
}
