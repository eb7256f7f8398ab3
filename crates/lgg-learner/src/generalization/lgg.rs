//! Least general generalization of two clauses
//!
//! Every literal of the first clause is paired with every literal of the
//! second. Pairs with the same polarity and predicate are generalized
//! argument by argument; all other pairs contribute nothing. Compound terms
//! over the same function symbol are generalized structurally, any other pair
//! of terms goes through the memoizing [`Substitution`].

use super::substitution::{FreshVariables, Substitution};
use crate::error::{LggError, Result};
use crate::logic::{Atom, Clause, CommonAncestor, Literal, NoTaxonomy, Taxonomy, Term};

/// LGG operator; owns the fresh-variable generator so that variables minted
/// by successive calls never clash.
#[derive(Debug, Default)]
pub struct Lgg {
    variables: FreshVariables,
}

impl Lgg {
    pub fn new() -> Self {
        Lgg::default()
    }

    pub fn with_variables(variables: FreshVariables) -> Self {
        Lgg { variables }
    }

    pub fn variables(&self) -> &FreshVariables {
        &self.variables
    }

    /// Compute the LGG of `gamma_a` and `gamma_b`, generalizing distinct
    /// constants to their common ancestor in `taxonomy` when there is one.
    ///
    /// Fails with `ClauseIntegrity` if two comparable literals disagree on
    /// the arity of their predicate.
    pub fn apply(&self, gamma_a: &Clause, gamma_b: &Clause, taxonomy: Option<&Taxonomy>) -> Result<Clause> {
        match taxonomy {
            Some(taxonomy) => self.apply_with(gamma_a, gamma_b, taxonomy),
            None => self.apply_with(gamma_a, gamma_b, &NoTaxonomy),
        }
    }

    /// Same as [`Lgg::apply`] with an arbitrary ancestor oracle
    pub fn apply_with(
        &self,
        gamma_a: &Clause,
        gamma_b: &Clause,
        taxonomy: &dyn CommonAncestor,
    ) -> Result<Clause> {
        let mut reserved = gamma_a.variables();
        reserved.extend(gamma_b.variables());
        let mut substitution = Substitution::new(taxonomy, &self.variables, &reserved);

        let mut result = Clause::empty();
        for lit_a in gamma_a {
            for lit_b in gamma_b {
                if !is_comparable(lit_a, lit_b) {
                    continue;
                }
                if lit_a.atom.arity() != lit_b.atom.arity() {
                    return Err(LggError::ClauseIntegrity {
                        predicate: lit_a.predicate().to_string(),
                        left: lit_a.atom.arity(),
                        right: lit_b.atom.arity(),
                    });
                }
                let args = generalize_terms(&mut substitution, lit_a.args(), lit_b.args());
                result.insert(Literal {
                    atom: Atom::new(lit_a.predicate(), args),
                    polarity: lit_a.polarity,
                });
            }
        }
        Ok(result)
    }
}

/// Literals are comparable when they share polarity and predicate symbol
pub fn is_comparable(a: &Literal, b: &Literal) -> bool {
    a.polarity == b.polarity && a.predicate() == b.predicate()
}

/// Position-wise generalization of two argument lists of equal length
fn generalize_terms(substitution: &mut Substitution<'_>, terms_a: &[Term], terms_b: &[Term]) -> Vec<Term> {
    terms_a
        .iter()
        .zip(terms_b)
        .map(|(term_a, term_b)| generalize_term(substitution, term_a, term_b))
        .collect()
}

fn generalize_term(substitution: &mut Substitution<'_>, term_a: &Term, term_b: &Term) -> Term {
    match (term_a, term_b) {
        (Term::Function(f, args_a), Term::Function(_, args_b)) if term_a.same_shape(term_b) => {
            Term::Function(f.clone(), generalize_terms(substitution, args_a, args_b))
        }
        _ => substitution.resolve(term_a, term_b),
    }
}
