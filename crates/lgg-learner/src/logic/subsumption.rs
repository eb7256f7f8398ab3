//! Theta-subsumption between clauses
//!
//! A clause C subsumes clause D if there exists a substitution σ such that
//! Cσ ⊆ D. Several literals of C may map onto the same literal of D, so a
//! longer clause can subsume a shorter one (`p(X) ∨ p(Y)` subsumes `p(a)`).
//!
//! The generalization engine only consumes subsumption through the
//! [`SubsumptionOracle`] trait; [`ThetaSubsumption`] is the oracle used by
//! default.

use crate::logic::{Clause, Literal, Term, Variable};
use std::collections::HashMap;

/// Decides whether one clause theta-subsumes another
pub trait SubsumptionOracle {
    /// True if `general` theta-subsumes `specific`
    fn subsumes(&self, general: &Clause, specific: &Clause) -> bool;
}

impl<F> SubsumptionOracle for F
where
    F: Fn(&Clause, &Clause) -> bool,
{
    fn subsumes(&self, general: &Clause, specific: &Clause) -> bool {
        self(general, specific)
    }
}

/// Complete theta-subsumption by backtracking search over literal matches
#[derive(Debug, Clone, Copy, Default)]
pub struct ThetaSubsumption;

impl SubsumptionOracle for ThetaSubsumption {
    fn subsumes(&self, general: &Clause, specific: &Clause) -> bool {
        subsumes(general, specific)
    }
}

/// Full subsumption check using trail-based backtracking
pub fn subsumes(general: &Clause, specific: &Clause) -> bool {
    let specific: Vec<&Literal> = specific.iter().collect();

    // Most constrained literals first; a literal without candidates fails fast
    let mut ranked: Vec<(usize, &Literal)> = general
        .iter()
        .map(|g| (specific.iter().filter(|s| compatible(g, s)).count(), g))
        .collect();
    if ranked.iter().any(|(candidates, _)| *candidates == 0) {
        return false;
    }
    ranked.sort_by_key(|(candidates, _)| *candidates);
    let general: Vec<&Literal> = ranked.into_iter().map(|(_, g)| g).collect();

    let mut bindings = Bindings::with_capacity(general.len());
    find_mapping(&general, &specific, 0, &mut bindings)
}

/// Check whether two clauses are equal up to a renaming of variables.
///
/// Literals are paired one-to-one and the variable mapping must be a
/// bijection, so `p(X,Y) ∨ p(Z,Z)` is not a variant of `p(Z,Z) ∨ p(X,Z)`
/// even though the two subsume each other.
pub fn is_variant(first: &Clause, second: &Clause) -> bool {
    if first.len() != second.len() {
        return false;
    }
    let first: Vec<&Literal> = first.iter().collect();
    let second: Vec<&Literal> = second.iter().collect();
    let mut used = vec![false; second.len()];
    let mut renaming = Renaming::default();
    find_renaming(&first, &second, 0, &mut used, &mut renaming)
}

/// Variable bindings of the general clause, with a trail for backtracking
#[derive(Debug, Default)]
struct Bindings<'a> {
    map: HashMap<&'a Variable, &'a Term>,
    trail: Vec<&'a Variable>,
}

impl<'a> Bindings<'a> {
    fn with_capacity(var_count: usize) -> Self {
        Bindings {
            map: HashMap::with_capacity(var_count),
            trail: Vec::with_capacity(var_count * 2),
        }
    }

    #[inline]
    fn bind(&mut self, var: &'a Variable, term: &'a Term) {
        self.trail.push(var);
        self.map.insert(var, term);
    }

    /// Save current position for later backtrack
    #[inline]
    fn mark(&self) -> usize {
        self.trail.len()
    }

    /// Undo bindings back to saved position
    #[inline]
    fn backtrack(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some(var) = self.trail.pop() {
                self.map.remove(var);
            }
        }
    }
}

fn compatible(general: &Literal, specific: &Literal) -> bool {
    general.polarity == specific.polarity
        && general.predicate() == specific.predicate()
        && general.atom.arity() == specific.atom.arity()
}

/// One-way match of `pattern` onto `term`; only pattern variables are bound.
/// Variables of `term` behave like constants.
fn match_terms<'a>(pattern: &'a Term, term: &'a Term, bindings: &mut Bindings<'a>) -> bool {
    match pattern {
        Term::Variable(v) => match bindings.map.get(v) {
            Some(bound) => *bound == term,
            None => {
                bindings.bind(v, term);
                true
            }
        },
        Term::Constant(c1) => matches!(term, Term::Constant(c2) if c1 == c2),
        Term::Function(f1, args1) => match term {
            Term::Function(f2, args2) => {
                f1 == f2
                    && args1.len() == args2.len()
                    && args1
                        .iter()
                        .zip(args2)
                        .all(|(a1, a2)| match_terms(a1, a2, bindings))
            }
            _ => false,
        },
    }
}

fn match_literals<'a>(general: &'a Literal, specific: &'a Literal, bindings: &mut Bindings<'a>) -> bool {
    compatible(general, specific)
        && general
            .args()
            .iter()
            .zip(specific.args())
            .all(|(t1, t2)| match_terms(t1, t2, bindings))
}

fn find_mapping<'a>(
    general: &[&'a Literal],
    specific: &[&'a Literal],
    idx: usize,
    bindings: &mut Bindings<'a>,
) -> bool {
    let Some(&lit) = general.get(idx) else {
        return true; // All literals matched
    };

    for &candidate in specific {
        let mark = bindings.mark();
        if match_literals(lit, candidate, bindings)
            && find_mapping(general, specific, idx + 1, bindings)
        {
            return true;
        }
        bindings.backtrack(mark);
    }

    false
}

/// Variable bijection between two clauses, with a trail for backtracking
#[derive(Debug, Default)]
struct Renaming<'a> {
    forward: HashMap<&'a Variable, &'a Variable>,
    backward: HashMap<&'a Variable, &'a Variable>,
    trail: Vec<(&'a Variable, &'a Variable)>,
}

impl<'a> Renaming<'a> {
    fn bind(&mut self, from: &'a Variable, to: &'a Variable) {
        self.trail.push((from, to));
        self.forward.insert(from, to);
        self.backward.insert(to, from);
    }

    #[inline]
    fn mark(&self) -> usize {
        self.trail.len()
    }

    fn backtrack(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some((from, to)) = self.trail.pop() {
                self.forward.remove(from);
                self.backward.remove(to);
            }
        }
    }
}

fn rename_terms<'a>(first: &'a Term, second: &'a Term, renaming: &mut Renaming<'a>) -> bool {
    match (first, second) {
        (Term::Variable(v1), Term::Variable(v2)) => {
            match (renaming.forward.get(v1), renaming.backward.get(v2)) {
                (Some(mapped), _) => *mapped == v2,
                (None, Some(_)) => false,
                (None, None) => {
                    renaming.bind(v1, v2);
                    true
                }
            }
        }
        (Term::Constant(c1), Term::Constant(c2)) => c1 == c2,
        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            f1 == f2
                && args1.len() == args2.len()
                && args1
                    .iter()
                    .zip(args2)
                    .all(|(a1, a2)| rename_terms(a1, a2, renaming))
        }
        _ => false,
    }
}

fn find_renaming<'a>(
    first: &[&'a Literal],
    second: &[&'a Literal],
    idx: usize,
    used: &mut [bool],
    renaming: &mut Renaming<'a>,
) -> bool {
    let Some(&lit) = first.get(idx) else {
        return true;
    };

    for (j, &candidate) in second.iter().enumerate() {
        if used[j] || !compatible(lit, candidate) {
            continue;
        }
        let mark = renaming.mark();
        if lit
            .args()
            .iter()
            .zip(candidate.args())
            .all(|(t1, t2)| rename_terms(t1, t2, renaming))
        {
            used[j] = true;
            if find_renaming(first, second, idx + 1, used, renaming) {
                return true;
            }
            used[j] = false;
        }
        renaming.backtrack(mark);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Term {
        Term::var("X")
    }

    fn y() -> Term {
        Term::var("Y")
    }

    fn a() -> Term {
        Term::constant("a")
    }

    fn b() -> Term {
        Term::constant("b")
    }

    #[test]
    fn test_variable_subsumes_constant() {
        let general = Clause::new(vec![Literal::pos("p", vec![x()])]);
        let specific = Clause::new(vec![Literal::pos("p", vec![a()])]);
        assert!(subsumes(&general, &specific));
        assert!(!subsumes(&specific, &general));
    }

    #[test]
    fn test_polarity_must_match() {
        let general = Clause::new(vec![Literal::pos("p", vec![x()])]);
        let specific = Clause::new(vec![Literal::neg("p", vec![a()])]);
        assert!(!subsumes(&general, &specific));
    }

    #[test]
    fn test_consistent_bindings_required() {
        // p(X,X) does not subsume p(a,b)
        let general = Clause::new(vec![Literal::pos("p", vec![x(), x()])]);
        let specific = Clause::new(vec![Literal::pos("p", vec![a(), b()])]);
        assert!(!subsumes(&general, &specific));

        let same = Clause::new(vec![Literal::pos("p", vec![a(), a()])]);
        assert!(subsumes(&general, &same));
    }

    #[test]
    fn test_longer_clause_subsumes_shorter() {
        let general = Clause::new(vec![Literal::pos("p", vec![x()]), Literal::pos("p", vec![y()])]);
        let specific = Clause::new(vec![Literal::pos("p", vec![a()])]);
        assert!(subsumes(&general, &specific));
    }

    #[test]
    fn test_backtracking_finds_mapping() {
        // p(X,Y) ∨ q(Y) subsumes p(a,a) ∨ p(a,b) ∨ q(b); the first p-match must be undone
        let general = Clause::new(vec![
            Literal::pos("p", vec![x(), y()]),
            Literal::pos("q", vec![y()]),
        ]);
        let specific = Clause::new(vec![
            Literal::pos("p", vec![a(), a()]),
            Literal::pos("p", vec![a(), b()]),
            Literal::pos("q", vec![b()]),
        ]);
        assert!(subsumes(&general, &specific));
    }

    #[test]
    fn test_specific_variables_are_rigid() {
        let general = Clause::new(vec![Literal::pos("p", vec![a()])]);
        let specific = Clause::new(vec![Literal::pos("p", vec![x()])]);
        assert!(!subsumes(&general, &specific));
    }

    #[test]
    fn test_function_terms() {
        let general = Clause::new(vec![Literal::pos("p", vec![Term::function("f", vec![x()])])]);
        let specific = Clause::new(vec![Literal::pos(
            "p",
            vec![Term::function("f", vec![Term::function("g", vec![a()])])],
        )]);
        assert!(subsumes(&general, &specific));

        let other = Clause::new(vec![Literal::pos("p", vec![Term::function("h", vec![a()])])]);
        assert!(!subsumes(&general, &other));
    }

    #[test]
    fn test_empty_clause() {
        let clause = Clause::new(vec![Literal::pos("p", vec![a()])]);
        assert!(subsumes(&Clause::empty(), &clause));
        assert!(subsumes(&Clause::empty(), &Clause::empty()));
        assert!(!subsumes(&clause, &Clause::empty()));
    }

    #[test]
    fn test_is_variant() {
        let c1 = Clause::new(vec![Literal::pos("p", vec![x(), y()])]);
        let c2 = Clause::new(vec![Literal::pos("p", vec![Term::var("U"), Term::var("W")])]);
        let c3 = Clause::new(vec![Literal::pos("p", vec![x(), x()])]);
        assert!(is_variant(&c1, &c2));
        assert!(!is_variant(&c1, &c3));
        assert!(!is_variant(&c3, &c1));
    }

    #[test]
    fn test_mutual_subsumption_is_not_renaming() {
        // Equivalent under subsumption and equal in size, but three variables
        // cannot be renamed onto two
        let z = || Term::var("Z");
        let c1 = Clause::new(vec![
            Literal::pos("p", vec![x(), y()]),
            Literal::pos("p", vec![z(), z()]),
        ]);
        let c2 = Clause::new(vec![
            Literal::pos("p", vec![z(), z()]),
            Literal::pos("p", vec![x(), z()]),
        ]);
        assert!(subsumes(&c1, &c2) && subsumes(&c2, &c1));
        assert!(!is_variant(&c1, &c2));
        assert!(!is_variant(&c2, &c1));
    }

    #[test]
    fn test_variant_pairs_literals_in_any_order() {
        let c1 = Clause::new(vec![
            Literal::neg("parent", vec![x(), y()]),
            Literal::pos("daughter", vec![y()]),
            Literal::neg("female", vec![x()]),
        ]);
        let c2 = Clause::new(vec![
            Literal::neg("female", vec![Term::var("V1")]),
            Literal::neg("parent", vec![Term::var("V1"), Term::var("V2")]),
            Literal::pos("daughter", vec![Term::var("V2")]),
        ]);
        assert!(is_variant(&c1, &c2));

        // Constants must agree exactly
        let c3 = Clause::new(vec![Literal::pos("p", vec![x(), a()])]);
        let c4 = Clause::new(vec![Literal::pos("p", vec![y(), b()])]);
        assert!(!is_variant(&c3, &c4));
        assert!(is_variant(&Clause::empty(), &Clause::empty()));
    }

    #[test]
    fn test_closure_oracle() {
        let never = |_: &Clause, _: &Clause| false;
        let clause = Clause::new(vec![Literal::pos("p", vec![a()])]);
        assert!(!never.subsumes(&clause, &clause));
        assert!(ThetaSubsumption.subsumes(&clause, &clause));
    }
}
