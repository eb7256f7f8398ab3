//! Property-based tests for generalization and reduction using proptest.

use super::{Lgg, Reduction};
use crate::logic::{is_variant, subsumes, Clause, Literal, Term, ThetaSubsumption};
use proptest::prelude::*;

/// Term description, turned into a `Term` by `build_term`
#[derive(Debug, Clone)]
enum TermDesc {
    Var(u8),                 // Variable index 0-2
    Const(u8),               // Constant index 0-3
    Func(u8, Vec<TermDesc>), // Function index 0-1, unary f0 or binary f1
}

fn arb_ground_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        (0..4u8).prop_map(TermDesc::Const).boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(TermDesc::Const),
            1 => arb_ground_term_desc(max_depth - 1).prop_map(|t| TermDesc::Func(0, vec![t])),
            1 => (arb_ground_term_desc(max_depth - 1), arb_ground_term_desc(max_depth - 1))
                .prop_map(|(t1, t2)| TermDesc::Func(1, vec![t1, t2])),
        ]
        .boxed()
    }
}

fn arb_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    prop_oneof![
        1 => (0..3u8).prop_map(TermDesc::Var),
        3 => arb_ground_term_desc(max_depth),
    ]
    .boxed()
}

fn build_term(desc: &TermDesc) -> Term {
    match desc {
        TermDesc::Var(i) => Term::var(format!("X{}", i)),
        TermDesc::Const(i) => Term::constant(format!("c{}", i)),
        TermDesc::Func(f, args) => Term::function(format!("f{}", f), args.iter().map(build_term).collect()),
    }
}

/// A literal over `p/1` or `q/2` with random polarity
fn arb_literal(term: fn(u32) -> BoxedStrategy<TermDesc>) -> impl Strategy<Value = Literal> {
    prop_oneof![
        (any::<bool>(), term(2)).prop_map(|(polarity, t)| Literal {
            atom: crate::logic::Atom::new("p", vec![build_term(&t)]),
            polarity,
        }),
        (any::<bool>(), term(1), term(1)).prop_map(|(polarity, t1, t2)| Literal {
            atom: crate::logic::Atom::new("q", vec![build_term(&t1), build_term(&t2)]),
            polarity,
        }),
    ]
}

fn arb_ground_clause() -> impl Strategy<Value = Clause> {
    proptest::collection::vec(arb_literal(arb_ground_term_desc), 0..=3).prop_map(Clause::new)
}

fn arb_clause() -> impl Strategy<Value = Clause> {
    proptest::collection::vec(arb_literal(arb_term_desc), 0..=4).prop_map(Clause::new)
}

// =========================================================================
// LGG properties
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The LGG of a clause with itself is equivalent to the clause
    #[test]
    fn lgg_self_equivalence(gamma in arb_ground_clause()) {
        let result = Lgg::new().apply(&gamma, &gamma, None).unwrap();
        prop_assert!(subsumes(&result, &gamma), "lgg(C, C) must subsume C");
        prop_assert!(subsumes(&gamma, &result), "C must subsume lgg(C, C)");
    }

    /// lgg(A, B) and lgg(B, A) are equal up to a renaming of variables
    #[test]
    fn lgg_commutativity(a in arb_ground_clause(), b in arb_ground_clause()) {
        let lgg = Lgg::new();
        let ab = lgg.apply(&a, &b, None).unwrap();
        let ba = lgg.apply(&b, &a, None).unwrap();
        prop_assert!(is_variant(&ab, &ba), "{} is not a variant of {}", ab, ba);
    }

    /// The generalization subsumes both of its inputs
    #[test]
    fn lgg_subsumes_both_inputs(a in arb_ground_clause(), b in arb_ground_clause()) {
        let result = Lgg::new().apply(&a, &b, None).unwrap();
        prop_assert!(subsumes(&result, &a), "{} does not subsume {}", result, a);
        prop_assert!(subsumes(&result, &b), "{} does not subsume {}", result, b);
    }

    /// Fresh variables of one call never appear in the inputs
    #[test]
    fn lgg_fresh_variables_are_new(a in arb_clause(), b in arb_clause()) {
        let result = Lgg::new().apply(&a, &b, None).unwrap();
        let mut inputs = a.variables();
        inputs.extend(b.variables());
        for var in result.variables() {
            if var.name.starts_with('V') {
                prop_assert!(!inputs.contains(&var));
            } else {
                prop_assert!(inputs.contains(&var));
            }
        }
    }
}

// =========================================================================
// Reduction properties
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Reduction keeps the clause equivalent and never grows it
    #[test]
    fn reduction_soundness(gamma in arb_clause()) {
        let reduced = Reduction::new(&ThetaSubsumption).apply(&gamma);
        prop_assert!(reduced.len() <= gamma.len());
        prop_assert!(reduced.is_subset(&gamma));
        prop_assert!(subsumes(&reduced, &gamma));
        prop_assert!(subsumes(&gamma, &reduced));
    }

    /// Reducing the generalization keeps it a generalization of both inputs
    #[test]
    fn reduced_lgg_subsumes_both_inputs(a in arb_ground_clause(), b in arb_ground_clause()) {
        let result = Lgg::new().apply(&a, &b, None).unwrap();
        let reduced = Reduction::new(&ThetaSubsumption).apply(&result);
        prop_assert!(subsumes(&reduced, &a));
        prop_assert!(subsumes(&reduced, &b));
    }
}
