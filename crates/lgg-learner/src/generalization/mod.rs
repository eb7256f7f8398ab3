//! Clause generalization
//!
//! The LGG operator with its term-pair substitution, and reduction of the
//! resulting clauses.

pub mod lgg;
pub mod reduction;
pub mod substitution;

#[cfg(test)]
mod proptest_tests;

pub use lgg::{is_comparable, Lgg};
pub use reduction::Reduction;
pub use substitution::{FreshVariables, Substitution};
