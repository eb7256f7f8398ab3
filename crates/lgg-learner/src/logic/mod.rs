//! First-order logic representation
//!
//! This module provides the fundamental types for representing clauses
//! (terms, atoms, literals, clauses), the is-a taxonomy over constants, and
//! the theta-subsumption oracle consumed by the learner.

pub mod core;
pub mod subsumption;
pub mod taxonomy;

// Re-export commonly used types
pub use self::core::clause::Clause;
pub use self::core::literal::{Atom, Literal};
pub use self::core::term::{Constant, FunctionSymbol, Term, Variable};
pub use subsumption::{is_variant, subsumes, SubsumptionOracle, ThetaSubsumption};
pub use taxonomy::{CommonAncestor, NoTaxonomy, Taxonomy, ISA};
