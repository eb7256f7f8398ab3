//! lgg-learner: incremental clause generalization for first-order logic
//!
//! This library learns a single clause hypothesis from a stream of labeled
//! example clauses using Plotkin's least general generalization, optionally
//! guided by an is-a taxonomy over constants and followed by reduction of
//! subsumption-redundant literals.

pub mod config;
pub mod error;
pub mod generalization;
pub mod json;
pub mod logic;
pub mod resolver;

// Re-export commonly used types from logic
pub use logic::{
    is_variant, subsumes, Atom, Clause, CommonAncestor, Constant, FunctionSymbol, Literal,
    NoTaxonomy, SubsumptionOracle, Taxonomy, Term, ThetaSubsumption, Variable, ISA,
};

// Re-export generalization types
pub use generalization::{is_comparable, FreshVariables, Lgg, Reduction, Substitution};

pub use config::{ReductionStrategy, ResolverConfig};
pub use error::{LggError, Result};
pub use json::{load_task, parse_task, HypothesisJson, TaskJson};
pub use resolver::{ObservationOutcome, Resolver, Sample};
