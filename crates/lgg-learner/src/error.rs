//! Error types for lgg-learner

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LggError {
    /// The `isa/2` facts do not describe a forest
    #[error("Malformed taxonomy: {0}")]
    MalformedTaxonomy(String),

    #[error("Invalid taxonomy fact: {0}")]
    InvalidTaxonomyFact(String),

    /// Two comparable literals share a predicate but not its arity
    #[error("Clause integrity error: predicate '{predicate}' used with arity {left} and {right}")]
    ClauseIntegrity {
        predicate: String,
        left: usize,
        right: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LggError>;
