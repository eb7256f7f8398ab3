//! JSON interchange for learning tasks and hypotheses
//!
//! A task document lists the `isa` facts of the taxonomy and the labeled
//! examples in presentation order:
//!
//! ```json
//! {
//!   "taxonomy": [
//!     {"polarity": true, "atom": {"predicate": "isa", "args": [
//!       {"type": "Constant", "name": "dog"}, {"type": "Constant", "name": "mammal"}]}}
//!   ],
//!   "samples": [
//!     {"positive": true, "clause": {"literals": [
//!       {"polarity": true, "atom": {"predicate": "pet", "args": [{"type": "Constant", "name": "dog"}]}}]}}
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::logic::{Atom, Clause, Literal, Term};
use crate::resolver::{ObservationOutcome, Sample};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON representation of a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Function { name: String, args: Vec<TermJson> },
}

impl From<&Term> for TermJson {
    fn from(term: &Term) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable { name: v.name.clone() },
            Term::Constant(c) => TermJson::Constant { name: c.name.clone() },
            Term::Function(f, args) => TermJson::Function {
                name: f.name.clone(),
                args: args.iter().map(TermJson::from).collect(),
            },
        }
    }
}

impl From<TermJson> for Term {
    fn from(json: TermJson) -> Self {
        match json {
            TermJson::Variable { name } => Term::var(name),
            TermJson::Constant { name } => Term::constant(name),
            TermJson::Function { name, args } => {
                Term::function(name, args.into_iter().map(Term::from).collect())
            }
        }
    }
}

/// JSON representation of an atom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomJson {
    pub predicate: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TermJson>,
}

/// JSON representation of a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralJson {
    pub polarity: bool,
    pub atom: AtomJson,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            polarity: lit.polarity,
            atom: AtomJson {
                predicate: lit.predicate().to_string(),
                args: lit.args().iter().map(TermJson::from).collect(),
            },
        }
    }
}

impl From<LiteralJson> for Literal {
    fn from(json: LiteralJson) -> Self {
        Literal {
            atom: Atom::new(json.atom.predicate, json.atom.args.into_iter().map(Term::from).collect()),
            polarity: json.polarity,
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseJson {
    #[serde(default)]
    pub literals: Vec<LiteralJson>,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            literals: clause.iter().map(LiteralJson::from).collect(),
        }
    }
}

impl From<ClauseJson> for Clause {
    fn from(json: ClauseJson) -> Self {
        json.literals.into_iter().map(Literal::from).collect()
    }
}

/// JSON representation of a labeled example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleJson {
    pub positive: bool,
    pub clause: ClauseJson,
}

impl From<SampleJson> for Sample {
    fn from(json: SampleJson) -> Self {
        Sample {
            clause: json.clause.into(),
            positive: json.positive,
        }
    }
}

/// A learning task: background taxonomy and the example stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskJson {
    #[serde(default)]
    pub taxonomy: Vec<LiteralJson>,
    pub samples: Vec<SampleJson>,
}

impl TaskJson {
    /// Split into taxonomy facts and samples
    pub fn into_parts(self) -> (Vec<Literal>, Vec<Sample>) {
        (
            self.taxonomy.into_iter().map(Literal::from).collect(),
            self.samples.into_iter().map(Sample::from).collect(),
        )
    }
}

/// Parse a task document
pub fn parse_task(input: &str) -> Result<TaskJson> {
    Ok(serde_json::from_str(input)?)
}

/// Read and parse a task document from disk
pub fn load_task(path: impl AsRef<Path>) -> Result<TaskJson> {
    let content = fs::read_to_string(path)?;
    parse_task(&content)
}

/// Result of a learning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypothesisJson {
    /// Final hypothesis, absent when no positive example was seen
    pub hypothesis: Option<ClauseJson>,
    /// Display form of the hypothesis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub samples: usize,
    /// Number of observations that changed the hypothesis
    pub changes: usize,
}

impl HypothesisJson {
    pub fn new(hypothesis: Option<&Clause>, outcomes: &[ObservationOutcome]) -> Self {
        HypothesisJson {
            hypothesis: hypothesis.map(ClauseJson::from),
            text: hypothesis.map(|h| h.to_string()),
            samples: outcomes.len(),
            changes: outcomes.iter().filter(|o| o.changed_hypothesis()).count(),
        }
    }
}
