//! Is-a taxonomy over constants
//!
//! A taxonomy is built from `isa(child, parent)` facts and stored as a
//! child-to-parent map. Every constant has at most one parent and no parent
//! chain revisits a constant, so the map is a forest; both conditions are
//! checked on construction.

use crate::error::{LggError, Result};
use crate::logic::{Constant, Literal, Term};
use std::collections::{HashMap, HashSet};

/// Predicate name of taxonomy facts
pub const ISA: &str = "isa";

/// Answers common-ancestor queries between two constants
pub trait CommonAncestor {
    fn closest_common_ancestor(&self, a: &Constant, b: &Constant) -> Option<Constant>;
}

/// Stand-in used when no taxonomical knowledge is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTaxonomy;

impl CommonAncestor for NoTaxonomy {
    fn closest_common_ancestor(&self, _a: &Constant, _b: &Constant) -> Option<Constant> {
        None
    }
}

/// A forest of constants with a single parent per node
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    parents: HashMap<Constant, Constant>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Taxonomy::default()
    }

    /// Build a taxonomy from `isa(child, parent)` literals.
    ///
    /// Fails with `InvalidTaxonomyFact` for anything that is not a positive
    /// `isa/2` literal over constants, and with `MalformedTaxonomy` when a
    /// constant gets two different parents or a parent chain is cyclic.
    pub fn from_facts<'a>(facts: impl IntoIterator<Item = &'a Literal>) -> Result<Self> {
        let mut taxonomy = Taxonomy::new();
        for fact in facts {
            let (child, parent) = parse_fact(fact)?;
            taxonomy.add_edge(child, parent)?;
        }
        taxonomy.check_acyclic()?;
        Ok(taxonomy)
    }

    fn add_edge(&mut self, child: Constant, parent: Constant) -> Result<()> {
        if child == parent {
            return Err(LggError::MalformedTaxonomy(format!(
                "'{}' is its own parent",
                child
            )));
        }
        match self.parents.get(&child) {
            Some(existing) if *existing != parent => Err(LggError::MalformedTaxonomy(format!(
                "'{}' has two parents, '{}' and '{}'",
                child, existing, parent
            ))),
            Some(_) => Ok(()),
            None => {
                self.parents.insert(child, parent);
                Ok(())
            }
        }
    }

    fn check_acyclic(&self) -> Result<()> {
        // Nodes already known to reach a root
        let mut rooted: HashSet<&Constant> = HashSet::new();
        for start in self.parents.keys() {
            let mut path: HashSet<&Constant> = HashSet::new();
            let mut node = start;
            while !rooted.contains(node) {
                if !path.insert(node) {
                    return Err(LggError::MalformedTaxonomy(format!(
                        "cycle through '{}'",
                        node
                    )));
                }
                match self.parents.get(node) {
                    Some(parent) => node = parent,
                    None => break,
                }
            }
            rooted.extend(path);
        }
        Ok(())
    }

    pub fn parent(&self, constant: &Constant) -> Option<&Constant> {
        self.parents.get(constant)
    }

    /// Number of recorded child-parent edges
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl CommonAncestor for Taxonomy {
    /// Walks upwards one step at a time: while the two constants differ, the
    /// first one is replaced by its parent (and the pair swapped), or, if it
    /// is a root, the second one is replaced by its parent. Returns `None`
    /// once both are roots without having met.
    ///
    /// Every step ascends one edge, which terminates because construction
    /// rejected cyclic input.
    fn closest_common_ancestor(&self, a: &Constant, b: &Constant) -> Option<Constant> {
        let mut a = a;
        let mut b = b;
        loop {
            if a == b {
                return Some(a.clone());
            }
            if let Some(parent) = self.parents.get(a) {
                a = b;
                b = parent;
            } else if let Some(parent) = self.parents.get(b) {
                b = parent;
            } else {
                return None;
            }
        }
    }
}

fn parse_fact(fact: &Literal) -> Result<(Constant, Constant)> {
    if !fact.polarity || fact.predicate() != ISA {
        return Err(LggError::InvalidTaxonomyFact(format!(
            "expected a positive {}/2 literal, found {}",
            ISA, fact
        )));
    }
    match fact.args() {
        [Term::Constant(child), Term::Constant(parent)] => Ok((child.clone(), parent.clone())),
        _ => Err(LggError::InvalidTaxonomyFact(format!(
            "expected two constant arguments, found {}",
            fact
        ))),
    }
}
