//! Clause reduction: removal of subsumption-redundant literals
//!
//! A literal L of clause C is redundant when C still subsumes C \ {L}. Since
//! C \ {L} trivially subsumes C, the two clauses are then equivalent and L
//! can go.

use crate::config::ReductionStrategy;
use crate::logic::{Clause, SubsumptionOracle};

pub struct Reduction<'a, S: SubsumptionOracle + ?Sized> {
    oracle: &'a S,
    strategy: ReductionStrategy,
}

impl<'a, S: SubsumptionOracle + ?Sized> Reduction<'a, S> {
    pub fn new(oracle: &'a S) -> Self {
        Reduction {
            oracle,
            strategy: ReductionStrategy::default(),
        }
    }

    pub fn with_strategy(oracle: &'a S, strategy: ReductionStrategy) -> Self {
        Reduction { oracle, strategy }
    }

    /// Reduce `gamma`, returning a new clause equivalent to it
    pub fn apply(&self, gamma: &Clause) -> Clause {
        match self.strategy {
            ReductionStrategy::SinglePass => self.single_pass(gamma),
            ReductionStrategy::FixedPoint => {
                let mut current = self.single_pass(gamma);
                loop {
                    let next = self.single_pass(&current);
                    if next.len() == current.len() {
                        return next;
                    }
                    current = next;
                }
            }
        }
    }

    /// Greedy pass over the literals of `gamma` in clause order
    fn single_pass(&self, gamma: &Clause) -> Clause {
        let mut literals = gamma.clone();
        for lit in gamma {
            let candidate = literals.without(lit);
            if self.oracle.subsumes(gamma, &candidate) {
                literals = candidate;
            }
        }
        literals
    }
}
