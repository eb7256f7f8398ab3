//! Incremental hypothesis learner
//!
//! The resolver starts without a hypothesis. The first positive example is
//! adopted verbatim; every later positive example that the hypothesis does not
//! already subsume (i.e. does not predict as positive) is folded in with the
//! LGG operator, optionally followed by reduction. Negative examples never
//! change the hypothesis: the example stream is assumed noise-free, so the
//! hypothesis, being the least general clause covering the positives, stays
//! consistent with them. A stream that starts with negatives simply leaves
//! the hypothesis empty until the first positive arrives.

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::generalization::{FreshVariables, Lgg, Reduction};
use crate::logic::{Clause, Literal, SubsumptionOracle, Taxonomy, ThetaSubsumption};
use tracing::{debug, info};

/// A labeled example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub clause: Clause,
    pub positive: bool,
}

impl Sample {
    pub fn positive(clause: Clause) -> Self {
        Sample {
            clause,
            positive: true,
        }
    }

    pub fn negative(clause: Clause) -> Self {
        Sample {
            clause,
            positive: false,
        }
    }
}

/// What an observation did to the hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationOutcome {
    /// Negative example, hypothesis untouched
    IgnoredNegative,
    /// First positive example, adopted as the hypothesis
    Adopted,
    /// Positive example already subsumed by the hypothesis
    Covered,
    /// Hypothesis replaced by its generalization with the example;
    /// `reduced` is set when reduction removed at least one literal
    Generalized { reduced: bool },
}

impl ObservationOutcome {
    pub fn changed_hypothesis(&self) -> bool {
        matches!(
            self,
            ObservationOutcome::Adopted | ObservationOutcome::Generalized { .. }
        )
    }
}

pub struct Resolver<O: SubsumptionOracle = ThetaSubsumption> {
    taxonomy: Option<Taxonomy>,
    oracle: O,
    lgg: Lgg,
    config: ResolverConfig,
    hypothesis: Option<Clause>,
}

impl Resolver<ThetaSubsumption> {
    /// Resolver without taxonomical knowledge
    pub fn new() -> Self {
        Resolver::with_oracle(ThetaSubsumption)
    }

    pub fn with_taxonomy(taxonomy: Taxonomy) -> Self {
        let mut resolver = Resolver::new();
        resolver.taxonomy = Some(taxonomy);
        resolver
    }

    /// Resolver whose taxonomy is built from `isa(child, parent)` facts
    pub fn from_taxonomy_facts<'a>(facts: impl IntoIterator<Item = &'a Literal>) -> Result<Self> {
        Ok(Resolver::with_taxonomy(Taxonomy::from_facts(facts)?))
    }
}

impl Default for Resolver<ThetaSubsumption> {
    fn default() -> Self {
        Resolver::new()
    }
}

impl<O: SubsumptionOracle> Resolver<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Resolver {
            taxonomy: None,
            oracle,
            lgg: Lgg::new(),
            config: ResolverConfig::default(),
            hypothesis: None,
        }
    }

    /// Replace the configuration. The fresh-variable generator is rebuilt
    /// from `variable_prefix`, so this belongs before the first observation.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.lgg = Lgg::with_variables(FreshVariables::with_prefix(config.variable_prefix.clone()));
        self.config = config;
        self
    }

    pub fn set_taxonomy(&mut self, taxonomy: Option<Taxonomy>) {
        self.taxonomy = taxonomy;
    }

    pub fn taxonomy(&self) -> Option<&Taxonomy> {
        self.taxonomy.as_ref()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Current hypothesis, `None` until the first positive example
    pub fn hypothesis(&self) -> Option<&Clause> {
        self.hypothesis.as_ref()
    }

    pub fn into_hypothesis(self) -> Option<Clause> {
        self.hypothesis
    }

    /// Predicted label of `clause`: positive iff the hypothesis subsumes it
    pub fn predict(&self, clause: &Clause) -> bool {
        self.hypothesis
            .as_ref()
            .map_or(false, |hypothesis| self.oracle.subsumes(hypothesis, clause))
    }

    /// Feed one labeled example.
    ///
    /// On error (arity clash between hypothesis and example) the hypothesis
    /// is left as it was.
    pub fn see_observation(&mut self, clause: Clause, positive: bool, reduce: bool) -> Result<ObservationOutcome> {
        if !positive {
            debug!(clause = %clause, "negative sample, ignored");
            return Ok(ObservationOutcome::IgnoredNegative);
        }

        let Some(hypothesis) = self.hypothesis.as_ref() else {
            info!(hypothesis = %clause, "hypothesis adopted");
            self.hypothesis = Some(clause);
            return Ok(ObservationOutcome::Adopted);
        };

        if self.oracle.subsumes(hypothesis, &clause) {
            debug!(clause = %clause, "sample is theta-subsumed by hypothesis");
            return Ok(ObservationOutcome::Covered);
        }

        let generalized = self.lgg.apply(hypothesis, &clause, self.taxonomy.as_ref())?;
        info!(hypothesis = %generalized, "hypothesis generalized");

        let mut reduced = false;
        let generalized = if reduce {
            let reduction = Reduction::with_strategy(&self.oracle, self.config.reduction);
            let reductee = reduction.apply(&generalized);
            if reductee != generalized {
                info!(
                    hypothesis = %reductee,
                    removed = generalized.len() - reductee.len(),
                    "hypothesis reduced"
                );
                reduced = true;
                reductee
            } else {
                debug!("no reduction possible");
                generalized
            }
        } else {
            generalized
        };

        self.hypothesis = Some(generalized);
        Ok(ObservationOutcome::Generalized { reduced })
    }

    /// `see_observation` with the configured reduction flag
    pub fn observe(&mut self, sample: Sample) -> Result<ObservationOutcome> {
        let reduce = self.config.reduce;
        self.see_observation(sample.clause, sample.positive, reduce)
    }

    /// Feed a sequence of samples in order, stopping at the first error
    pub fn train(&mut self, samples: impl IntoIterator<Item = Sample>) -> Result<Vec<ObservationOutcome>> {
        samples.into_iter().map(|sample| self.observe(sample)).collect()
    }
}
