//! Learner configuration types.

/// Configuration for the hypothesis resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Reduce the hypothesis after every generalization step (used by
    /// `Resolver::observe`; `see_observation` takes the flag explicitly)
    pub reduce: bool,
    pub reduction: ReductionStrategy,
    /// Prefix of the fresh variables minted during generalization
    pub variable_prefix: String,
}

/// How redundant literals are searched for during reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReductionStrategy {
    /// One greedy pass over the literals in clause order
    #[default]
    SinglePass,
    /// Repeat passes until a pass removes nothing
    FixedPoint,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            reduce: false,
            reduction: ReductionStrategy::SinglePass,
            variable_prefix: "V".to_string(),
        }
    }
}
