//! Immutable merge configuration.
//!
//! [`MergeConfig`] bundles the strategy, resolver, list mode, limits, and
//! custom functions that parameterise the engine. It is assembled with
//! consuming builder methods and then only read, so a single config can be
//! shared across threads and calls.

mod custom;
mod policy;

use std::hash::{DefaultHasher, Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

pub use custom::{CustomMergeFn, CustomMergers};
pub use policy::{
    CombinePolicy, ConflictResolver, ListMergeFn, ListMode, NumberCombine, ResolverFn, Strategy,
};

use crate::{Kind, KindSet, MergeOutcome, Value};

/// Default nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(depth) => depth,
    None => NonZeroUsize::MIN,
};

/// Configuration driving a single merge call.
///
/// # Examples
///
/// ```rust
/// use treemerge::{ConflictResolver, ListMode, MergeConfig, Strategy, Value, merge};
///
/// let config = MergeConfig::default()
///     .with_list_mode(ListMode::Union)
///     .with_resolver(ConflictResolver::Left);
/// assert_eq!(config.strategy(), Strategy::Deep);
///
/// let left = Value::mapping([("tags", Value::sequence(["x", "y"]))]);
/// let right = Value::mapping([("tags", Value::sequence(["y", "z"]))]);
/// let merged = merge(&left, &right, &config)?;
/// assert_eq!(merged, Value::mapping([("tags", Value::sequence(["x", "y", "z"]))]));
/// # Ok::<_, treemerge::MergeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MergeConfig {
    strategy: Strategy,
    resolver: ConflictResolver,
    list_mode: ListMode,
    max_depth: NonZeroUsize,
    validate_types: bool,
    supported_kinds: KindSet,
    custom_mergers: CustomMergers,
    combine: CombinePolicy,
    node_budget: Option<NonZeroUsize>,
    time_budget: Option<Duration>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Deep,
            resolver: ConflictResolver::Right,
            list_mode: ListMode::Append,
            max_depth: DEFAULT_MAX_DEPTH,
            validate_types: false,
            supported_kinds: KindSet::all(),
            custom_mergers: CustomMergers::new(),
            combine: CombinePolicy::default(),
            node_budget: None,
            time_budget: None,
        }
    }
}

impl MergeConfig {
    /// Default configuration: deep strategy, right resolver, append lists.
    #[must_use]
    pub fn deep() -> Self {
        Self::default()
    }

    /// Default configuration with [`Strategy::Shallow`].
    #[must_use]
    pub fn shallow() -> Self {
        Self::default().with_strategy(Strategy::Shallow)
    }

    /// Default configuration with [`Strategy::Replace`].
    #[must_use]
    pub fn replace() -> Self {
        Self::default().with_strategy(Strategy::Replace)
    }

    /// Default configuration with [`Strategy::Combine`].
    #[must_use]
    pub fn combine() -> Self {
        Self::default().with_strategy(Strategy::Combine)
    }

    /// [`Strategy::Custom`] using `mergers`.
    #[must_use]
    pub fn custom(mergers: CustomMergers) -> Self {
        Self::default()
            .with_strategy(Strategy::Custom)
            .with_custom_mergers(mergers)
    }

    /// Set the top-level strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the conflict resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ConflictResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Install a closure as the conflict resolver.
    #[must_use]
    pub fn with_resolver_fn<F>(self, resolve: F) -> Self
    where
        F: Fn(&str, &Value, &Value) -> MergeOutcome + Send + Sync + 'static,
    {
        self.with_resolver(ConflictResolver::custom(resolve))
    }

    /// Set the list merge mode.
    #[must_use]
    pub fn with_list_mode(mut self, list_mode: ListMode) -> Self {
        self.list_mode = list_mode;
        self
    }

    /// Set the maximum recursion depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: NonZeroUsize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable input validation.
    #[must_use]
    pub const fn with_validation(mut self, validate_types: bool) -> Self {
        self.validate_types = validate_types;
        self
    }

    /// Restrict the kinds validation accepts anywhere in an input. Implies
    /// nothing unless validation is enabled.
    #[must_use]
    pub const fn with_supported_kinds(mut self, kinds: KindSet) -> Self {
        self.supported_kinds = kinds;
        self
    }

    /// Replace the custom merger registry.
    #[must_use]
    pub fn with_custom_mergers(mut self, mergers: CustomMergers) -> Self {
        self.custom_mergers = mergers;
        self
    }

    /// Register one custom merger for a kind pair.
    #[must_use]
    pub fn with_custom_merger<F>(mut self, left: Kind, right: Kind, merge: F) -> Self
    where
        F: Fn(&Value, &Value) -> MergeOutcome + Send + Sync + 'static,
    {
        self.custom_mergers.insert(left, right, merge);
        self
    }

    /// Set the scalar combination policy.
    #[must_use]
    pub fn with_combine(mut self, combine: CombinePolicy) -> Self {
        self.combine = combine;
        self
    }

    /// Cap the number of merge steps a single call may take.
    #[must_use]
    pub const fn with_node_budget(mut self, budget: Option<NonZeroUsize>) -> Self {
        self.node_budget = budget;
        self
    }

    /// Cap the wall-clock time a single call may take.
    #[must_use]
    pub const fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    /// The configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The configured conflict resolver.
    #[must_use]
    pub const fn resolver(&self) -> &ConflictResolver {
        &self.resolver
    }

    /// The configured list mode.
    #[must_use]
    pub const fn list_mode(&self) -> &ListMode {
        &self.list_mode
    }

    /// The configured depth limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth.get()
    }

    /// Whether inputs are validated before merging.
    #[must_use]
    pub const fn validate_types(&self) -> bool {
        self.validate_types
    }

    /// Kinds accepted by validation.
    #[must_use]
    pub const fn supported_kinds(&self) -> KindSet {
        self.supported_kinds
    }

    /// The custom merger registry.
    #[must_use]
    pub const fn custom_mergers(&self) -> &CustomMergers {
        &self.custom_mergers
    }

    /// The scalar combination policy.
    #[must_use]
    pub const fn combine_policy(&self) -> &CombinePolicy {
        &self.combine
    }

    /// The node budget, if any.
    #[must_use]
    pub const fn node_budget(&self) -> Option<NonZeroUsize> {
        self.node_budget
    }

    /// The time budget, if any.
    #[must_use]
    pub const fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    /// Hash identifying this configuration for caching.
    ///
    /// Custom functions contribute their allocation address, so two configs
    /// share a fingerprint only when they share the same function instances.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.strategy.hash(&mut hasher);
        self.resolver.name().hash(&mut hasher);
        if let ConflictResolver::Custom(resolve) = &self.resolver {
            fn_address(resolve).hash(&mut hasher);
        }
        self.list_mode.name().hash(&mut hasher);
        if let ListMode::Custom(merge) = &self.list_mode {
            fn_address(merge).hash(&mut hasher);
        }
        self.max_depth.hash(&mut hasher);
        self.validate_types.hash(&mut hasher);
        self.supported_kinds.hash(&mut hasher);
        for (pair, merge) in self.custom_mergers.iter() {
            pair.hash(&mut hasher);
            fn_address(merge).hash(&mut hasher);
        }
        self.combine.hash(&mut hasher);
        self.node_budget.hash(&mut hasher);
        self.time_budget.hash(&mut hasher);
        hasher.finish()
    }
}

fn fn_address<T: ?Sized>(function: &Arc<T>) -> usize {
    Arc::as_ptr(function).cast::<()>().addr()
}
