//! Bounded memoisation of merge results.

use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use parking_lot::Mutex;

use crate::{MergeConfig, MergeOutcome, Value, merge};

type CacheKey = (u64, u64, u64);

struct CacheEntry {
    left: Value,
    right: Value,
    config: u64,
    merged: Value,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

/// Hit and miss counters of a [`MergeCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to merge.
    pub misses: u64,
    /// Entries currently held.
    pub len: usize,
}

/// Bounded, first-in-first-out cache of successful merges.
///
/// Entries are keyed by the fingerprints of both inputs and of the
/// configuration. The inputs themselves are kept and compared on lookup, so a
/// fingerprint collision degrades to a miss rather than a wrong answer.
/// Failures are never cached.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use treemerge::{MergeCache, MergeConfig, Value};
///
/// let cache = MergeCache::new(NonZeroUsize::new(16).expect("non-zero"));
/// let config = MergeConfig::default();
/// let left = Value::mapping([("a", 1)]);
/// let right = Value::mapping([("b", 2)]);
/// let first = cache.merge(&left, &right, &config)?;
/// let second = cache.merge(&left, &right, &config)?;
/// assert_eq!(first, second);
/// assert_eq!(cache.stats().hits, 1);
/// # Ok::<_, treemerge::MergeError>(())
/// ```
pub struct MergeCache {
    capacity: NonZeroUsize,
    state: Mutex<CacheState>,
}

impl MergeCache {
    /// Create a cache holding at most `capacity` results.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Merge through the cache.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::MergeError`] from [`merge`].
    pub fn merge(&self, left: &Value, right: &Value, config: &MergeConfig) -> MergeOutcome {
        let config_fingerprint = config.fingerprint();
        let key = (left.fingerprint(), right.fingerprint(), config_fingerprint);
        if let Some(merged) = self.lookup(key, left, right, config_fingerprint) {
            return Ok(merged);
        }
        let merged = merge(left, right, config)?;
        self.store(key, CacheEntry {
            left: left.clone(),
            right: right.clone(),
            config: config_fingerprint,
            merged: merged.clone(),
        });
        Ok(merged)
    }

    fn lookup(&self, key: CacheKey, left: &Value, right: &Value, config: u64) -> Option<Value> {
        let mut state = self.state.lock();
        let hit = state
            .entries
            .get(&key)
            .filter(|entry| entry.config == config && entry.left == *left && entry.right == *right)
            .map(|entry| entry.merged.clone());
        if hit.is_some() {
            state.hits += 1;
        } else {
            state.misses += 1;
        }
        hit
    }

    fn store(&self, key: CacheKey, entry: CacheEntry) {
        let mut state = self.state.lock();
        if state.entries.insert(key, entry).is_none() {
            state.order.push_back(key);
        }
        while state.order.len() > self.capacity.get() {
            if let Some(evicted) = state.order.pop_front() {
                state.entries.remove(&evicted);
                tracing::trace!(capacity = self.capacity.get(), "evicted cached merge");
            }
        }
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            len: state.entries.len(),
        }
    }

    /// Drop every cached entry and reset the counters.
    pub fn clear(&self) {
        *self.state.lock() = CacheState::default();
    }
}

/// A [`MergeConfig`] paired with its own [`MergeCache`].
pub struct CachedMerger {
    config: MergeConfig,
    cache: MergeCache,
}

impl CachedMerger {
    /// Create a merger caching at most `capacity` results for `config`.
    #[must_use]
    pub fn new(config: MergeConfig, capacity: NonZeroUsize) -> Self {
        Self {
            config,
            cache: MergeCache::new(capacity),
        }
    }

    /// Merge `right` over `left` with the wrapped config.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::MergeError`] from [`merge`].
    pub fn merge(&self, left: &Value, right: &Value) -> MergeOutcome {
        self.cache.merge(left, right, &self.config)
    }

    /// The wrapped configuration.
    #[must_use]
    pub const fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Counters of the underlying cache.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConflictResolver, MergeError};
    use rstest::rstest;

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero capacity")
    }

    #[rstest]
    fn repeated_merges_hit() {
        let merger = CachedMerger::new(MergeConfig::default(), capacity(4));
        let left = Value::mapping([("a", 1)]);
        let right = Value::mapping([("a", 2)]);
        for _ in 0..3 {
            assert_eq!(merger.merge(&left, &right), Ok(right.clone()));
        }
        assert_eq!(
            merger.stats(),
            CacheStats {
                hits: 2,
                misses: 1,
                len: 1
            }
        );
    }

    #[rstest]
    fn configs_do_not_share_entries() {
        let cache = MergeCache::new(capacity(4));
        let left = Value::mapping([("a", 1)]);
        let right = Value::mapping([("a", 2)]);
        let prefer_right = cache.merge(&left, &right, &MergeConfig::default());
        let prefer_left = cache.merge(
            &left,
            &right,
            &MergeConfig::default().with_resolver(ConflictResolver::Left),
        );
        assert_eq!(prefer_right, Ok(right));
        assert_eq!(prefer_left, Ok(left));
        assert_eq!(cache.stats().hits, 0);
    }

    #[rstest]
    fn oldest_entries_are_evicted_first() {
        let cache = MergeCache::new(capacity(2));
        let config = MergeConfig::default();
        let base = Value::empty_mapping();
        for n in 0..3 {
            cache
                .merge(&base, &Value::mapping([("n", n)]), &config)
                .expect("merge succeeds");
        }
        assert_eq!(cache.stats().len, 2);
        cache
            .merge(&base, &Value::mapping([("n", 0)]), &config)
            .expect("merge succeeds");
        assert_eq!(cache.stats().hits, 0);
        cache
            .merge(&base, &Value::mapping([("n", 2)]), &config)
            .expect("merge succeeds");
        assert_eq!(cache.stats().hits, 1);
    }

    #[rstest]
    fn failures_are_not_cached() {
        let cache = MergeCache::new(capacity(2));
        let config = MergeConfig::default().with_resolver(ConflictResolver::Error);
        let left = Value::mapping([("a", 1)]);
        let right = Value::mapping([("a", 2)]);
        for _ in 0..2 {
            assert!(matches!(
                cache.merge(&left, &right, &config),
                Err(MergeError::Conflict { .. })
            ));
        }
        assert_eq!(cache.stats().len, 0);
        cache.clear();
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
