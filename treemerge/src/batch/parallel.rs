//! Chunked parallel folding over scoped threads.

use std::num::NonZeroUsize;
use std::thread;

use crate::{MergeConfig, MergeError, MergeOutcome, MergeResult, Value};

use super::merge_many;

/// Fold `values` in parallel chunks of at most `chunk_size` items.
///
/// Chunks are folded with [`merge_many`] on at most
/// [`std::thread::available_parallelism`] scoped workers, each taking a
/// contiguous run of chunks. The chunk results are then folded in their
/// original order on the calling thread. Inputs with a single chunk are
/// folded inline.
///
/// # Errors
///
/// Returns the failure of the earliest failing chunk, or of the final fold.
/// A worker that cannot be started or that panics is reported as
/// [`MergeError::Custom`].
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use treemerge::{MergeConfig, Value, merge_many, merge_many_parallel};
///
/// let values: Vec<Value> = (0..10)
///     .map(|n| Value::mapping([(format!("k{n}"), n)]))
///     .collect();
/// let config = MergeConfig::default();
/// let chunk = NonZeroUsize::new(3).expect("non-zero");
/// assert_eq!(merge_many_parallel(&values, &config, chunk)?, merge_many(&values, &config)?);
/// # Ok::<_, treemerge::MergeError>(())
/// ```
pub fn merge_many_parallel(
    values: &[Value],
    config: &MergeConfig,
    chunk_size: NonZeroUsize,
) -> MergeOutcome {
    if values.len() <= chunk_size.get() {
        return merge_many(values, config);
    }
    let chunks: Vec<&[Value]> = values.chunks(chunk_size.get()).collect();
    let workers = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(chunks.len());
    let chunks_per_worker = chunks.len().div_ceil(workers);
    let partials = thread::scope(|scope| -> MergeResult<Vec<Value>> {
        let handles = chunks
            .chunks(chunks_per_worker)
            .enumerate()
            .map(|(worker, run)| {
                thread::Builder::new()
                    .name(format!("treemerge-fold-{worker}"))
                    .spawn_scoped(scope, move || {
                        run.iter()
                            .map(|chunk| merge_many(chunk, config))
                            .collect::<MergeResult<Vec<_>>>()
                    })
                    .map_err(|err| MergeError::custom(format!("failed to start merge worker: {err}")))
            })
            .collect::<MergeResult<Vec<_>>>()?;
        let mut partials = Vec::with_capacity(chunks.len());
        for handle in handles {
            let run = handle
                .join()
                .unwrap_or_else(|_| Err(MergeError::custom("merge worker panicked")))?;
            partials.extend(run);
        }
        Ok(partials)
    })?;
    tracing::debug!(chunks = partials.len(), workers, "folding chunk results");
    merge_many(&partials, config)
}
