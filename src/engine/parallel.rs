// ============================================================================
// Scoped Fan-Out
// Evaluates direct children's subtrees on a bounded set of scoped threads
// ============================================================================

use super::errors::AggregationResult;
use crate::interfaces::TreeNode;
use rust_decimal::Decimal;
use std::panic;

/// Run `eval` over every child concurrently and return the results in child
/// order.
///
/// Children are split into contiguous chunks, one scoped thread per chunk,
/// with no more threads than the machine's available parallelism. All threads
/// are joined before returning. When several children fail, the error of the
/// earliest child in order is returned, matching sequential evaluation.
pub(crate) fn fan_out<N, F>(children: &[N], eval: F) -> AggregationResult<Vec<Decimal>>
where
    N: TreeNode + Sync,
    F: Fn(&N) -> AggregationResult<Decimal> + Sync,
{
    let workers = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);

    fan_out_with(children, workers, eval)
}

/// [`fan_out`] with an explicit worker cap
pub(crate) fn fan_out_with<N, F>(children: &[N], workers: usize, eval: F) -> AggregationResult<Vec<Decimal>>
where
    N: TreeNode + Sync,
    F: Fn(&N) -> AggregationResult<Decimal> + Sync,
{
    if children.is_empty() {
        return Ok(Vec::new());
    }

    let eval = &eval;
    let chunk_size = children.len().div_ceil(workers.clamp(1, children.len()));

    let joined = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = children
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move |_| chunk.iter().map(eval).collect::<AggregationResult<Vec<_>>>())
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|payload| panic::resume_unwind(payload));

    // Chunks are in child order, so the first Err is the earliest failing child
    let chunks = joined.into_iter().collect::<AggregationResult<Vec<_>>>()?;
    Ok(chunks.into_iter().flatten().collect())
}
