// ============================================================================
// MIN / MAX
// Smallest or largest own value anywhere in a subtree
// ============================================================================

use super::errors::AggregationResult;
use super::traversal::Walk;
use crate::interfaces::TreeNode;
use rust_decimal::Decimal;

/// Which end of the ordering to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Keep `current` unless `candidate` is strictly better
    #[inline]
    pub fn pick(self, current: Decimal, candidate: Decimal) -> Decimal {
        let better = match self {
            Extremum::Min => candidate < current,
            Extremum::Max => candidate > current,
        };
        if better {
            candidate
        } else {
            current
        }
    }
}

/// MIN or MAX of `param` over the subtree rooted at `node`.
///
/// Comparison is exact decimal ordering, with no tolerance.
pub(crate) fn extremum<N: TreeNode>(
    node: &N,
    which: Extremum,
    walk: &Walk<'_>,
    depth: usize,
) -> AggregationResult<Decimal> {
    let own = walk.own_value(node, depth)?;

    node.children().iter().try_fold(own, |best, child| {
        let child_best = extremum(child, which, walk, depth + 1)?;
        Ok(which.pick(best, child_best))
    })
}
