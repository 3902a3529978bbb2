// ============================================================================
// SUM
// Node's own value plus the sum of every child's subtree
// ============================================================================

use super::errors::AggregationResult;
use super::traversal::Walk;
use crate::domain::AggregateFunction;
use crate::interfaces::TreeNode;
use rust_decimal::Decimal;

/// Sum of `param` over the subtree rooted at `node`.
///
/// Children are added in their defined order. Each child contributes its
/// own subtree sum, so every node's value is counted exactly once.
pub(crate) fn sum<N: TreeNode>(node: &N, walk: &Walk<'_>, depth: usize) -> AggregationResult<Decimal> {
    let own = walk.own_value(node, depth)?;

    node.children().iter().try_fold(own, |total, child| {
        let child_sum = sum(child, walk, depth + 1)?;
        add(node, walk, total, child_sum)
    })
}

/// Checked addition, reporting overflow at `node`
pub(crate) fn add<N: TreeNode>(
    node: &N,
    walk: &Walk<'_>,
    total: Decimal,
    value: Decimal,
) -> AggregationResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| walk.overflow(node, AggregateFunction::Sum))
}
