// ============================================================================
// Tree Node Interface
// Read-only view of a tree that the aggregation engine walks
// ============================================================================

use crate::domain::ParamId;
use crate::engine::{AggregationError, AggregationResult};
use crate::numeric::Number;

/// Read-only contract between a tree representation and the aggregator.
///
/// The engine only ever reads through this trait, so any owned tree can be
/// aggregated without carrying algorithmic code itself. Implementations must
/// be finite and acyclic: every node exclusively owns its children.
pub trait TreeNode: Sized {
    /// Identifies the node in errors and logs
    fn name(&self) -> &str;

    /// The node's own value for `param`, if it has one
    fn parameter(&self, param: ParamId) -> Option<Number>;

    /// Direct children, in their defined order
    fn children(&self) -> &[Self];

    /// Number of direct children
    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Like [`parameter`](Self::parameter), failing with `MissingParameter`
    fn get_parameter(&self, param: ParamId) -> AggregationResult<Number> {
        self.parameter(param)
            .ok_or_else(|| AggregationError::MissingParameter {
                node: self.name().to_string(),
                param,
            })
    }
}
