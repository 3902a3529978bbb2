// ============================================================================
// Traversal Context
// Shared per-call state for the recursive aggregation algorithms
// ============================================================================

use super::errors::{AggregationError, AggregationResult};
use crate::domain::{AggregateFunction, AggregationConfig, ParamId};
use crate::interfaces::TreeNode;
use crate::numeric::validate_and_convert;
use rust_decimal::Decimal;

/// Read-only context threaded through one aggregation call
#[derive(Debug, Clone, Copy)]
pub(crate) struct Walk<'a> {
    pub config: &'a AggregationConfig,
    pub param: ParamId,
}

impl<'a> Walk<'a> {
    pub fn new(config: &'a AggregationConfig, param: ParamId) -> Self {
        Self { config, param }
    }

    /// Validated own value of `node`, which sits `depth` levels below the
    /// queried node.
    pub fn own_value<N: TreeNode>(&self, node: &N, depth: usize) -> AggregationResult<Decimal> {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(AggregationError::DepthLimitExceeded {
                    node: node.name().to_string(),
                    limit,
                });
            }
        }

        let raw = node.get_parameter(self.param)?;
        let value = validate_and_convert(raw).map_err(|source| {
            AggregationError::InvalidNumericValue {
                node: node.name().to_string(),
                param: self.param,
                source,
            }
        })?;

        tracing::trace!("visit {} depth={} {}={}", node.name(), depth, self.param, value);
        Ok(value)
    }

    pub fn overflow<N: TreeNode>(&self, node: &N, function: AggregateFunction) -> AggregationError {
        AggregationError::Overflow {
            node: node.name().to_string(),
            param: self.param,
            function,
        }
    }
}
