// ============================================================================
// Aggregation Errors
// Failures that abort a whole aggregation call
// ============================================================================

use crate::domain::{AggregateFunction, ParamId};
use crate::numeric::NumericError;
use thiserror::Error;

/// Errors returned by [`aggregate`](crate::engine::aggregate) and the
/// [`Aggregator`](crate::engine::Aggregator).
///
/// Every variant names the node it was raised at so callers can surface it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// A node's value failed decimal validation
    #[error("node `{node}`: {param} is not usable: {source}")]
    InvalidNumericValue {
        node: String,
        param: ParamId,
        source: NumericError,
    },

    /// A node has no value for the queried parameter
    #[error("node `{node}` has no value for {param}")]
    MissingParameter { node: String, param: ParamId },

    /// AVERAGE over a node without direct children
    #[error("cannot average {param} at node `{node}`: it has no direct children")]
    DivisionByZero { node: String, param: ParamId },

    /// An intermediate result left the decimal range
    #[error("{function} of {param} overflowed at node `{node}`")]
    Overflow {
        node: String,
        param: ParamId,
        function: AggregateFunction,
    },

    /// Traversal went past the configured maximum depth
    #[error("node `{node}` is deeper than the configured limit of {limit} levels")]
    DepthLimitExceeded { node: String, limit: usize },
}

/// Result type alias for aggregation
pub type AggregationResult<T> = Result<T, AggregationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = AggregationError::MissingParameter {
            node: "alice".to_string(),
            param: ParamId::Age,
        };
        assert_eq!(err.to_string(), "node `alice` has no value for AGE");

        let err = AggregationError::DivisionByZero {
            node: "bob".to_string(),
            param: ParamId::Salary,
        };
        assert_eq!(
            err.to_string(),
            "cannot average SALARY at node `bob`: it has no direct children"
        );
    }

    #[test]
    fn test_invalid_value_keeps_source() {
        let err = AggregationError::InvalidNumericValue {
            node: "carol".to_string(),
            param: ParamId::Height,
            source: NumericError::InvalidNumericValue("NaN".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "node `carol`: HEIGHT is not usable: invalid numeric value `NaN`: not a finite number"
        );
        assert!(err.source().is_some());
    }
}
