// ============================================================================
// Tree Aggregator Library
// Exact-decimal statistics over parameters of a rooted tree
// ============================================================================

//! # Tree Aggregator
//!
//! Computes SUM, AVERAGE, MIN and MAX of a named numeric parameter over a
//! node and all of its descendants.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic**: every raw value is validated through its
//!   printed form and aggregated as a `rust_decimal::Decimal`
//! - **Fail-fast**: missing parameters and NaN/Infinity abort the whole query
//! - **Trait-based trees**: the engine walks any [`TreeNode`](interfaces::TreeNode)
//! - **Scoped fan-out** of direct children for large trees
//!
//! ## Example
//!
//! ```rust
//! use tree_aggregator::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let family = Node::new("parent")
//!     .with_param(ParamId::Age, 10)
//!     .with_child(Node::new("first").with_param(ParamId::Age, 20))
//!     .with_child(Node::new("second").with_param(ParamId::Age, 30));
//!
//! let aggregator = AggregatorBuilder::currency().build().unwrap();
//!
//! let avg = aggregator
//!     .aggregate(&family, AggregationRequest::average(ParamId::Age))
//!     .unwrap();
//! assert_eq!(avg.to_string(), "30.00");
//!
//! let max = aggregate(&family, AggregateFunction::Max, ParamId::Age).unwrap();
//! assert_eq!(max, Decimal::from(30));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AggregateFunction, AggregationConfig, AggregationRequest, Node, ParamId, ParamSet,
    };
    pub use crate::engine::{
        aggregate, create_from_config, AggregationError, AggregationResult, Aggregator,
        AggregatorBuilder,
    };
    pub use crate::interfaces::TreeNode;
    pub use crate::numeric::{validate_and_convert, Number, NumericError};
}
