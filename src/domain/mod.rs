// ============================================================================
// Domain Models Module
// Contains the tree entities and the value objects of a query
// ============================================================================

pub mod config;
pub mod node;
pub mod params;
pub mod request;

pub use config::AggregationConfig;
pub use node::Node;
pub use params::{ParamId, ParamSet};
pub use request::{AggregateFunction, AggregationRequest};
