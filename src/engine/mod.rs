// ============================================================================
// Engine Module
// Contains the recursive aggregation algorithms and their dispatch
// ============================================================================

mod aggregator;
mod average;
mod errors;
mod extremum;
mod parallel;
mod sum;
mod traversal;

pub mod factory;

#[cfg(test)]
mod property_tests;

pub use aggregator::{aggregate, Aggregator};
pub use errors::{AggregationError, AggregationResult};
pub use factory::{create_from_config, AggregatorBuilder};
