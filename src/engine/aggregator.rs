// ============================================================================
// Aggregator
// Single dispatch point from an aggregation request to its algorithm
// ============================================================================

use super::average::{average, divide};
use super::errors::AggregationResult;
use super::extremum::{extremum, Extremum};
use super::parallel::fan_out;
use super::sum::{add, sum};
use super::traversal::Walk;
use crate::domain::{AggregateFunction, AggregationConfig, AggregationRequest, ParamId};
use crate::interfaces::TreeNode;
use rust_decimal::Decimal;

/// Computes SUM, AVERAGE, MIN or MAX of a parameter over a subtree.
///
/// The aggregator holds only its configuration; trees are borrowed for the
/// duration of a call and never modified.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregationConfig,
}

impl Aggregator {
    /// Create an aggregator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration must already be validated (see `create_from_config`)
    pub(crate) fn from_validated(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Aggregate `request.param` over the subtree rooted at `node`.
    ///
    /// Fails fast: the first missing or invalid value anywhere in the subtree
    /// aborts the call.
    pub fn aggregate<N: TreeNode>(&self, node: &N, request: AggregationRequest) -> AggregationResult<Decimal> {
        tracing::debug!("Aggregating {} over subtree of {}", request, node.name());

        let walk = Walk::new(&self.config, request.param);
        let result = match request.function {
            AggregateFunction::Sum => sum(node, &walk, 0),
            AggregateFunction::Average => average(node, &walk, 0),
            AggregateFunction::Min => extremum(node, Extremum::Min, &walk, 0),
            AggregateFunction::Max => extremum(node, Extremum::Max, &walk, 0),
        };

        log_outcome(node, request, &result);
        result
    }

    /// Same result as [`aggregate`](Self::aggregate), evaluating each direct
    /// child's subtree on its own scoped thread.
    ///
    /// Sub-results are combined in child order, so SUM and AVERAGE add in
    /// exactly the sequence the sequential walk uses.
    pub fn aggregate_parallel<N>(&self, node: &N, request: AggregationRequest) -> AggregationResult<Decimal>
    where
        N: TreeNode + Sync,
    {
        tracing::debug!(
            "Aggregating {} over subtree of {} across {} threads",
            request,
            node.name(),
            node.child_count()
        );

        let walk = Walk::new(&self.config, request.param);
        let result = match request.function {
            AggregateFunction::Sum => self.parallel_sum(node, &walk),
            AggregateFunction::Average => self
                .parallel_sum(node, &walk)
                .and_then(|total| divide(node, &walk, total)),
            AggregateFunction::Min => self.parallel_extremum(node, Extremum::Min, &walk),
            AggregateFunction::Max => self.parallel_extremum(node, Extremum::Max, &walk),
        };

        log_outcome(node, request, &result);
        result
    }

    fn parallel_sum<N: TreeNode + Sync>(&self, node: &N, walk: &Walk<'_>) -> AggregationResult<Decimal> {
        let own = walk.own_value(node, 0)?;
        let subtotals = fan_out(node.children(), |child| sum(child, walk, 1))?;

        subtotals
            .into_iter()
            .try_fold(own, |total, value| add(node, walk, total, value))
    }

    fn parallel_extremum<N: TreeNode + Sync>(
        &self,
        node: &N,
        which: Extremum,
        walk: &Walk<'_>,
    ) -> AggregationResult<Decimal> {
        let own = walk.own_value(node, 0)?;
        let bests = fan_out(node.children(), |child| extremum(child, which, walk, 1))?;

        Ok(bests
            .into_iter()
            .fold(own, |best, value| which.pick(best, value)))
    }
}

fn log_outcome<N: TreeNode>(node: &N, request: AggregationRequest, result: &AggregationResult<Decimal>) {
    match result {
        Ok(value) => tracing::debug!("{} at {} = {}", request, node.name(), value),
        Err(e) => tracing::debug!("{} at {} failed: {}", request, node.name(), e),
    }
}

/// Aggregate with the default configuration.
///
/// # Example
/// ```
/// use tree_aggregator::prelude::*;
/// use rust_decimal::Decimal;
///
/// let root = Node::new("root")
///     .with_param(ParamId::Age, 10)
///     .with_child(Node::new("a").with_param(ParamId::Age, 20))
///     .with_child(Node::new("b").with_param(ParamId::Age, 30));
///
/// let total = aggregate(&root, AggregateFunction::Sum, ParamId::Age).unwrap();
/// assert_eq!(total, Decimal::from(60));
/// ```
pub fn aggregate<N: TreeNode>(node: &N, function: AggregateFunction, param: ParamId) -> AggregationResult<Decimal> {
    Aggregator::new().aggregate(node, AggregationRequest::new(function, param))
}
