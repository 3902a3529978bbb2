// ============================================================================
// Property Tests
// Whole-subtree identities checked against flat recomputation
// ============================================================================

use super::{aggregate, Aggregator, AggregatorBuilder};
use crate::domain::{AggregateFunction, AggregationRequest, Node, ParamId};
use crate::interfaces::TreeNode;
use crate::numeric::Number;
use proptest::prelude::*;
use rust_decimal::Decimal;

const PARAM: ParamId = ParamId::Salary;

/// Decimals with up to 12 fractional digits
fn arb_value() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000, 0u32..=12).prop_map(|(m, s)| Decimal::new(m, s))
}

fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = arb_value().prop_map(|v| Node::new("leaf").with_param(PARAM, v));

    leaf.prop_recursive(4, 64, 5, |inner| {
        (arb_value(), prop::collection::vec(inner, 0..5))
            .prop_map(|(v, children)| Node::new("branch").with_param(PARAM, v).with_children(children))
    })
}

fn own_value(node: &Node) -> Decimal {
    match node.parameter(PARAM) {
        Some(Number::Decimal(v)) => v,
        _ => unreachable!("generated nodes carry decimal values"),
    }
}

/// Every own value in the subtree, in pre-order
fn own_values(node: &Node, out: &mut Vec<Decimal>) {
    out.push(own_value(node));
    for child in node.children() {
        own_values(child, out);
    }
}

fn flatten(node: &Node) -> Vec<Decimal> {
    let mut out = Vec::new();
    own_values(node, &mut out);
    out
}

proptest! {
    #[test]
    fn prop_sum_counts_each_node_once(tree in arb_tree()) {
        let expected: Decimal = flatten(&tree).into_iter().sum();
        prop_assert_eq!(aggregate(&tree, AggregateFunction::Sum, PARAM).unwrap(), expected);
    }

    #[test]
    fn prop_sum_recursive_identity(tree in arb_tree()) {
        let children: Decimal = tree
            .children()
            .iter()
            .map(|child| aggregate(child, AggregateFunction::Sum, PARAM).unwrap())
            .sum();

        prop_assert_eq!(
            aggregate(&tree, AggregateFunction::Sum, PARAM).unwrap(),
            own_value(&tree) + children
        );
    }

    #[test]
    fn prop_min_max_are_tight_bounds(tree in arb_tree()) {
        let values = flatten(&tree);
        let min = aggregate(&tree, AggregateFunction::Min, PARAM).unwrap();
        let max = aggregate(&tree, AggregateFunction::Max, PARAM).unwrap();

        prop_assert!(values.iter().all(|v| min <= *v && *v <= max));
        prop_assert!(values.contains(&min));
        prop_assert!(values.contains(&max));
    }

    // |R| is the nearest multiple of 10^-k to |total| / n, ties rounding up:
    // 2|R|n - n*ulp <= 2|total| < 2|R|n + n*ulp
    #[test]
    fn prop_average_is_correctly_rounded(tree in arb_tree(), scale in 0u32..=6) {
        let aggregator = AggregatorBuilder::new().average_scale(scale).build().unwrap();
        let result = aggregator.aggregate(&tree, AggregationRequest::average(PARAM));

        let n = tree.child_count();
        if n == 0 {
            prop_assert!(result.is_err());
        } else {
            let avg = result.unwrap();
            let total: Decimal = flatten(&tree).into_iter().sum();
            let n = Decimal::from(n);
            let ulp = Decimal::new(1, scale);
            let two = Decimal::TWO;

            prop_assert_eq!(avg.scale(), scale);
            prop_assert!(two * avg.abs() * n - ulp * n <= two * total.abs());
            prop_assert!(two * total.abs() < two * avg.abs() * n + ulp * n);
            prop_assert!(avg.is_zero() || avg.is_sign_negative() == total.is_sign_negative());
        }
    }

    #[test]
    fn prop_parallel_matches_sequential(tree in arb_tree()) {
        let aggregator = Aggregator::new();
        for function in AggregateFunction::ALL {
            let request = AggregationRequest::new(function, PARAM);
            prop_assert_eq!(
                aggregator.aggregate_parallel(&tree, request),
                aggregator.aggregate(&tree, request)
            );
        }
    }
}
