// ============================================================================
// AVERAGE
// Subtree sum spread over the queried node's direct children
// ============================================================================

use super::errors::{AggregationError, AggregationResult};
use super::sum::sum;
use super::traversal::Walk;
use crate::domain::AggregateFunction;
use crate::interfaces::TreeNode;
use rust_decimal::Decimal;

/// Subtree sum of `param` divided by the number of direct children of `node`.
///
/// The denominator counts direct children only: neither the node itself nor
/// deeper descendants. The quotient is rounded half-up to the configured
/// scale and always carries exactly that scale; a quotient too large to carry
/// it fails with `Overflow`.
///
/// # Example
/// ```text
/// root 10
/// ├── 20
/// └── 30          AVERAGE = (10 + 20 + 30) / 2 = 30.00
/// ```
pub(crate) fn average<N: TreeNode>(node: &N, walk: &Walk<'_>, depth: usize) -> AggregationResult<Decimal> {
    let total = sum(node, walk, depth)?;
    divide(node, walk, total)
}

/// Divide a subtree total by the direct child count of `node`
pub(crate) fn divide<N: TreeNode>(node: &N, walk: &Walk<'_>, total: Decimal) -> AggregationResult<Decimal> {
    let count = node.child_count();
    if count == 0 {
        return Err(AggregationError::DivisionByZero {
            node: node.name().to_string(),
            param: walk.param,
        });
    }

    div_half_up(total, count as u128, walk.config.average_scale)
        .ok_or_else(|| walk.overflow(node, AggregateFunction::Average))
}

/// Compute 10^n
const fn pow10(n: u32) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// `total / divisor` rounded half-up to exactly `scale` places, in one step.
///
/// Works on the magnitude `a / 10^s` of `total`: the scaled result is
/// `a * 10^scale / (divisor * 10^s)`, and the remainder of that integer
/// division decides the rounding. Returns `None` if the result does not fit.
fn div_half_up(total: Decimal, divisor: u128, scale: u32) -> Option<Decimal> {
    let a = total.mantissa().unsigned_abs();
    let s = total.scale();

    let (quotient, remainder, denominator) = if scale <= s {
        match divisor.checked_mul(pow10(s - scale)) {
            Some(d) => (a / d, a % d, d),
            // Denominator past u128 dwarfs any 96-bit mantissa
            None => return Decimal::try_from_i128_with_scale(0, scale).ok(),
        }
    } else {
        // Long division for the extra digits; remainder stays below divisor
        let mut q = a / divisor;
        let mut r = a % divisor;
        for _ in s..scale {
            let next = r * 10;
            q = q.checked_mul(10)?.checked_add(next / divisor)?;
            r = next % divisor;
        }
        (q, r, divisor)
    };

    // Round half-up: 2 * remainder >= denominator, without overflowing
    let rounded = if remainder >= denominator - remainder {
        quotient.checked_add(1)?
    } else {
        quotient
    };

    let magnitude = i128::try_from(rounded).ok()?;
    let signed = if total.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    };
    Decimal::try_from_i128_with_scale(signed, scale).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AggregationConfig, Node, ParamId};

    fn family(values: &[i64]) -> Node {
        let children = values[1..]
            .iter()
            .enumerate()
            .map(|(i, v)| Node::new(format!("child{}", i)).with_param(ParamId::Age, *v));

        Node::new("root")
            .with_param(ParamId::Age, values[0])
            .with_children(children)
    }

    #[test]
    fn test_average_over_direct_children() {
        let config = AggregationConfig::default();
        let walk = Walk::new(&config, ParamId::Age);

        let result = average(&family(&[10, 20, 30]), &walk, 0).unwrap();
        assert_eq!(result, Decimal::from(30));
        assert_eq!(result.to_string(), "30.00");
    }

    #[test]
    fn test_average_rounds_half_up() {
        let config = AggregationConfig::default();
        let walk = Walk::new(&config, ParamId::Age);

        // (1 + 0 + 0 + 0 + 0 + 0 + 0 + 0 + 0) / 8 = 0.125 -> 0.13
        let result = average(&family(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "0.13");

        // -0.125 -> -0.13 (ties away from zero)
        let result = average(&family(&[-1, 0, 0, 0, 0, 0, 0, 0, 0]), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "-0.13");
    }

    #[test]
    fn test_average_respects_scale() {
        let config = AggregationConfig::whole_units();
        let walk = Walk::new(&config, ParamId::Age);

        // 10 / 3 = 3.333... -> 3
        let result = average(&family(&[4, 3, 3, 0]), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "3");

        let config = AggregationConfig::high_precision();
        let walk = Walk::new(&config, ParamId::Age);
        let result = average(&family(&[0, 1, 0, 0]), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "0.3333333333");
    }

    #[test]
    fn test_average_without_children() {
        let config = AggregationConfig::default();
        let walk = Walk::new(&config, ParamId::Age);

        assert_eq!(
            average(&family(&[42]), &walk, 0),
            Err(AggregationError::DivisionByZero {
                node: "root".to_string(),
                param: ParamId::Age,
            })
        );
    }

    fn decimal_family(root: Decimal, children: usize) -> Node {
        let children =
            (0..children).map(|i| Node::new(format!("child{}", i)).with_param(ParamId::Age, 0));
        Node::new("root")
            .with_param(ParamId::Age, root)
            .with_children(children)
    }

    #[test]
    fn test_average_rounds_once() {
        let config = AggregationConfig::default();
        let walk = Walk::new(&config, ParamId::Age);

        // 0.3749999999999999999999999999 / 3 = 0.12499999... -> 0.12
        let total = Decimal::from_str_exact("0.3749999999999999999999999999").unwrap();
        let result = average(&decimal_family(total, 3), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "0.12");

        // exact tie at a finer input scale still rounds away from zero
        let result = average(&decimal_family(Decimal::new(375, 3), 3), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "0.13");
        let result = average(&decimal_family(Decimal::new(-375, 3), 3), &walk, 0).unwrap();
        assert_eq!(result.to_string(), "-0.13");
    }

    #[test]
    fn test_average_overflows_when_scale_does_not_fit() {
        let config = AggregationConfig::default();
        let walk = Walk::new(&config, ParamId::Age);

        assert_eq!(
            average(&decimal_family(Decimal::MAX, 1), &walk, 0),
            Err(AggregationError::Overflow {
                node: "root".to_string(),
                param: ParamId::Age,
                function: AggregateFunction::Average,
            })
        );

        // the same magnitude fits at scale 0
        let config = AggregationConfig::whole_units();
        let walk = Walk::new(&config, ParamId::Age);
        assert_eq!(average(&decimal_family(Decimal::MAX, 1), &walk, 0), Ok(Decimal::MAX));
    }
}
