// ============================================================================
// Aggregation Request
// Function selector paired with the parameter it applies to
// ============================================================================

use super::params::ParamId;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The statistic to compute over a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AggregateFunction {
    /// Node's own value plus every child's subtree sum
    Sum,
    /// Subtree sum divided by the number of direct children
    Average,
    /// Smallest own value in the subtree
    Min,
    /// Largest own value in the subtree
    Max,
}

impl AggregateFunction {
    pub const ALL: [AggregateFunction; 4] = [
        AggregateFunction::Sum,
        AggregateFunction::Average,
        AggregateFunction::Min,
        AggregateFunction::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Average => "AVERAGE",
            AggregateFunction::Min => "MIN",
            AggregateFunction::Max => "MAX",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AggregateFunction::ALL
            .into_iter()
            .find(|function| function.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown aggregate function: {}", s))
    }
}

/// A single aggregation query: which function, over which parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregationRequest {
    pub function: AggregateFunction,
    pub param: ParamId,
}

impl AggregationRequest {
    pub fn new(function: AggregateFunction, param: ParamId) -> Self {
        Self { function, param }
    }

    pub fn sum(param: ParamId) -> Self {
        Self::new(AggregateFunction::Sum, param)
    }

    pub fn average(param: ParamId) -> Self {
        Self::new(AggregateFunction::Average, param)
    }

    pub fn min(param: ParamId) -> Self {
        Self::new(AggregateFunction::Min, param)
    }

    pub fn max(param: ParamId) -> Self {
        Self::new(AggregateFunction::Max, param)
    }
}

impl fmt::Display for AggregationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.param)
    }
}
