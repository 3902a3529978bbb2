// ============================================================================
// Parameter Catalog
// Closed set of parameter identifiers and the per-node value mapping
// ============================================================================

use crate::numeric::Number;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Parameter Identifier
// ============================================================================

/// Identifies which numeric attribute of a node to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ParamId {
    Age,
    Salary,
    Height,
    Weight,
}

impl ParamId {
    /// Every identifier in the catalog, in declaration order
    pub const ALL: [ParamId; 4] = [
        ParamId::Age,
        ParamId::Salary,
        ParamId::Height,
        ParamId::Weight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamId::Age => "AGE",
            ParamId::Salary => "SALARY",
            ParamId::Height => "HEIGHT",
            ParamId::Weight => "WEIGHT",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = String;

    /// Case-insensitive lookup by catalog name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ParamId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown parameter: {}", s))
    }
}

// ============================================================================
// Parameter Set
// ============================================================================

/// A node's own parameter values, keyed by identifier
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParamSet(BTreeMap<ParamId, Number>);

impl ParamSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a value, returning the one it replaced
    pub fn insert(&mut self, param: ParamId, value: impl Into<Number>) -> Option<Number> {
        self.0.insert(param, value.into())
    }

    /// Builder method: set a value
    pub fn with(mut self, param: ParamId, value: impl Into<Number>) -> Self {
        self.insert(param, value);
        self
    }

    pub fn get(&self, param: ParamId) -> Option<Number> {
        self.0.get(&param).copied()
    }

    pub fn contains(&self, param: ParamId) -> bool {
        self.0.contains_key(&param)
    }
}
