// ============================================================================
// Node Domain Model
// ============================================================================

use super::params::{ParamId, ParamSet};
use crate::interfaces::TreeNode;
use crate::numeric::Number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entity in an aggregation tree.
///
/// A node owns its parameter values and its children outright; trees are
/// built bottom-up with the `with_*` methods and are not mutated afterwards.
///
/// # Example
/// ```
/// use tree_aggregator::domain::{Node, ParamId};
/// use tree_aggregator::interfaces::TreeNode;
///
/// let family = Node::new("parent")
///     .with_param(ParamId::Age, 52)
///     .with_child(Node::new("child").with_param(ParamId::Age, 21));
///
/// assert_eq!(family.child_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    params: ParamSet,

    #[cfg_attr(feature = "serde", serde(default))]
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: ParamSet::new(),
            children: Vec::new(),
        }
    }

    /// Builder method: Set one of the node's own parameter values
    pub fn with_param(mut self, param: ParamId, value: impl Into<Number>) -> Self {
        self.params.insert(param, value);
        self
    }

    /// Builder method: Replace the whole parameter set
    pub fn with_params(mut self, params: ParamSet) -> Self {
        self.params = params;
        self
    }

    /// Builder method: Append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder method: Append several children, keeping their order
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of nodes below this one, at any depth
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

impl TreeNode for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter(&self, param: ParamId) -> Option<Number> {
        self.params.get(param)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

// ============================================================================
// JSON
// ============================================================================

#[cfg(feature = "serde")]
impl Node {
    /// Parse a tree from JSON.
    ///
    /// ```json
    /// {"name": "root", "params": {"AGE": 40}, "children": [{"name": "kid", "params": {"AGE": 9}}]}
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
