// ============================================================================
// Interfaces Module
// Contains the contract between tree representations and the engine
// ============================================================================

mod tree_node;

pub use tree_node::TreeNode;
