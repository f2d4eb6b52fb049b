//! Node (vertex) types

use serde::{Deserialize, Serialize};

/// Unique identifier for a node, assigned by the graph service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a node held by the graph service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
}

impl Node {
    /// Create a node reference from a raw id
    pub fn new(id: u64) -> Self {
        Self { id: NodeId(id) }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node[{}]", self.id)
    }
}
