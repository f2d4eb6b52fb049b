//! Relationship (edge) types and traversal direction

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a relationship, assigned by the graph service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipId(pub u64);

impl std::fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relationship type classification (e.g. "FOLLOWS", "works_at")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipType(pub String);

impl RelationshipType {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelationshipType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RelationshipType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction for graph traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

impl Direction {
    /// Parse a direction from its wire name, case-insensitively.
    ///
    /// Accepts both the long names and the short aliases used by older
    /// clients (`out`, `in`, `all`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "outgoing" | "out" => Some(Self::Outgoing),
            "incoming" | "in" => Some(Self::Incoming),
            "both" | "all" => Some(Self::Both),
            _ => None,
        }
    }
}

/// A relationship (edge) between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier
    pub id: RelationshipId,

    /// Source node ID
    pub from_id: NodeId,

    /// Target node ID
    pub to_id: NodeId,

    /// Type of relationship
    pub relationship_type: RelationshipType,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(
        id: u64,
        from_id: NodeId,
        to_id: NodeId,
        relationship_type: impl Into<RelationshipType>,
    ) -> Self {
        Self {
            id: RelationshipId(id),
            from_id,
            to_id,
            relationship_type: relationship_type.into(),
        }
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an
    /// endpoint of this relationship.
    pub fn other_node(&self, node: NodeId) -> Option<NodeId> {
        if node == self.from_id {
            Some(self.to_id)
        } else if node == self.to_id {
            Some(self.from_id)
        } else {
            None
        }
    }
}
