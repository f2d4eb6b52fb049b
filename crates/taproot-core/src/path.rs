//! Paths returned by the graph service

use crate::node::Node;
use crate::relationship::Relationship;
use serde::{Deserialize, Serialize};

/// An ordered walk through the graph from a start node to an end node.
///
/// A path always holds one more node than relationships; a path of length
/// zero is just its start node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
}

impl Path {
    /// A zero-length path positioned at `node`
    pub fn start(node: Node) -> Self {
        Self {
            nodes: vec![node],
            relationships: Vec::new(),
        }
    }

    /// Extend this path by one relationship to the next node
    pub fn step(mut self, relationship: Relationship, node: Node) -> Self {
        self.relationships.push(relationship);
        self.nodes.push(node);
        self
    }

    /// The node this path starts at
    pub fn start_node(&self) -> &Node {
        &self.nodes[0]
    }

    /// The node this path ends at
    pub fn end_node(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Path length in relationships; zero for a lone start node
    pub fn length(&self) -> usize {
        self.relationships.len()
    }

    /// The relationship this path arrived through, `None` at the start node
    pub fn last_relationship(&self) -> Option<&Relationship> {
        self.relationships.last()
    }

    /// All nodes along the path, start first
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All relationships along the path, in traversal order
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}
