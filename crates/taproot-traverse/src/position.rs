//! Traversal position snapshots

use taproot_core::{Node, NodeId, Path, Relationship};

/// An immutable snapshot of one step of a traversal.
///
/// A fresh position is created every time a traverser yields a node;
/// positions are never mutated afterwards and carry no reference back to
/// the traverser that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPosition {
    depth: usize,
    current_node: Node,
    last_relationship: Option<Relationship>,
    visit_count: u64,
}

impl TraversalPosition {
    /// Snapshot the end of `path` with the given visit count.
    pub(crate) fn from_path(path: &Path, visit_count: u64) -> Self {
        Self {
            depth: path.length(),
            current_node: path.end_node().clone(),
            last_relationship: path.last_relationship().cloned(),
            visit_count,
        }
    }

    /// Distance from the start node, in relationships
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The node at this position
    pub fn current_node(&self) -> &Node {
        &self.current_node
    }

    /// The relationship this position was reached through.
    ///
    /// `None` exactly when this is the start node.
    pub fn last_relationship(&self) -> Option<&Relationship> {
        self.last_relationship.as_ref()
    }

    /// 1-based ordinal of this position among the nodes yielded so far
    /// by its traversal
    pub fn visit_count(&self) -> u64 {
        self.visit_count
    }

    /// Whether this position is the traversal's start node
    pub fn is_start_node(&self) -> bool {
        self.depth == 0
    }

    pub fn not_start_node(&self) -> bool {
        !self.is_start_node()
    }

    /// The node on the other end of the last relationship traversed,
    /// `None` at the start node
    pub fn previous_node(&self) -> Option<NodeId> {
        self.last_relationship
            .as_ref()
            .and_then(|rel| rel.other_node(self.current_node.id))
    }
}
