//! Legacy evaluator callback contracts
//!
//! The old traversal API let callers steer a traversal with two callback
//! styles: a returnable evaluator deciding per position whether its node is
//! part of the result, and a stop evaluator deciding where to cut the
//! descent. Both are narrow one-method contracts here; any
//! `Fn(&TraversalPosition) -> bool` closure qualifies.

use crate::position::TraversalPosition;

/// Decides whether the node at a position belongs in the traversal result.
///
/// Evaluated locally, after the remote fetch. The position handed in
/// reports the count of nodes already returned, not counting the candidate
/// itself.
pub trait ReturnableEvaluator {
    fn is_returnable(&self, position: &TraversalPosition) -> bool;
}

impl<F> ReturnableEvaluator for F
where
    F: Fn(&TraversalPosition) -> bool,
{
    fn is_returnable(&self, position: &TraversalPosition) -> bool {
        self(position)
    }
}

/// Decides whether a traversal should stop descending past a position.
///
/// Carried only for signature compatibility: the remote service cannot run
/// arbitrary local callbacks while walking, so the stop-evaluator entry
/// point always fails (see [`crate::bridge::TraverserBridge`]).
pub trait StopEvaluator {
    fn should_stop(&self, position: &TraversalPosition) -> bool;
}

impl<F> StopEvaluator for F
where
    F: Fn(&TraversalPosition) -> bool,
{
    fn should_stop(&self, position: &TraversalPosition) -> bool {
        self(position)
    }
}

/// Returnable evaluator accepting every node, the start node included
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnAllNodes;

impl ReturnableEvaluator for ReturnAllNodes {
    fn is_returnable(&self, _position: &TraversalPosition) -> bool {
        true
    }
}

/// Returnable evaluator accepting every node except the start node
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnAllButStartNode;

impl ReturnableEvaluator for ReturnAllButStartNode {
    fn is_returnable(&self, position: &TraversalPosition) -> bool {
        position.not_start_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taproot_core::{Node, NodeId, Path, Relationship};

    fn start_position() -> TraversalPosition {
        TraversalPosition::from_path(&Path::start(Node::new(1)), 1)
    }

    fn deep_position() -> TraversalPosition {
        let path = Path::start(Node::new(1)).step(
            Relationship::new(100, NodeId(1), NodeId(2), "FOLLOWS"),
            Node::new(2),
        );
        TraversalPosition::from_path(&path, 2)
    }

    #[test]
    fn test_return_all_nodes() {
        assert!(ReturnAllNodes.is_returnable(&start_position()));
        assert!(ReturnAllNodes.is_returnable(&deep_position()));
    }

    #[test]
    fn test_return_all_but_start_node() {
        assert!(!ReturnAllButStartNode.is_returnable(&start_position()));
        assert!(ReturnAllButStartNode.is_returnable(&deep_position()));
    }

    #[test]
    fn test_closures_as_evaluators() {
        let shallow = |pos: &TraversalPosition| pos.depth() < 2;
        assert!(ReturnableEvaluator::is_returnable(&shallow, &deep_position()));

        let never = |pos: &TraversalPosition| pos.depth() > 100;
        assert!(!StopEvaluator::should_stop(&never, &deep_position()));
    }
}
