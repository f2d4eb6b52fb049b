//! Legacy traversal entry points
//!
//! [`TraverserBridge`] is the caller-facing surface: it accepts the old
//! traversal parameter shapes, validates them, assembles a
//! [`TraversalSpecification`], makes the one remote call, and hands back a
//! lazy [`Traverser`]. The five entry points mirror the old overload set;
//! Rust has no overloading, so each is named by its parameter shape.

use crate::description::{
    BuiltinFilter, FilterSpec, RelationshipSpec, ScriptExpression, TraversalOrder,
    TraversalSpecification,
};
use crate::error::{Error, Result};
use crate::evaluator::{ReturnableEvaluator, StopEvaluator};
use crate::executor::TraversalExecutor;
use crate::traverser::Traverser;
use serde_json::Value;
use taproot_core::Node;

/// Converts a legacy nullable argument into a named missing-argument error
fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(Error::MissingArgument(name))
}

/// Bridges the legacy traversal surface onto a remote traversal engine
pub struct TraverserBridge<E> {
    executor: E,
}

impl<E: TraversalExecutor> TraverserBridge<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Traverse with a literal depth limit and a (language, body) filter
    /// pair resolved remotely.
    pub fn traverse_with_max_depth(
        &self,
        node: &Node,
        order: TraversalOrder,
        max_depth: Option<u32>,
        filter_body: Option<&str>,
        filter_language: Option<&str>,
        rels: &[Value],
    ) -> Result<Traverser> {
        let max_depth = require(max_depth, "max depth")?;
        let filter_body = require(filter_body, "filter body")?;
        let filter_language = require(filter_language, "filter language")?;

        let mut specification = base_specification(order, rels)?.with_max_depth(max_depth);
        if let Some(filter) = FilterSpec::resolve(filter_language, filter_body) {
            specification = specification.with_filter(filter);
        }

        self.run(node, specification, None)
    }

    /// Traverse with a remotely evaluated prune script and a (language,
    /// body) filter pair resolved remotely.
    pub fn traverse_with_prune_script(
        &self,
        node: &Node,
        order: TraversalOrder,
        prune_body: Option<&str>,
        prune_language: Option<&str>,
        filter_body: Option<&str>,
        filter_language: Option<&str>,
        rels: &[Value],
    ) -> Result<Traverser> {
        let prune_body = require(prune_body, "prune body")?;
        let prune_language = require(prune_language, "prune language")?;
        let filter_body = require(filter_body, "filter body")?;
        let filter_language = require(filter_language, "filter language")?;

        let mut specification = base_specification(order, rels)?
            .with_prune(ScriptExpression::new(prune_language, prune_body));
        if let Some(filter) = FilterSpec::resolve(filter_language, filter_body) {
            specification = specification.with_filter(filter);
        }

        self.run(node, specification, None)
    }

    /// Traverse with a remotely evaluated prune script and a local
    /// returnable evaluator.
    ///
    /// The remote filter is forced to accept everything so nothing is
    /// dropped before the evaluator sees it.
    pub fn traverse_with_prune_and_evaluator(
        &self,
        node: &Node,
        order: TraversalOrder,
        prune_body: Option<&str>,
        prune_language: Option<&str>,
        evaluator: impl ReturnableEvaluator + 'static,
        rels: &[Value],
    ) -> Result<Traverser> {
        let prune_body = require(prune_body, "prune body")?;
        let prune_language = require(prune_language, "prune language")?;

        let specification = base_specification(order, rels)?
            .with_prune(ScriptExpression::new(prune_language, prune_body))
            .with_filter(FilterSpec::Builtin(BuiltinFilter::All));

        self.run(node, specification, Some(Box::new(evaluator)))
    }

    /// Traverse with a literal depth limit and a local returnable
    /// evaluator.
    ///
    /// The remote filter is forced to accept everything so nothing is
    /// dropped before the evaluator sees it.
    pub fn traverse_with_max_depth_and_evaluator(
        &self,
        node: &Node,
        order: TraversalOrder,
        max_depth: Option<u32>,
        evaluator: impl ReturnableEvaluator + 'static,
        rels: &[Value],
    ) -> Result<Traverser> {
        let max_depth = require(max_depth, "max depth")?;

        let specification = base_specification(order, rels)?
            .with_max_depth(max_depth)
            .with_filter(FilterSpec::Builtin(BuiltinFilter::All));

        self.run(node, specification, Some(Box::new(evaluator)))
    }

    /// Legacy stop-evaluator traversal. Stop evaluators are arbitrary local
    /// callbacks the remote engine cannot run while walking, so this entry
    /// point always fails without inspecting its arguments or touching the
    /// network.
    pub fn traverse_with_stop_evaluator(
        &self,
        _node: &Node,
        _order: TraversalOrder,
        _stop_evaluator: &dyn StopEvaluator,
        _returnable_evaluator: &dyn ReturnableEvaluator,
        _rels: &[Value],
    ) -> Result<Traverser> {
        Err(Error::Unsupported("stop-evaluator traversals"))
    }

    fn run(
        &self,
        node: &Node,
        specification: TraversalSpecification,
        evaluator: Option<Box<dyn ReturnableEvaluator>>,
    ) -> Result<Traverser> {
        tracing::debug!(
            "Executing remote traversal: start={}, order={:?}, depth={:?}, filter={:?}, {} relationship spec(s)",
            node,
            specification.order,
            specification.depth,
            specification.filter,
            specification.relationships.len()
        );

        let paths = self.executor.traverse(node, &specification)?;
        Ok(Traverser::new(paths, evaluator))
    }
}

fn base_specification(order: TraversalOrder, rels: &[Value]) -> Result<TraversalSpecification> {
    let relationships = RelationshipSpec::from_flat_list(rels)?;
    Ok(TraversalSpecification::new(order).with_relationships(relationships))
}
