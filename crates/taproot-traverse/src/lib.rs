//! Taproot Traverse - Legacy traverser API over a remote traversal service
//!
//! This crate re-exposes the old synchronous graph-traversal surface
//! (breadth/depth order, depth limits, prune and filter scripts, returnable
//! evaluators, typed relationship filters) on top of a remote traversal
//! engine. The bridge does no graph walking of its own: each entry point
//! assembles a [`TraversalSpecification`], issues exactly one call through a
//! [`TraversalExecutor`], and wraps the returned path sequence in a lazy,
//! single-pass [`Traverser`].

pub mod bridge;
pub mod description;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod position;
pub mod traverser;

pub use bridge::TraverserBridge;
pub use description::{
    BuiltinFilter, DepthControl, FilterSpec, RelationshipSpec, ScriptExpression,
    TraversalOrder, TraversalSpecification, Uniqueness,
};
pub use error::{Error, Result};
pub use evaluator::{ReturnAllButStartNode, ReturnAllNodes, ReturnableEvaluator, StopEvaluator};
pub use executor::TraversalExecutor;
pub use position::TraversalPosition;
pub use traverser::Traverser;
