//! Remote traversal engine seam

use crate::description::TraversalSpecification;
use crate::error::Result;
use taproot_core::{Node, Path};

/// The remote traversal engine.
///
/// Implementations take a start node and an assembled specification and
/// return the full, ordered, finite sequence of result paths in one
/// blocking call. The bridge issues exactly one call per traversal and
/// propagates any error unmodified; there is no retry, timeout or
/// cancellation at this layer. [`crate::Error::Remote`] is reserved for
/// implementations to report engine or transport failures.
pub trait TraversalExecutor {
    fn traverse(&self, start: &Node, specification: &TraversalSpecification) -> Result<Vec<Path>>;
}
