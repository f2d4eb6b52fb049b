//! Lazy, single-pass traversal result iteration

use crate::evaluator::ReturnableEvaluator;
use crate::position::TraversalPosition;
use taproot_core::{Node, Path};

/// Local acceptance filter wrapping a legacy returnable evaluator.
///
/// Used when the evaluator logic cannot be pushed to the remote side: the
/// remote returns everything and each fetched path is judged here. The
/// candidate position carries the running count of nodes already returned,
/// not counting the candidate itself.
pub(crate) struct EvaluatorFilter {
    evaluator: Box<dyn ReturnableEvaluator>,
}

impl std::fmt::Debug for EvaluatorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluatorFilter").finish_non_exhaustive()
    }
}

impl EvaluatorFilter {
    pub(crate) fn new(evaluator: Box<dyn ReturnableEvaluator>) -> Self {
        Self { evaluator }
    }

    fn accept(&self, path: &Path, returned: u64) -> bool {
        self.evaluator
            .is_returnable(&TraversalPosition::from_path(path, returned))
    }
}

/// Look-ahead state: at most one unconsumed path is buffered, and
/// exhaustion is terminal.
#[derive(Debug)]
enum Lookahead {
    Fresh,
    Buffered(Path),
    Exhausted,
}

/// Stateful, single-pass, forward-only cursor over a traversal's result
/// paths.
///
/// Yields the end node of each accepted path and tracks the current
/// [`TraversalPosition`] alongside. Not reusable or resettable; meant to be
/// driven by exactly one caller, sequentially.
#[derive(Debug)]
pub struct Traverser {
    paths: std::vec::IntoIter<Path>,
    lookahead: Lookahead,
    filter: Option<EvaluatorFilter>,
    returned: u64,
    current: Option<TraversalPosition>,
}

impl Traverser {
    pub(crate) fn new(paths: Vec<Path>, evaluator: Option<Box<dyn ReturnableEvaluator>>) -> Self {
        Self {
            paths: paths.into_iter(),
            lookahead: Lookahead::Fresh,
            filter: evaluator.map(EvaluatorFilter::new),
            returned: 0,
            current: None,
        }
    }

    /// Whether another node can be produced.
    ///
    /// Pulls from the underlying sequence until a path passes the local
    /// filter or the sequence drains; rejected paths are discarded. Safe to
    /// call any number of times between yields.
    pub fn has_next(&mut self) -> bool {
        self.fill_buffer();
        matches!(self.lookahead, Lookahead::Buffered(_))
    }

    /// The most recently produced position, `None` before the first yield
    pub fn current_position(&self) -> Option<&TraversalPosition> {
        self.current.as_ref()
    }

    /// Drain every remaining node eagerly, in yield order.
    ///
    /// Forfeits laziness: afterwards the traverser is exhausted and a
    /// second call returns an empty vec.
    pub fn all_nodes(&mut self) -> Vec<Node> {
        self.by_ref().collect()
    }

    fn fill_buffer(&mut self) {
        while matches!(self.lookahead, Lookahead::Fresh) {
            match self.paths.next() {
                Some(path) => {
                    let accepted = match &self.filter {
                        Some(filter) => filter.accept(&path, self.returned),
                        None => true,
                    };
                    if accepted {
                        self.lookahead = Lookahead::Buffered(path);
                    }
                }
                None => self.lookahead = Lookahead::Exhausted,
            }
        }
    }

    fn take_buffered(&mut self) -> Option<Path> {
        self.fill_buffer();
        match std::mem::replace(&mut self.lookahead, Lookahead::Fresh) {
            Lookahead::Buffered(path) => Some(path),
            state => {
                self.lookahead = state;
                None
            }
        }
    }
}

impl Iterator for Traverser {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.take_buffered()?;
        self.returned += 1;
        let position = TraversalPosition::from_path(&path, self.returned);
        let node = position.current_node().clone();
        self.current = Some(position);
        Some(node)
    }
}

// Exhaustion is terminal: once `next` returns `None` it always will.
impl std::iter::FusedIterator for Traverser {}
