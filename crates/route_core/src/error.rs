use thiserror::Error;

use crate::graph::NodeIndex;

/// Errors raised while validating a query or running a search.
///
/// An unreachable destination is not an error, it is reported as an empty
/// path with an infinite weight.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),
    #[error("graph contains a negative-weight cycle reachable from the source (detected at node {})", .node.index())]
    NegativeCycle { node: NodeIndex },
}
