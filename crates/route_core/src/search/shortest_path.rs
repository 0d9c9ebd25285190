use crate::{constants::Weight, graph::NodeIndex};

/// Raw output of a search: the node sequence and the weight reached at the
/// target. An unreachable target has no nodes and an infinite weight.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn unreachable() -> Self {
        ShortestPath {
            nodes: Vec::new(),
            weight: Weight::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
