use rustc_hash::FxHashMap;

use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
};

use self::shortest_path::ShortestPath;

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod shortest_path;

/// Tentative weight and predecessor of every node reached by a search
pub type NodeData = FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>;

/// Weights and predecessor links computed from a single source.
#[derive(Debug, Clone)]
pub struct SearchTree {
    pub source: NodeIndex,
    pub node_data: NodeData,
}

impl SearchTree {
    pub fn new(source: NodeIndex, node_data: NodeData) -> Self {
        SearchTree { source, node_data }
    }

    /// Weight from the source to `target`, infinite if it was not reached
    pub fn weight(&self, target: NodeIndex) -> Weight {
        self.node_data
            .get(&target)
            .map_or(Weight::INFINITY, |(weight, _)| *weight)
    }

    pub fn path(&self, target: NodeIndex) -> ShortestPath {
        reconstruct_path(target, self.source, &self.node_data)
            .unwrap_or_else(ShortestPath::unreachable)
    }
}

/// Walks the predecessor links backwards from `target` to `source`.
///
/// Returns `None` if `target` was never reached. The walk is bounded by the
/// number of reached nodes, so corrupted links can not loop forever.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &NodeData,
) -> Option<ShortestPath> {
    let weight = node_data.get(&target)?.0;
    if target == source {
        return Some(ShortestPath::new(vec![source], weight));
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > node_data.len() {
            return None;
        }
        current = node_data.get(&current)?.1?;
        path.push(current);
    }

    path.reverse();
    Some(ShortestPath::new(path, weight))
}

/// Checks that `nodes` starts at `source`, ends at `target` and that every
/// consecutive pair is an edge of `g`.
pub fn is_valid_path(g: &Graph, nodes: &[NodeIndex], source: NodeIndex, target: NodeIndex) -> bool {
    match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) if *first == source && *last == target => nodes
            .windows(2)
            .all(|pair| g.edge(pair[0], pair[1]).is_some()),
        _ => false,
    }
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: ShortestPath) {
    assert!(!path.is_reachable(), "Expected no path, got {:?}", path);
    assert_eq!(path.weight, Weight::INFINITY);
}

#[cfg(test)]
pub(crate) fn assert_path(g: &Graph, expected_path: Vec<&str>, expected_weight: Weight, path: ShortestPath) {
    let ids: Vec<&str> = path.nodes.iter().map(|n| g.id(*n)).collect();
    assert_eq!(expected_path, ids);
    approx::assert_relative_eq!(expected_weight, path.weight, epsilon = 1e-9);
}
