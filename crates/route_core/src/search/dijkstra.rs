use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::error::SearchError;
use crate::graph::*;
use crate::objective::Objective;
use crate::priority_queue::Candidate;
use crate::search::shortest_path::ShortestPath;
use crate::search::{NodeData, SearchTree};
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashSet;

/// Dijkstra's algorithm with a lazily cleaned binary heap.
///
/// Weights under the chosen objective must be non-negative. This is not
/// checked, negative weights silently produce wrong results.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    objective: Objective,
}

impl<'a> Dijkstra<'a> {
    /// Searches for the shortest distance
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_objective(graph, Objective::Distance)
    }

    pub fn with_objective(graph: &'a Graph, objective: Objective) -> Self {
        Dijkstra {
            g: graph,
            objective,
            stats: SearchStats::default(),
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Shortest path from `source` to `target`. Stops as soon as `target`
    /// is settled.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<ShortestPath, SearchError> {
        self.g.check(source)?;
        self.g.check(target)?;

        let tree = self.run(source, Some(target));
        let sp = tree.path(target);

        if sp.is_reachable() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.elapsed(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.elapsed(),
                self.stats.nodes_settled
            );
        }

        Ok(sp)
    }

    /// Full shortest path tree rooted at `source`
    pub fn tree(&mut self, source: NodeIndex) -> Result<SearchTree, SearchError> {
        self.g.check(source)?;
        Ok(self.run(source, None))
    }

    fn run(&mut self, source: NodeIndex, target: Option<NodeIndex>) -> SearchTree {
        self.stats.init();

        let mut node_data = NodeData::default();
        node_data.insert(source, (0.0, None));

        let mut settled: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            // Stale entry, the node was settled with a smaller weight
            if !settled.insert(node_idx) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if Some(node_idx) == target {
                break;
            }

            for edge in self.g.neighbors_outgoing(node_idx) {
                let new_distance = weight + self.objective.weight(&edge.attrs);
                if new_distance
                    < node_data
                        .get(&edge.target)
                        .map_or(Weight::INFINITY, |(weight, _)| *weight)
                {
                    node_data.insert(edge.target, (new_distance, Some(node_idx)));
                    queue.push(Candidate::new(edge.target, new_distance));
                }
            }
        }
        self.stats.finish();

        SearchTree::new(source, node_data)
    }
}
