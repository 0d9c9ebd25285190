use log::{debug, info, warn};

use crate::constants::Weight;
use crate::error::SearchError;
use crate::graph::{Graph, NodeIndex};
use crate::objective::Objective;
use crate::search::shortest_path::ShortestPath;
use crate::search::{NodeData, SearchTree};
use crate::statistics::SearchStats;

/// Bellman-Ford relaxation over the full edge list.
///
/// Works with negative weights and reports a negative cycle reachable from
/// the source instead of returning a wrong path. Defaults to the cost
/// objective with the layover penalty.
pub struct BellmanFord<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    objective: Objective,
}

impl<'a> BellmanFord<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_objective(graph, Objective::adjusted_cost())
    }

    pub fn with_objective(graph: &'a Graph, objective: Objective) -> Self {
        BellmanFord {
            g: graph,
            objective,
            stats: SearchStats::default(),
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<ShortestPath, SearchError> {
        self.g.check(target)?;
        let sp = self.tree(source)?.path(target);

        if sp.is_reachable() {
            debug!("Path found: {:?}", sp);
        }
        info!(
            "Bellman-Ford finished: {:?}/{} passes",
            self.stats.elapsed(),
            self.stats.relaxation_passes
        );

        Ok(sp)
    }

    /// Weights and predecessors of all nodes reachable from `source`
    pub fn tree(&mut self, source: NodeIndex) -> Result<SearchTree, SearchError> {
        self.g.check(source)?;
        self.stats.init();

        let num_nodes = self.g.num_nodes();
        let mut dist = vec![Weight::INFINITY; num_nodes];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        dist[source.index()] = 0.0;

        // At most |V| - 1 passes, stop once nothing changes
        for _ in 1..num_nodes {
            self.stats.relaxation_passes += 1;
            let mut updated = false;

            for edge in self.g.edges() {
                let from = dist[edge.source.index()];
                if from == Weight::INFINITY {
                    continue;
                }
                let new_distance = from + self.objective.weight(&edge.attrs);
                if new_distance < dist[edge.target.index()] {
                    dist[edge.target.index()] = new_distance;
                    prev[edge.target.index()] = Some(edge.source);
                    updated = true;
                }
            }

            if !updated {
                break;
            }
        }

        // Any edge that still relaxes lies on or behind a negative cycle
        for edge in self.g.edges() {
            let from = dist[edge.source.index()];
            if from != Weight::INFINITY
                && from + self.objective.weight(&edge.attrs) < dist[edge.target.index()]
            {
                self.stats.finish();
                warn!(
                    "Negative cycle detected at node {}",
                    self.g.id(edge.target)
                );
                return Err(SearchError::NegativeCycle { node: edge.target });
            }
        }

        let mut node_data = NodeData::default();
        for (idx, weight) in dist.iter().enumerate() {
            if *weight != Weight::INFINITY {
                node_data.insert(NodeIndex::new(idx), (*weight, prev[idx]));
            }
        }
        self.stats.finish();

        Ok(SearchTree::new(source, node_data))
    }
}
