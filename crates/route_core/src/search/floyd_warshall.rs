//! All-pairs shortest paths.
//!
//! [`FloydWarshall::run`] computes the distance and next-hop matrices once.
//! Paths for any pair are then read from [`AllPairs`] without recomputation.

use log::info;

use crate::constants::Weight;
use crate::error::SearchError;
use crate::graph::{Graph, NodeIndex};
use crate::objective::Objective;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;

/// First node to move to on the best known path, for every ordered pair.
///
/// Node indices of the graph are dense, so they index the matrix directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NextHop {
    num_nodes: usize,
    hops: Vec<Option<NodeIndex>>,
}

impl NextHop {
    fn new(num_nodes: usize) -> Self {
        NextHop {
            num_nodes,
            hops: vec![None; num_nodes * num_nodes],
        }
    }

    #[inline(always)]
    pub fn get(&self, from: NodeIndex, to: NodeIndex) -> Option<NodeIndex> {
        self.hops[from.index() * self.num_nodes + to.index()]
    }

    #[inline(always)]
    fn set(&mut self, from: usize, to: usize, hop: Option<NodeIndex>) {
        self.hops[from * self.num_nodes + to] = hop;
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn check(&self, node_idx: NodeIndex) -> Result<usize, SearchError> {
        if node_idx.index() < self.num_nodes {
            Ok(node_idx.index())
        } else {
            Err(SearchError::UnknownNode(format!("#{}", node_idx.index())))
        }
    }

    /// Follows the next hops from `source` until `target` is reached.
    ///
    /// Returns `Ok(None)` if `target` is unreachable and an error if one of
    /// the nodes is not part of the matrix.
    pub fn path(
        &self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<Option<Vec<NodeIndex>>, SearchError> {
        self.check(source)?;
        self.check(target)?;
        if source == target {
            return Ok(Some(vec![source]));
        }

        let mut path = vec![source];
        let mut current = source;
        while current != target {
            // A simple path has at most n nodes
            if path.len() >= self.num_nodes {
                return Ok(None);
            }
            match self.get(current, target) {
                Some(hop) => current = hop,
                None => return Ok(None),
            }
            path.push(current);
        }
        Ok(Some(path))
    }
}

/// Path between `source` and `target` encoded in a next-hop matrix
pub fn path_between(
    next_hop: &NextHop,
    source: NodeIndex,
    target: NodeIndex,
) -> Result<Option<Vec<NodeIndex>>, SearchError> {
    next_hop.path(source, target)
}

/// Distance and next-hop matrices of all node pairs
#[derive(Debug, Clone)]
pub struct AllPairs {
    num_nodes: usize,
    distances: Vec<Weight>,
    next_hop: NextHop,
    pub objective: Objective,
}

impl AllPairs {
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Weight of the best path, infinite if `target` is unreachable
    pub fn distance(&self, source: NodeIndex, target: NodeIndex) -> Result<Weight, SearchError> {
        let (i, j) = (self.next_hop.check(source)?, self.next_hop.check(target)?);
        Ok(self.distances[i * self.num_nodes + j])
    }

    pub fn next_hop(&self) -> &NextHop {
        &self.next_hop
    }

    pub fn path(&self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath, SearchError> {
        Ok(match self.next_hop.path(source, target)? {
            Some(nodes) => ShortestPath::new(nodes, self.distance(source, target)?),
            None => ShortestPath::unreachable(),
        })
    }

    /// A negative entry on the diagonal means some node lies on a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.num_nodes).any(|i| self.distances[i * self.num_nodes + i] < 0.0)
    }
}

pub struct FloydWarshall<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    objective: Objective,
}

impl<'a> FloydWarshall<'a> {
    /// Searches for the fastest travel time
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_objective(graph, Objective::Time)
    }

    pub fn with_objective(graph: &'a Graph, objective: Objective) -> Self {
        FloydWarshall {
            g: graph,
            objective,
            stats: SearchStats::default(),
        }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn run(&mut self) -> AllPairs {
        self.stats.init();

        let n = self.g.num_nodes();
        let mut dist = vec![Weight::INFINITY; n * n];
        let mut next_hop = NextHop::new(n);

        for i in 0..n {
            dist[i * n + i] = 0.0;
        }

        for edge in self.g.edges() {
            let (i, j) = (edge.source.index(), edge.target.index());
            let weight = self.objective.weight(&edge.attrs);
            // Keeps the diagonal at zero for non-negative self loops
            if weight < dist[i * n + j] {
                dist[i * n + j] = weight;
                next_hop.set(i, j, Some(edge.target));
            }
        }

        // k has to be the outermost loop
        for k in 0..n {
            for i in 0..n {
                let via = dist[i * n + k];
                if via == Weight::INFINITY {
                    self.stats.operations += n;
                    continue;
                }
                for j in 0..n {
                    self.stats.operations += 1;
                    let new_distance = via + dist[k * n + j];
                    if new_distance < dist[i * n + j] {
                        dist[i * n + j] = new_distance;
                        let hop = next_hop.get(NodeIndex::new(i), NodeIndex::new(k));
                        next_hop.set(i, j, hop);
                    }
                }
            }
        }
        self.stats.finish();

        info!(
            "All pairs computed for {} nodes: {:?}/{} operations",
            n,
            self.stats.elapsed(),
            self.stats.operations
        );

        AllPairs {
            num_nodes: n,
            distances: dist,
            next_hop,
            objective: self.objective,
        }
    }

    /// Computes all pairs and extracts the path between `source` and `target`
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<ShortestPath, SearchError> {
        self.g.check(source)?;
        self.g.check(target)?;

        let all_pairs = self.run();
        let sp = all_pairs.path(source, target)?;
        // Measured time covers the path extraction too
        self.stats.finish();
        Ok(sp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::dijkstra::Dijkstra;
    use crate::search::{assert_no_path, assert_path, is_valid_path};
    use crate::util::test_graphs::*;
    use crate::{attrs, edge, graph::Node};

    #[test]
    fn fastest_on_simple_graph() {
        let g = generate_simple_graph();
        let a = g.node_index("A").unwrap();
        let c = g.node_index("C").unwrap();
        let d = g.node_index("D").unwrap();

        let all_pairs = FloydWarshall::new(&g).run();

        assert_path(&g, vec!["A", "B", "C"], 2.0, all_pairs.path(a, c).unwrap());
        assert_path(&g, vec!["C"], 0.0, all_pairs.path(c, c).unwrap());
        assert_no_path(all_pairs.path(a, d).unwrap());
        assert_no_path(all_pairs.path(c, a).unwrap());
        assert_eq!(path_between(all_pairs.next_hop(), d, a), Ok(None));
    }

    #[test]
    fn operations_are_cubic() {
        let g = generate_complex_graph();
        let mut fw = FloydWarshall::new(&g);
        fw.run();

        assert_eq!(fw.stats.operations, g.num_nodes().pow(3));
    }

    #[test]
    fn matches_dijkstra_for_every_pair() {
        let g = generate_complex_graph();
        let all_pairs = FloydWarshall::new(&g).run();

        for source in g.node_indices() {
            let tree = Dijkstra::with_objective(&g, Objective::Time)
                .tree(source)
                .unwrap();
            for target in g.node_indices() {
                approx::assert_relative_eq!(
                    all_pairs.distance(source, target).unwrap(),
                    tree.weight(target),
                    epsilon = 1e-9
                );
                let sp = all_pairs.path(source, target).unwrap();
                assert!(is_valid_path(&g, &sp.nodes, source, target));
            }
        }
    }

    #[test]
    fn matrix_is_reused_between_queries() {
        let g = generate_complex_graph();
        let all_pairs = FloydWarshall::new(&g).run();
        let a = g.node_index("A").unwrap();

        for target in g.node_indices() {
            let nodes = path_between(all_pairs.next_hop(), a, target)
                .unwrap()
                .unwrap();
            assert_eq!(nodes.first(), Some(&a));
            assert_eq!(nodes.last(), Some(&target));
        }
    }

    #[test]
    fn negative_cost_cycle_shows_on_diagonal() {
        let g = generate_negative_cycle_graph();

        assert!(!FloydWarshall::new(&g).run().has_negative_cycle());
        assert!(FloydWarshall::with_objective(&g, Objective::adjusted_cost())
            .run()
            .has_negative_cycle());
    }

    #[test]
    fn keeps_zero_diagonal_with_self_loop() {
        let mut g = Graph::new();
        let a = g.add_node(Node::new("A"));
        g.add_edge(edge!(a => a, attrs!(1.0, 2.0, 3.0)));

        let all_pairs = FloydWarshall::new(&g).run();
        assert_eq!(all_pairs.distance(a, a), Ok(0.0));
        assert_eq!(all_pairs.path(a, a).unwrap().nodes, vec![a]);
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        let g = generate_simple_graph();
        let all_pairs = FloydWarshall::new(&g).run();
        let a = g.node_index("A").unwrap();
        let unknown = NodeIndex::new(42);
        let err = SearchError::UnknownNode("#42".to_string());

        assert_eq!(all_pairs.distance(a, unknown), Err(err.clone()));
        assert_eq!(all_pairs.path(unknown, a), Err(err.clone()));
        assert_eq!(path_between(all_pairs.next_hop(), a, unknown), Err(err.clone()));

        let mut fw = FloydWarshall::new(&g);
        assert_eq!(fw.search(a, unknown), Err(err));
        // Rejected before the matrix is computed
        assert_eq!(fw.stats.operations, 0);
    }
}
