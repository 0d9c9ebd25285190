use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

use serde::Serialize;

use crate::{constants::Weight, graph::Graph};

/// Counters and wall-clock time of a single search run
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Nodes finalized by Dijkstra
    pub nodes_settled: usize,
    /// Full passes over all edges done by Bellman-Ford
    pub relaxation_passes: usize,
    /// Inner loop iterations of Floyd-Warshall
    pub operations: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.relaxation_passes = 0;
        self.operations = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }

    /// Elapsed time of the last finished run, zero if there was none
    pub fn elapsed(&self) -> Duration {
        self.duration.unwrap_or_default()
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} passes, {} operations in {:?}",
            self.nodes_settled, self.relaxation_passes, self.operations, self.duration
        )
    }
}

/// Summary of a network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub avg_distance: Weight,
    pub avg_cost: Weight,
    pub avg_time: Weight,
}

impl NetworkStats {
    pub fn new(g: &Graph) -> Self {
        let total_edges = g.edges.len();
        if total_edges == 0 {
            return NetworkStats {
                total_nodes: g.nodes.len(),
                total_edges,
                avg_distance: 0.0,
                avg_cost: 0.0,
                avg_time: 0.0,
            };
        }

        let (mut distance, mut cost, mut time) = (0.0, 0.0, 0.0);
        for edge in g.edges() {
            distance += edge.attrs.distance;
            cost += edge.attrs.cost;
            time += edge.attrs.time;
        }

        let n = total_edges as f64;
        NetworkStats {
            total_nodes: g.nodes.len(),
            total_edges,
            avg_distance: distance / n,
            avg_cost: cost / n,
            avg_time: time / n,
        }
    }
}

impl Display for NetworkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, avg distance {:.2} km, avg cost {:.2}, avg time {:.2} h",
            self.total_nodes, self.total_edges, self.avg_distance, self.avg_cost, self.avg_time
        )
    }
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.nodes.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for node in 0..g.nodes.len() {
        sum += g.edges_out[node].len() as f64;
    }
    sum / g.nodes.len() as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{
        graph::Graph,
        search::dijkstra::Dijkstra,
        statistics::{average_out_degree, NetworkStats},
        util::test_graphs::{generate_complex_graph, generate_simple_graph},
    };

    #[test]
    fn stats_work() {
        let g = generate_complex_graph();
        let a = g.node_index("A").unwrap();
        let e = g.node_index("E").unwrap();

        let mut d = Dijkstra::new(&g);
        d.search(a, e).unwrap();

        assert!(d.stats.duration.is_some());
        assert!(d.stats.nodes_settled > 0);
        assert!(d.stats.nodes_settled <= g.num_nodes());
        assert_eq!(d.stats.relaxation_passes, 0);
    }

    #[test]
    fn network_stats() {
        let g = generate_simple_graph();
        let stats = NetworkStats::new(&g);

        assert_eq!(stats.total_nodes, 4);
        assert_eq!(stats.total_edges, 3);
        assert_relative_eq!(stats.avg_distance, 15.0);
        assert_relative_eq!(stats.avg_cost, 19.0 / 3.0);
        assert_relative_eq!(stats.avg_time, 5.0 / 3.0);
    }

    #[test]
    fn empty_network_stats() {
        let stats = NetworkStats::new(&Graph::new());

        assert_eq!(stats.total_edges, 0);
        assert_eq!(stats.avg_distance, 0.0);
        assert_eq!(average_out_degree(&Graph::new()), 0.0);
    }

    #[test]
    fn out_degree() {
        let g = generate_simple_graph();
        assert_relative_eq!(average_out_degree(&g), 3.0 / 4.0);
    }
}
