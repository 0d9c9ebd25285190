use std::{fmt, time::Duration};

use serde::Serialize;

use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
    metrics::PathMetrics,
    objective::Objective,
    search::shortest_path::ShortestPath,
    statistics::SearchStats,
};

/// The algorithms taking part in a comparison, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 3] {
        [
            Algorithm::Dijkstra,
            Algorithm::BellmanFord,
            Algorithm::FloydWarshall,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::FloydWarshall => "Floyd-Warshall",
        }
    }

    pub fn paradigm(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Greedy",
            Algorithm::BellmanFord => "Dynamic Programming",
            Algorithm::FloydWarshall => "Dynamic Programming (all pairs)",
        }
    }

    pub fn time_complexity(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "O((V + E) log V)",
            Algorithm::BellmanFord => "O(V * E)",
            Algorithm::FloydWarshall => "O(V^3)",
        }
    }

    pub fn space_complexity(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra | Algorithm::BellmanFord => "O(V)",
            Algorithm::FloydWarshall => "O(V^2)",
        }
    }

    /// Weight the algorithm optimizes in a comparison
    pub fn objective(&self, layover_rate: Weight) -> Objective {
        match self {
            Algorithm::Dijkstra => Objective::Distance,
            Algorithm::BellmanFord => Objective::AdjustedCost { layover_rate },
            Algorithm::FloydWarshall => Objective::Time,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Work done by a single run, depending on the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCounters {
    NodesSettled(usize),
    RelaxationPasses(usize),
    MatrixOperations {
        operations: usize,
        matrix_size: usize,
    },
}

impl SearchCounters {
    pub fn from_stats(algorithm: Algorithm, stats: &SearchStats, num_nodes: usize) -> Self {
        match algorithm {
            Algorithm::Dijkstra => SearchCounters::NodesSettled(stats.nodes_settled),
            Algorithm::BellmanFord => SearchCounters::RelaxationPasses(stats.relaxation_passes),
            Algorithm::FloydWarshall => SearchCounters::MatrixOperations {
                operations: stats.operations,
                matrix_size: num_nodes,
            },
        }
    }
}

impl fmt::Display for SearchCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCounters::NodesSettled(n) => write!(f, "{} nodes settled", n),
            SearchCounters::RelaxationPasses(n) => write!(f, "{} relaxation passes", n),
            SearchCounters::MatrixOperations {
                operations,
                matrix_size,
            } => write!(
                f,
                "{} operations on a {}x{} matrix",
                operations, matrix_size, matrix_size
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathDetails {
    pub algorithm: Algorithm,
    pub objective: Objective,
    /// `None` if no path was found
    pub metrics: Option<PathMetrics>,
    pub counters: SearchCounters,
}

/// Path found by one algorithm together with its timing and derived totals.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Source to destination inclusive, empty if unreachable
    pub path: Vec<NodeIndex>,
    /// Objective value at the destination, infinite if unreachable
    pub weight: Weight,
    pub duration: Duration,
    pub details: PathDetails,
}

impl PathResult {
    pub fn new(
        g: &Graph,
        algorithm: Algorithm,
        objective: Objective,
        sp: ShortestPath,
        stats: &SearchStats,
    ) -> Self {
        let metrics = PathMetrics::along(g, &sp.nodes);
        PathResult {
            path: sp.nodes,
            weight: sp.weight,
            duration: stats.elapsed(),
            details: PathDetails {
                algorithm,
                objective,
                metrics,
                counters: SearchCounters::from_stats(algorithm, stats, g.num_nodes()),
            },
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.details.algorithm
    }

    pub fn metrics(&self) -> Option<&PathMetrics> {
        self.details.metrics.as_ref()
    }

    /// Node codes along the path
    pub fn ids<'g>(&self, g: &'g Graph) -> Vec<&'g str> {
        self.path.iter().map(|n| g.id(*n)).collect()
    }

    pub fn execution_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}
