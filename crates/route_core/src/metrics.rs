use serde::Serialize;

use crate::{
    constants::{Weight, FUEL_COST_PER_KM},
    graph::{Graph, NodeIndex},
};

/// Totals along a path, independent of the objective the path was found for
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PathMetrics {
    pub total_distance: Weight,
    pub total_time: Weight,
    /// Raw ticket cost, without layover penalty
    pub total_cost: Weight,
    pub total_layover: Weight,
    pub fuel_cost: Weight,
    pub hops: usize,
}

impl PathMetrics {
    /// Sums the edge attributes along `nodes`.
    ///
    /// Returns `None` for an empty path or if two consecutive nodes are not
    /// connected by an edge.
    pub fn along(g: &Graph, nodes: &[NodeIndex]) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }

        let mut metrics = PathMetrics::default();
        for pair in nodes.windows(2) {
            let attrs = g.edge(pair[0], pair[1])?;
            metrics.total_distance += attrs.distance;
            metrics.total_time += attrs.time;
            metrics.total_cost += attrs.cost;
            metrics.total_layover += attrs.layover;
        }
        metrics.fuel_cost = metrics.total_distance * FUEL_COST_PER_KM;
        metrics.hops = nodes.len() - 1;

        Some(metrics)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::util::test_graphs::generate_simple_graph;

    #[test]
    fn sums_all_attributes() {
        let g = generate_simple_graph();
        let a = g.node_index("A").unwrap();
        let b = g.node_index("B").unwrap();
        let c = g.node_index("C").unwrap();

        let m = PathMetrics::along(&g, &[a, b, c]).unwrap();
        assert_relative_eq!(m.total_distance, 20.0);
        assert_relative_eq!(m.total_time, 2.0);
        assert_relative_eq!(m.total_cost, 10.0);
        assert_relative_eq!(m.total_layover, 0.0);
        assert_relative_eq!(m.fuel_cost, 2.4);
        assert_eq!(m.hops, 2);

        let m = PathMetrics::along(&g, &[a, c]).unwrap();
        assert_relative_eq!(m.total_cost, 9.0);
        assert_relative_eq!(m.total_layover, 0.5);
        assert_eq!(m.hops, 1);
    }

    #[test]
    fn single_node_path_is_empty_trip() {
        let g = generate_simple_graph();
        let a = g.node_index("A").unwrap();

        assert_eq!(PathMetrics::along(&g, &[a]), Some(PathMetrics::default()));
    }

    #[test]
    fn rejects_missing_edges() {
        let g = generate_simple_graph();
        let a = g.node_index("A").unwrap();
        let c = g.node_index("C").unwrap();

        assert_eq!(PathMetrics::along(&g, &[]), None);
        assert_eq!(PathMetrics::along(&g, &[c, a]), None);
    }
}
