//! Randomized cross-checks between the algorithms

use airline_data::Dataset;
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use crate::{
    comparison::run_comparison,
    constants::Weight,
    graph::{node_index, Edge, EdgeAttributes, Graph, Node, NodeIndex},
    objective::Objective,
    params::NetworkParams,
    result::Algorithm,
    search::{
        bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
        is_valid_path,
    },
};

const NUM_NODES: usize = 6;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random directed graph on [`NUM_NODES`] nodes with positive weights
fn random_graph() -> impl Strategy<Value = Graph> {
    let edge = (
        0..NUM_NODES,
        0..NUM_NODES,
        1u32..100,
        1u32..20,
        1u32..200,
        prop::sample::select(vec![0.0, 0.5, 1.5, 3.0]),
    );

    prop::collection::vec(edge, 0..20).prop_map(|edges| {
        let mut g = Graph::new();
        for i in 0..NUM_NODES {
            g.add_node(Node::new(i.to_string()));
        }
        for (s, t, distance, time, cost, layover) in edges {
            let attrs = EdgeAttributes::new(
                distance as Weight,
                time as Weight + layover,
                cost as Weight,
                layover,
            );
            g.add_edge(Edge::new(node_index(s), node_index(t), attrs));
        }
        g
    })
}

/// Minimum weight over all simple paths, found by exhaustive search
fn brute_force(g: &Graph, objective: Objective, source: NodeIndex, target: NodeIndex) -> Weight {
    fn visit(
        g: &Graph,
        objective: Objective,
        current: NodeIndex,
        target: NodeIndex,
        weight: Weight,
        visited: &mut Vec<NodeIndex>,
        best: &mut Weight,
    ) {
        if current == target {
            *best = best.min(weight);
            return;
        }
        for edge in g.neighbors_outgoing(current) {
            if visited.contains(&edge.target) {
                continue;
            }
            visited.push(edge.target);
            visit(
                g,
                objective,
                edge.target,
                target,
                weight + objective.weight(&edge.attrs),
                visited,
                best,
            );
            visited.pop();
        }
    }

    let mut best = Weight::INFINITY;
    visit(g, objective, source, target, 0.0, &mut vec![source], &mut best);
    best
}

fn objectives() -> [Objective; 3] {
    [
        Objective::Distance,
        Objective::Time,
        Objective::adjusted_cost(),
    ]
}

#[test]
fn dijkstra_matches_brute_force() {
    init_log();
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(random_graph(), 0..NUM_NODES, 0..NUM_NODES), |(g, s, t)| {
            let (s, t) = (node_index(s), node_index(t));
            for objective in objectives() {
                let sp = Dijkstra::with_objective(&g, objective).search(s, t).unwrap();
                let expected = brute_force(&g, objective, s, t);

                if expected == Weight::INFINITY {
                    prop_assert!(!sp.is_reachable());
                } else {
                    assert_abs_diff_eq!(sp.weight, expected, epsilon = 1e-9);
                    prop_assert!(is_valid_path(&g, &sp.nodes, s, t));
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn bellman_ford_agrees_with_dijkstra() {
    init_log();
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(random_graph(), 0..NUM_NODES, 0..NUM_NODES), |(g, s, t)| {
            let (s, t) = (node_index(s), node_index(t));
            for objective in objectives() {
                let bf = BellmanFord::with_objective(&g, objective)
                    .search(s, t)
                    .unwrap();
                let dijkstra = Dijkstra::with_objective(&g, objective).search(s, t).unwrap();

                prop_assert_eq!(bf.is_reachable(), dijkstra.is_reachable());
                if bf.is_reachable() {
                    assert_abs_diff_eq!(bf.weight, dijkstra.weight, epsilon = 1e-9);
                    prop_assert!(is_valid_path(&g, &bf.nodes, s, t));
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn floyd_warshall_agrees_with_dijkstra() {
    init_log();
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&random_graph(), |g| {
            let all_pairs = FloydWarshall::new(&g).run();
            for s in g.node_indices() {
                let tree = Dijkstra::with_objective(&g, Objective::Time).tree(s).unwrap();
                for t in g.node_indices() {
                    let expected = tree.weight(t);
                    let sp = all_pairs.path(s, t).unwrap();
                    if expected == Weight::INFINITY {
                        prop_assert!(!sp.is_reachable());
                    } else {
                        assert_abs_diff_eq!(sp.weight, expected, epsilon = 1e-9);
                        prop_assert!(is_valid_path(&g, &sp.nodes, s, t));
                    }
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn comparison_on_aviation_network() {
    init_log();
    let g = Graph::from_dataset(Dataset::Aviation, &NetworkParams::default()).unwrap();
    let all_pairs = FloydWarshall::new(&g).run();
    let codes: Vec<String> = g.nodes().map(|n| n.id.clone()).collect();

    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0..codes.len(), 0..codes.len()), |(a, b)| {
            let comparison = run_comparison(&g, &codes[a], &codes[b]).unwrap();
            prop_assert_eq!(comparison.failures().count(), 0);

            for result in comparison.successes() {
                prop_assert!(result.is_reachable());
                prop_assert!(is_valid_path(
                    &g,
                    &result.path,
                    comparison.source,
                    comparison.target
                ));
            }

            let floyd_warshall = comparison
                .get(Algorithm::FloydWarshall)
                .unwrap()
                .as_ref()
                .unwrap();
            assert_abs_diff_eq!(
                floyd_warshall.weight,
                all_pairs
                    .distance(comparison.source, comparison.target)
                    .unwrap(),
                epsilon = 1e-9
            );

            // Every algorithm is best in its own dimension
            let distance = |algorithm: Algorithm| {
                let result = comparison.get(algorithm).unwrap().as_ref().unwrap();
                result.metrics().unwrap().total_distance
            };
            prop_assert!(
                distance(Algorithm::Dijkstra) <= distance(Algorithm::BellmanFord) + 1e-9
            );
            prop_assert!(
                distance(Algorithm::Dijkstra) <= distance(Algorithm::FloydWarshall) + 1e-9
            );
            Ok(())
        })
        .unwrap();
}
