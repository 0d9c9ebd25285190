//! Runs the three algorithms on the same query and collects their results.
//!
//! Each algorithm optimizes its own dimension: Dijkstra the distance,
//! Bellman-Ford the cost including the layover penalty and Floyd-Warshall
//! the travel time. A failing algorithm only affects its own entry.

use std::{collections::BTreeMap, fmt, thread};

use log::{info, warn};
use serde::Serialize;

use crate::{
    constants::{Weight, LAYOVER_RATE},
    error::SearchError,
    graph::{Graph, NodeIndex},
    metrics::PathMetrics,
    objective::Objective,
    params::ComparisonParams,
    result::{Algorithm, PathResult, SearchCounters},
    search::{
        bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::AllPairs,
        floyd_warshall::FloydWarshall,
    },
};

pub type Outcome = Result<PathResult, SearchError>;

/// Dijkstra search for `objective`, which must not produce negative weights
pub fn shortest_path(
    g: &Graph,
    source: NodeIndex,
    target: NodeIndex,
    objective: Objective,
) -> Outcome {
    let mut dijkstra = Dijkstra::with_objective(g, objective);
    let sp = dijkstra.search(source, target)?;
    Ok(PathResult::new(
        g,
        Algorithm::Dijkstra,
        objective,
        sp,
        &dijkstra.stats,
    ))
}

/// Bellman-Ford search for the cheapest cost including the default layover
/// penalty
pub fn cheapest_path(g: &Graph, source: NodeIndex, target: NodeIndex) -> Outcome {
    cheapest_path_with_rate(g, source, target, LAYOVER_RATE)
}

pub fn cheapest_path_with_rate(
    g: &Graph,
    source: NodeIndex,
    target: NodeIndex,
    layover_rate: Weight,
) -> Outcome {
    let objective = Objective::AdjustedCost { layover_rate };
    let mut bellman_ford = BellmanFord::with_objective(g, objective);
    let sp = bellman_ford.search(source, target)?;
    Ok(PathResult::new(
        g,
        Algorithm::BellmanFord,
        objective,
        sp,
        &bellman_ford.stats,
    ))
}

/// Floyd-Warshall for the fastest travel time. Computes the full matrix, use
/// [`all_pairs_fastest`] to answer several queries.
pub fn fastest_path(g: &Graph, source: NodeIndex, target: NodeIndex) -> Outcome {
    let mut floyd_warshall = FloydWarshall::new(g);
    let sp = floyd_warshall.search(source, target)?;
    Ok(PathResult::new(
        g,
        Algorithm::FloydWarshall,
        floyd_warshall.objective(),
        sp,
        &floyd_warshall.stats,
    ))
}

/// Distance and next-hop matrices for the travel time of all pairs
pub fn all_pairs_fastest(g: &Graph) -> AllPairs {
    FloydWarshall::new(g).run()
}

/// Compares the three algorithms on the route `source -> target` with the
/// default parameters.
pub fn run_comparison(g: &Graph, source: &str, target: &str) -> Result<Comparison, SearchError> {
    run_comparison_with(g, source, target, ComparisonParams::default())
}

/// Compares the three algorithms on the route `source -> target`.
///
/// Unknown codes are rejected before any algorithm runs. Otherwise every
/// algorithm has an entry in the result, either its path or its error.
pub fn run_comparison_with(
    g: &Graph,
    source: &str,
    target: &str,
    params: ComparisonParams,
) -> Result<Comparison, SearchError> {
    let s = g.resolve(source)?;
    let t = g.resolve(target)?;

    info!(
        "Comparing routes {} -> {} ({} nodes, {} edges)",
        source,
        target,
        g.num_nodes(),
        g.num_edges()
    );

    let run = |algorithm: Algorithm| -> Outcome {
        match algorithm {
            Algorithm::Dijkstra => shortest_path(g, s, t, Objective::Distance),
            Algorithm::BellmanFord => cheapest_path_with_rate(g, s, t, params.layover_rate),
            Algorithm::FloydWarshall => fastest_path(g, s, t),
        }
    };

    let outcomes: BTreeMap<Algorithm, Outcome> = if params.parallel {
        thread::scope(|scope| {
            let handles: Vec<_> = Algorithm::all()
                .into_iter()
                .map(|algorithm| (algorithm, scope.spawn(move || run(algorithm))))
                .collect();

            handles
                .into_iter()
                .map(|(algorithm, handle)| match handle.join() {
                    Ok(outcome) => (algorithm, outcome),
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    } else {
        Algorithm::all()
            .into_iter()
            .map(|algorithm| (algorithm, run(algorithm)))
            .collect()
    };

    for (algorithm, outcome) in &outcomes {
        if let Err(err) = outcome {
            warn!("{} failed: {}", algorithm, err);
        }
    }

    Ok(Comparison {
        source: s,
        target: t,
        outcomes,
    })
}

/// Outcome of every algorithm for one query
#[derive(Debug, Clone)]
pub struct Comparison {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub outcomes: BTreeMap<Algorithm, Outcome>,
}

impl Comparison {
    pub fn get(&self, algorithm: Algorithm) -> Option<&Outcome> {
        self.outcomes.get(&algorithm)
    }

    pub fn successes(&self) -> impl Iterator<Item = &PathResult> {
        self.outcomes.values().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (Algorithm, &SearchError)> {
        self.outcomes
            .iter()
            .filter_map(|(algorithm, outcome)| outcome.as_ref().err().map(|e| (*algorithm, e)))
    }

    /// Best algorithm per dimension, among the results that found a path.
    /// Ties go to the algorithm reported first.
    pub fn winners(&self) -> Winners {
        let reachable: Vec<(&PathResult, &PathMetrics)> = self
            .successes()
            .filter_map(|result| result.metrics().map(|metrics| (result, metrics)))
            .collect();

        let best = |key: fn(&PathResult, &PathMetrics) -> f64| {
            reachable
                .iter()
                .min_by(|(r1, m1), (r2, m2)| key(r1, m1).total_cmp(&key(r2, m2)))
                .map(|(result, _)| result.algorithm())
        };

        Winners {
            shortest_distance: best(|_, m| m.total_distance),
            fastest_time: best(|_, m| m.total_time),
            cheapest_cost: best(|_, m| m.total_cost),
            fastest_execution: best(|r, _| r.duration.as_secs_f64()),
        }
    }

    /// Serializable summary with node codes instead of indices
    pub fn report(&self, g: &Graph) -> ComparisonReport {
        let results = self
            .outcomes
            .iter()
            .map(|(algorithm, outcome)| AlgorithmReport::new(g, *algorithm, outcome))
            .collect();

        ComparisonReport {
            source: g.id(self.source).to_string(),
            destination: g.id(self.target).to_string(),
            results,
            winners: self.winners(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Winners {
    pub shortest_distance: Option<Algorithm>,
    pub fastest_time: Option<Algorithm>,
    pub cheapest_cost: Option<Algorithm>,
    pub fastest_execution: Option<Algorithm>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub paradigm: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub objective: Option<&'static str>,
    pub path: Vec<String>,
    /// `None` if unreachable or failed
    pub weight: Option<Weight>,
    pub execution_ms: Option<f64>,
    pub metrics: Option<PathMetrics>,
    pub counters: Option<SearchCounters>,
    pub error: Option<String>,
}

impl AlgorithmReport {
    fn new(g: &Graph, algorithm: Algorithm, outcome: &Outcome) -> Self {
        let mut report = AlgorithmReport {
            algorithm,
            paradigm: algorithm.paradigm(),
            time_complexity: algorithm.time_complexity(),
            space_complexity: algorithm.space_complexity(),
            objective: None,
            path: Vec::new(),
            weight: None,
            execution_ms: None,
            metrics: None,
            counters: None,
            error: None,
        };

        match outcome {
            Ok(result) => {
                report.objective = Some(result.details.objective.label());
                report.path = result.ids(g).into_iter().map(String::from).collect();
                report.weight = result.is_reachable().then_some(result.weight);
                report.execution_ms = Some(result.execution_ms());
                report.metrics = result.details.metrics;
                report.counters = Some(result.details.counters);
            }
            Err(err) => report.error = Some(err.to_string()),
        }
        report
    }
}

/// Comparison of one query, ready to be printed or serialized
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub source: String,
    pub destination: String,
    pub results: Vec<AlgorithmReport>,
    pub winners: Winners,
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route {} -> {}", self.source, self.destination)?;
        writeln!(
            f,
            "{:<16}{:<20}{:>12}{:>10}{:>12}{:>6}{:>12}  Path",
            "Algorithm", "Objective", "Distance", "Time", "Cost", "Hops", "Exec [ms]"
        )?;

        for report in &self.results {
            let objective = report.objective.unwrap_or("-");
            match (&report.error, &report.metrics) {
                (Some(err), _) => {
                    writeln!(f, "{:<16}{:<20}error: {}", report.algorithm, objective, err)?
                }
                (None, Some(m)) => writeln!(
                    f,
                    "{:<16}{:<20}{:>12.2}{:>10.2}{:>12.2}{:>6}{:>12.3}  {}",
                    report.algorithm,
                    objective,
                    m.total_distance,
                    m.total_time,
                    m.total_cost,
                    m.hops,
                    report.execution_ms.unwrap_or_default(),
                    report.path.join(" -> ")
                )?,
                (None, None) => writeln!(
                    f,
                    "{:<16}{:<20}no path found",
                    report.algorithm, objective
                )?,
            }
        }

        let name = |winner: Option<Algorithm>| winner.map_or("-", |a| a.name());
        writeln!(f)?;
        writeln!(f, "Shortest distance: {}", name(self.winners.shortest_distance))?;
        writeln!(f, "Fastest time:      {}", name(self.winners.fastest_time))?;
        writeln!(f, "Cheapest cost:     {}", name(self.winners.cheapest_cost))?;
        write!(f, "Fastest execution: {}", name(self.winners.fastest_execution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::is_valid_path;
    use crate::util::test_graphs::*;

    #[test]
    fn compare_simple_graph() {
        let g = generate_simple_graph();
        let comparison = run_comparison(&g, "A", "C").unwrap();

        assert_eq!(comparison.outcomes.len(), 3);
        assert_eq!(comparison.failures().count(), 0);

        let dijkstra = comparison.get(Algorithm::Dijkstra).unwrap().as_ref().unwrap();
        assert_eq!(dijkstra.ids(&g), vec!["A", "B", "C"]);
        assert_eq!(dijkstra.weight, 20.0);

        // Direct edge costs 9 + 0.5 * 50
        let bellman_ford = comparison.get(Algorithm::BellmanFord).unwrap().as_ref().unwrap();
        assert_eq!(bellman_ford.ids(&g), vec!["A", "B", "C"]);
        assert_eq!(bellman_ford.weight, 10.0);

        let floyd_warshall = comparison.get(Algorithm::FloydWarshall).unwrap().as_ref().unwrap();
        assert_eq!(floyd_warshall.ids(&g), vec!["A", "B", "C"]);
        assert_eq!(floyd_warshall.weight, 2.0);
        assert_eq!(
            floyd_warshall.details.counters,
            SearchCounters::MatrixOperations {
                operations: 64,
                matrix_size: 4
            }
        );

        for result in comparison.successes() {
            assert!(is_valid_path(&g, &result.path, comparison.source, comparison.target));
        }
    }

    #[test]
    fn layover_flips_cost_winner() {
        let g = generate_layover_graph();
        let comparison = run_comparison(&g, "A", "C").unwrap();

        let bellman_ford = comparison.get(Algorithm::BellmanFord).unwrap().as_ref().unwrap();
        assert_eq!(bellman_ford.ids(&g), vec!["A", "C"]);

        let winners = comparison.winners();
        assert_eq!(winners.cheapest_cost, Some(Algorithm::BellmanFord));
        assert_eq!(winners.shortest_distance, Some(Algorithm::Dijkstra));
    }

    #[test]
    fn unknown_code_is_rejected() {
        let g = generate_simple_graph();

        assert_eq!(
            run_comparison(&g, "A", "Z").unwrap_err(),
            SearchError::UnknownNode("Z".to_string())
        );
        assert_eq!(
            run_comparison(&g, "X", "A").unwrap_err(),
            SearchError::UnknownNode("X".to_string())
        );
    }

    #[test]
    fn isolated_node_is_unreachable_for_all() {
        let g = generate_simple_graph();
        let comparison = run_comparison(&g, "A", "D").unwrap();

        assert_eq!(comparison.failures().count(), 0);
        for result in comparison.successes() {
            assert!(!result.is_reachable());
            assert_eq!(result.weight, Weight::INFINITY);
            assert!(result.metrics().is_none());
        }
        assert_eq!(comparison.winners(), Winners::default());
    }

    #[test]
    fn negative_cycle_only_fails_bellman_ford() {
        let g = generate_negative_cycle_graph();
        let comparison = run_comparison(&g, "A", "D").unwrap();

        let failures: Vec<_> = comparison.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Algorithm::BellmanFord);
        assert!(matches!(failures[0].1, SearchError::NegativeCycle { .. }));

        assert!(comparison
            .get(Algorithm::Dijkstra)
            .unwrap()
            .as_ref()
            .unwrap()
            .is_reachable());
        assert!(comparison
            .get(Algorithm::FloydWarshall)
            .unwrap()
            .as_ref()
            .unwrap()
            .is_reachable());

        let report = comparison.report(&g);
        let bf = &report.results[1];
        assert_eq!(bf.algorithm, Algorithm::BellmanFord);
        assert!(bf.error.is_some());
        assert!(bf.metrics.is_none());
    }

    #[test]
    fn parallel_matches_sequential() {
        let g = generate_complex_graph();
        let sequential = run_comparison(&g, "A", "K").unwrap();
        let parallel =
            run_comparison_with(&g, "A", "K", ComparisonParams::new().parallel(true)).unwrap();

        for algorithm in Algorithm::all() {
            let s = sequential.get(algorithm).unwrap().as_ref().unwrap();
            let p = parallel.get(algorithm).unwrap().as_ref().unwrap();
            assert_eq!(s.path, p.path);
            assert_eq!(s.weight, p.weight);
            assert_eq!(s.details.metrics, p.details.metrics);
        }
    }

    #[test]
    fn parallel_isolates_negative_cycle() {
        let g = generate_negative_cycle_graph();
        let comparison =
            run_comparison_with(&g, "A", "D", ComparisonParams::new().parallel(true)).unwrap();

        assert_eq!(comparison.outcomes.len(), 3);
        let failures: Vec<_> = comparison.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Algorithm::BellmanFord);
        assert!(matches!(failures[0].1, SearchError::NegativeCycle { .. }));

        for algorithm in [Algorithm::Dijkstra, Algorithm::FloydWarshall] {
            let result = comparison.get(algorithm).unwrap().as_ref().unwrap();
            assert!(result.is_reachable());
        }
    }

    #[test]
    fn layover_rate_is_configurable() {
        let g = generate_simple_graph();
        let comparison =
            run_comparison_with(&g, "A", "C", ComparisonParams::new().layover_rate(0.0)).unwrap();

        let bellman_ford = comparison.get(Algorithm::BellmanFord).unwrap().as_ref().unwrap();
        assert_eq!(bellman_ford.ids(&g), vec!["A", "C"]);
        assert_eq!(bellman_ford.weight, 9.0);
        assert_eq!(
            bellman_ford.details.objective,
            Objective::AdjustedCost { layover_rate: 0.0 }
        );
    }

    #[test]
    fn same_query_twice_gives_same_paths() {
        let g = generate_complex_graph();
        let first = run_comparison(&g, "B", "J").unwrap();
        let second = run_comparison(&g, "B", "J").unwrap();

        for algorithm in Algorithm::all() {
            let a = first.get(algorithm).unwrap().as_ref().unwrap();
            let b = second.get(algorithm).unwrap().as_ref().unwrap();
            assert_eq!(a.path, b.path);
            assert_eq!(a.weight.to_bits(), b.weight.to_bits());
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let g = generate_simple_graph();
        let report = run_comparison(&g, "A", "D").unwrap().report(&g);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["source"], "A");
        assert_eq!(json["destination"], "D");
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
        assert!(json["results"][0]["weight"].is_null());
        assert_eq!(json["results"][0]["algorithm"], "Dijkstra");

        let text = report.to_string();
        assert!(text.contains("no path found"));
    }

    #[test]
    fn all_pairs_reused_for_single_queries() {
        let g = generate_complex_graph();
        let all_pairs = all_pairs_fastest(&g);
        let a = g.node_index("A").unwrap();
        let k = g.node_index("K").unwrap();

        let result = fastest_path(&g, a, k).unwrap();
        assert_eq!(all_pairs.path(a, k).unwrap().nodes, result.path);
        assert_eq!(all_pairs.distance(a, k).unwrap(), result.weight);
    }

    #[test]
    fn cheapest_path_reports_cycle() {
        let g = generate_negative_cycle_graph();
        let a = g.node_index("A").unwrap();
        let d = g.node_index("D").unwrap();

        assert!(cheapest_path(&g, a, d).is_err());
        assert!(shortest_path(&g, a, d, Objective::Time)
            .unwrap()
            .is_reachable());
    }

    #[test]
    fn unknown_index_is_rejected_by_every_algorithm() {
        let g = generate_simple_graph();
        let a = g.node_index("A").unwrap();
        let unknown = NodeIndex::new(42);
        let err = Err(SearchError::UnknownNode("#42".to_string()));

        assert_eq!(shortest_path(&g, a, unknown, Objective::Distance), err);
        assert_eq!(shortest_path(&g, unknown, a, Objective::Distance), err);
        assert_eq!(cheapest_path(&g, a, unknown), err);
        assert_eq!(cheapest_path(&g, unknown, a), err);
        assert_eq!(fastest_path(&g, a, unknown), err);
        assert_eq!(fastest_path(&g, unknown, a), err);
    }
}
