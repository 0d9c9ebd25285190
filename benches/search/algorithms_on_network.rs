use airline_data::Dataset;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use route_core::{
    graph::{Graph, NodeIndex},
    objective::Objective,
    params::NetworkParams,
    search::{bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall},
};

criterion_group!(benches, single_source, all_pairs);
criterion_main!(benches);

fn random_queries(g: &Graph, n: usize) -> Vec<(NodeIndex, NodeIndex)> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            (
                NodeIndex::new(rng.gen_range(0..g.num_nodes())),
                NodeIndex::new(rng.gen_range(0..g.num_nodes())),
            )
        })
        .collect()
}

fn single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for dataset in Dataset::all() {
        let g = Graph::from_dataset(dataset, &NetworkParams::default()).unwrap();
        let queries = random_queries(&g, 100);

        group.bench_with_input(BenchmarkId::new("dijkstra", dataset), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                for (s, t) in &queries {
                    let _ = black_box(dijkstra.search(*s, *t));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("bellman_ford", dataset), &g, |b, g| {
            b.iter(|| {
                let mut bellman_ford = BellmanFord::new(g);
                for (s, t) in &queries {
                    let _ = black_box(bellman_ford.search(*s, *t));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("dijkstra_cost", dataset), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::with_objective(g, Objective::adjusted_cost());
                for (s, t) in &queries {
                    let _ = black_box(dijkstra.search(*s, *t));
                }
            })
        });
    }
    group.finish();
}

fn all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");

    for dataset in Dataset::all() {
        let g = Graph::from_dataset(dataset, &NetworkParams::default()).unwrap();

        group.bench_with_input(BenchmarkId::new("floyd_warshall", dataset), &g, |b, g| {
            b.iter(|| black_box(FloydWarshall::new(g).run()))
        });

        group.bench_with_input(BenchmarkId::new("dijkstra_trees", dataset), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::with_objective(g, Objective::Time);
                for s in g.node_indices() {
                    let _ = black_box(dijkstra.tree(s));
                }
            })
        });
    }
    group.finish();
}
