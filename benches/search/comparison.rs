use airline_data::Dataset;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use route_core::{
    comparison::run_comparison_with,
    graph::Graph,
    params::{ComparisonParams, NetworkParams},
};

criterion_group!(benches, comparison);
criterion_main!(benches);

fn comparison(c: &mut Criterion) {
    let g = Graph::from_dataset(Dataset::Aviation, &NetworkParams::default()).unwrap();

    let mut group = c.benchmark_group("comparison");
    for parallel in [false, true] {
        let params = ComparisonParams::new().parallel(parallel);
        group.bench_with_input(
            BenchmarkId::new("JFK_SYD", if parallel { "parallel" } else { "sequential" }),
            &params,
            |b, params| b.iter(|| black_box(run_comparison_with(&g, "JFK", "SYD", *params))),
        );
    }
    group.finish();
}
