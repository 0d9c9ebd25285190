use route_core::prelude::*;

fn main() {
    env_logger::init();

    // Build the aviation network, the seed makes fares and layovers reproducible
    let g = Graph::from_dataset(Dataset::Aviation, &NetworkParams::default())
        .expect("Failed to build network");
    g.print_info();

    // Compare all three algorithms on one route
    let comparison = run_comparison(&g, "JFK", "SYD").expect("Unknown airport");
    println!("{}", comparison.report(&g));

    // The all pairs matrix answers further queries without recomputation
    let all_pairs = all_pairs_fastest(&g);
    let s = g.node_index("LHR").expect("LHR is part of the network");
    for code in ["DXB", "SIN", "GRU"] {
        let t = g.node_index(code).expect("Airport is part of the network");
        let path = path_between(all_pairs.next_hop(), s, t)
            .expect("Indices come from the same network")
            .unwrap_or_default();
        let codes: Vec<&str> = path.iter().map(|n| g.id(*n)).collect();
        let hours = all_pairs
            .distance(s, t)
            .expect("Indices come from the same network");
        println!("LHR -> {}: {:.2} h via {:?}", code, hours, codes);
    }
}
