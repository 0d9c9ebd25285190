//! Re-exports of the most commonly used items in `route_core`.
pub use crate::comparison::{
    all_pairs_fastest, cheapest_path, fastest_path, run_comparison, run_comparison_with,
    shortest_path, Comparison,
};
pub use crate::error::SearchError;
pub use crate::objective::Objective;
pub use crate::params::{ComparisonParams, NetworkParams};
pub use crate::result::{Algorithm, PathResult};

pub use crate::search;
pub use crate::search::floyd_warshall::path_between;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::util::test_graphs::generate_simple_graph;

pub use airline_data::Dataset;
