//! Crate to compare shortest path algorithms on a transport network.
//!
//! Every algorithm optimizes a different edge attribute: Dijkstra the
//! distance, Bellman-Ford the cost including a layover penalty and
//! Floyd-Warshall the travel time.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Build the aviation network with a fixed seed
//! let g = Graph::from_dataset(Dataset::Aviation, &NetworkParams::default())
//!     .expect("Failed to build network");
//!
//! // Run all three algorithms on the same route
//! let comparison = run_comparison(&g, "JFK", "LHR").expect("Unknown airport");
//!
//! for result in comparison.successes() {
//!     println!("{}: {:?}", result.algorithm(), result.ids(&g));
//! }
//!```
//! [`Graph`]: crate::graph::Graph
pub mod comparison;
pub mod constants;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod network;
pub mod objective;
pub mod params;
pub mod prelude;
pub(crate) mod priority_queue;
pub mod result;
pub mod search;
pub mod statistics;
pub mod util;

#[cfg(test)]
mod properties;
