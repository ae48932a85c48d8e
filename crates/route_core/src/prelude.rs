//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::Error;
pub use crate::evaluate::total_distance;
pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::search::brute_force::BruteForce;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::route::Route;
pub use crate::util::test_graphs::generate_simple_graph;
