//! Route search over a small, static map of cities.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Build the graph once from (city, city, distance) triples
//! let g = Graph::from_edge_list(&[
//!     ("surabaya", "sidoarjo", 26.0),
//!     ("sidoarjo", "malang", 67.5),
//! ])
//! .expect("valid edge list");
//!
//! // Shortest path between two cities
//! let mut dijkstra = Dijkstra::new(&g);
//! let route = dijkstra
//!     .search(g.index_of("surabaya").unwrap(), g.index_of("malang").unwrap())
//!     .expect("cities are connected");
//! assert_eq!(route.weight, 93.5);
//!
//! // Shortest route visiting every city once, starting from the first city
//! let mut brute_force = BruteForce::new(&g);
//! let tour = brute_force.search().expect("graph has a full route");
//! assert_eq!(tour.nodes.len(), 3);
//! ```
pub mod constants;
pub mod error;
pub mod evaluate;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
