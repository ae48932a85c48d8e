//! Small fixture graphs shared by unit, integration and property tests.
use crate::graph::Graph;

/// Triangle with a cheap shortcut: the direct a-c edge undercuts the a-b-c
/// detour.
pub fn graph_triangle() -> Graph {
    Graph::from_edge_list(&[("a", "b", 10.0), ("b", "c", 10.0), ("a", "c", 5.0)])
        .expect("valid edge list")
}

/// Connected 6-city graph with distinct route costs.
pub fn generate_simple_graph() -> Graph {
    Graph::from_edge_list(&[
        ("a", "b", 3.0),
        ("a", "c", 5.0),
        ("b", "c", 3.0),
        ("b", "d", 5.0),
        ("c", "d", 2.0),
        ("c", "e", 2.0),
        ("d", "e", 4.0),
        ("d", "f", 7.0),
        ("e", "f", 6.0),
    ])
    .expect("valid edge list")
}
