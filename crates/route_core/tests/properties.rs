//! Property tests cross-checking both searches against plain enumeration on
//! small random graphs.
use approx::assert_relative_eq;
use proptest::prelude::*;

use route_core::constants::Weight;
use route_core::graph::{Edge, NodeIndex};
use route_core::prelude::*;

/// Random undirected graph with 2 to 6 cities and a random subset of the
/// possible edges.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (2usize..=6)
        .prop_flat_map(|n| {
            let pairs: Vec<(usize, usize)> = (0..n)
                .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
                .collect();
            let num_pairs = pairs.len();
            (
                Just(n),
                Just(pairs),
                proptest::collection::vec(any::<bool>(), num_pairs),
                proptest::collection::vec(1.0f64..100.0, num_pairs),
            )
        })
        .prop_map(|(n, pairs, included, weights)| {
            let mut g = Graph::new();
            for i in 0..n {
                g.add_node(&format!("c{i}")).unwrap();
            }
            for ((&(i, j), &included), &weight) in pairs.iter().zip(&included).zip(&weights) {
                if included {
                    g.add_edge(Edge::new(node_index(i), node_index(j), weight))
                        .unwrap();
                }
            }
            g
        })
}

/// All simple paths between two cities, by depth-first enumeration.
fn simple_paths(g: &Graph, from: NodeIndex, to: NodeIndex) -> Vec<Vec<NodeIndex>> {
    fn dfs(
        g: &Graph,
        current: NodeIndex,
        to: NodeIndex,
        path: &mut Vec<NodeIndex>,
        seen: &mut Vec<bool>,
        out: &mut Vec<Vec<NodeIndex>>,
    ) {
        if current == to {
            out.push(path.clone());
            return;
        }
        for (next, _) in g.neighbors(current) {
            if !seen[next.index()] {
                seen[next.index()] = true;
                path.push(next);
                dfs(g, next, to, path, seen, out);
                path.pop();
                seen[next.index()] = false;
            }
        }
    }

    let mut out = Vec::new();
    let mut seen = vec![false; g.nodes.len()];
    seen[from.index()] = true;
    dfs(g, from, to, &mut vec![from], &mut seen, &mut out);
    out
}

/// All orderings of the non-start cities, prefixed with the start city.
fn all_full_routes(g: &Graph) -> Vec<Vec<NodeIndex>> {
    fn permute(
        route: &mut Vec<NodeIndex>,
        remaining: &mut Vec<NodeIndex>,
        out: &mut Vec<Vec<NodeIndex>>,
    ) {
        if remaining.is_empty() {
            out.push(route.clone());
            return;
        }
        for i in 0..remaining.len() {
            let node = remaining.remove(i);
            route.push(node);
            permute(route, remaining, out);
            route.pop();
            remaining.insert(i, node);
        }
    }

    let mut out = Vec::new();
    let mut remaining: Vec<NodeIndex> = (1..g.nodes.len()).map(node_index).collect();
    permute(&mut vec![node_index(0)], &mut remaining, &mut out);
    out
}

proptest! {
    #[test]
    fn route_to_self_is_trivial(g in arb_graph(), raw in 0usize..6) {
        let a = node_index(raw % g.nodes.len());

        let mut dijkstra = Dijkstra::new(&g);
        let route = dijkstra.search(a, a).expect("self route always exists");

        prop_assert_eq!(route.nodes, vec![a]);
        prop_assert_eq!(route.weight, 0.0);
    }

    #[test]
    fn cost_is_symmetric(g in arb_graph()) {
        let a = node_index(0);
        let b = node_index(g.nodes.len() - 1);

        let mut dijkstra = Dijkstra::new(&g);
        match (dijkstra.search(a, b), dijkstra.search(b, a)) {
            (Some(forward), Some(backward)) => {
                assert_relative_eq!(forward.weight, backward.weight, epsilon = 1e-9);
            }
            (None, None) => {}
            (forward, backward) => {
                prop_assert!(false, "reachability differs: {:?} vs {:?}", forward, backward);
            }
        }
    }

    #[test]
    fn dijkstra_is_optimal(g in arb_graph()) {
        let a = node_index(0);
        let b = node_index(g.nodes.len() - 1);

        let best_by_enumeration = simple_paths(&g, a, b)
            .iter()
            .map(|path| total_distance(&g, path))
            .fold(Weight::INFINITY, Weight::min);

        let mut dijkstra = Dijkstra::new(&g);
        match dijkstra.search(a, b) {
            Some(route) => {
                assert_relative_eq!(route.weight, best_by_enumeration, epsilon = 1e-9);
                // the returned node sequence really has that cost
                assert_relative_eq!(
                    total_distance(&g, &route.nodes),
                    route.weight,
                    epsilon = 1e-9
                );
            }
            None => prop_assert!(best_by_enumeration.is_infinite()),
        }
    }

    #[test]
    fn brute_force_is_optimal(g in arb_graph()) {
        let best_by_enumeration = all_full_routes(&g)
            .iter()
            .map(|route| total_distance(&g, route))
            .fold(Weight::INFINITY, Weight::min);

        let mut brute_force = BruteForce::new(&g);
        match brute_force.search() {
            Some(route) => {
                prop_assert_eq!(route.nodes[0], node_index(0));

                let mut seen = route.nodes.clone();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), g.nodes.len(), "every city exactly once");

                assert_relative_eq!(route.weight, best_by_enumeration, epsilon = 1e-9);
            }
            None => prop_assert!(best_by_enumeration.is_infinite()),
        }
    }
}
