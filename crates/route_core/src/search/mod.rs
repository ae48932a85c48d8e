use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

use self::route::Route;

pub mod brute_force;
pub mod dijkstra;
pub mod route;

pub(crate) fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<Route> {
    let mut path = vec![target];
    let weight = node_data.get(&target)?.0;

    let mut previous_node = node_data.get(&target)?.1?;

    while let Some(prev_node) = node_data.get(&previous_node)?.1 {
        path.push(previous_node);
        previous_node = prev_node;
    }
    path.push(source);
    path.reverse();
    Some(Route::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_route(
    g: &crate::graph::Graph,
    cities: &[&str],
    weight: Weight,
    route: Option<Route>,
) {
    let route = route.expect("expected a route");
    let expected: Vec<NodeIndex> = cities.iter().map(|n| g.index_of(n).unwrap()).collect();
    assert_eq!(route.nodes, expected);
    assert_eq!(route.weight, weight);
}

#[cfg(test)]
pub(crate) fn assert_no_route(route: Option<Route>) {
    assert!(route.is_none(), "expected no route, got {:?}", route);
}
