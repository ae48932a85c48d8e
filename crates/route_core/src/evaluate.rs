use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};

/// Total distance of an ordered city sequence.
///
/// Every consecutive pair must be a direct edge; the first missing edge makes
/// the whole route infeasible and the result is `Weight::INFINITY`, no
/// partial sum. Empty and single-city routes cost 0.
pub fn total_distance(g: &Graph, route: &[NodeIndex]) -> Weight {
    let mut distance = 0.0;
    for pair in route.windows(2) {
        match g.edge_weight(pair[0], pair[1]) {
            Some(weight) => distance += weight,
            None => return Weight::INFINITY,
        }
    }
    distance
}
