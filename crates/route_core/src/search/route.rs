use crate::{constants::Weight, graph::NodeIndex};

/// A found route: the visited cities in order and the summed distance.
/// "No route exists" is represented by the searches returning `None`.
#[derive(Debug, PartialEq, Clone)]
pub struct Route {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl Route {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        Route { nodes, weight }
    }
}
