use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};
use crate::search::route::Route;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node: NodeIndex, weight: Weight) -> Self {
        Self { node, weight }
    }
}

// Reversed ordering turns the max-heap into a min-heap. Equal weights fall
// back to ascending node index so equal-cost routes resolve deterministically.
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight && other.node == self.node
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Single-pair shortest path over the city graph.
///
/// The frontier is a plain binary heap without decrease-key: improving a
/// tentative distance pushes a fresh entry, and entries for already settled
/// nodes are discarded when popped.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<Route> {
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(Route::new(vec![source], 0.0));
        }

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> =
            FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut settled: FxHashSet<NodeIndex> = FxHashSet::default();

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node }) = queue.pop() {
            // Stale entry for an already settled node
            if settled.contains(&node) {
                continue;
            }
            settled.insert(node);
            self.stats.nodes_settled += 1;

            if node == target {
                break;
            }

            for (neighbor, edge_weight) in self.g.neighbors(node) {
                if settled.contains(&neighbor) {
                    continue;
                }
                let new_distance = weight + edge_weight;
                if new_distance
                    < node_data
                        .get(&neighbor)
                        .unwrap_or(&(Weight::INFINITY, None))
                        .0
                {
                    node_data.insert(neighbor, (new_distance, Some(node)));
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        let route = super::reconstruct_path(target, source, &node_data);
        if route.is_some() {
            debug!("Route found: {:?}", route);
            info!(
                "Route found: {:?}/{} nodes settled",
                self.stats.duration.unwrap(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No route found: {:?}/{} nodes settled",
                self.stats.duration.unwrap(),
                self.stats.nodes_settled
            );
        }

        route
    }
}
