use crate::constants::Weight;
use crate::evaluate::total_distance;
use crate::graph::{node_index, Graph, NodeIndex};
use crate::search::route::Route;
use crate::statistics::SearchStats;
use log::info;

/// Exhaustive search for the shortest open route visiting every city exactly
/// once, starting from the first city added to the graph. No return to the
/// start is required.
///
/// Every permutation of the remaining cities is scored, (n-1)! in total, so
/// this is only viable for small graphs. Orderings are enumerated in
/// ascending-index (lexicographic) order and a strict improvement is required
/// to replace the incumbent, so the first ordering of a tied weight wins.
pub struct BruteForce<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> BruteForce<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        BruteForce {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self) -> Option<Route> {
        self.stats.init();

        if self.g.nodes.is_empty() {
            self.stats.finish();
            return None;
        }

        let start = node_index(0);
        if self.g.nodes.len() == 1 {
            self.stats.routes_evaluated += 1;
            self.stats.finish();
            return Some(Route::new(vec![start], 0.0));
        }

        let mut route = Vec::with_capacity(self.g.nodes.len());
        route.push(start);
        let mut remaining: Vec<NodeIndex> = (1..self.g.nodes.len()).map(node_index).collect();

        let mut best: Option<Route> = None;
        self.visit_orderings(&mut route, &mut remaining, &mut best);

        self.stats.finish();
        if let Some(route) = &best {
            info!(
                "Best of {} orderings found in {:?}: {:?}",
                self.stats.routes_evaluated,
                self.stats.duration.unwrap(),
                route
            );
        } else {
            info!(
                "No feasible ordering among {}, searched in {:?}",
                self.stats.routes_evaluated,
                self.stats.duration.unwrap()
            );
        }

        best
    }

    fn visit_orderings(
        &mut self,
        route: &mut Vec<NodeIndex>,
        remaining: &mut Vec<NodeIndex>,
        best: &mut Option<Route>,
    ) {
        if remaining.is_empty() {
            let weight = total_distance(self.g, route);
            self.stats.routes_evaluated += 1;

            let incumbent = best.as_ref().map_or(Weight::INFINITY, |r| r.weight);
            if weight < incumbent {
                *best = Some(Route::new(route.clone(), weight));
            }
            return;
        }

        for i in 0..remaining.len() {
            let node = remaining.remove(i);
            route.push(node);
            self.visit_orderings(route, remaining, best);
            route.pop();
            remaining.insert(i, node);
        }
    }
}
