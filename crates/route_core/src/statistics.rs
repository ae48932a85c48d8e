use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Counters shared by both searches. `nodes_settled` counts Dijkstra
/// finalizations, `routes_evaluated` counts scored orderings in the
/// exhaustive search.
#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub routes_evaluated: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.routes_evaluated = 0;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.routes_evaluated > 0 {
            write!(
                f,
                "Stats: {} routes evaluated in {:?}",
                self.routes_evaluated, self.duration
            )
        } else {
            write!(
                f,
                "Stats: {} nodes settled in {:?}",
                self.nodes_settled, self.duration
            )
        }
    }
}
