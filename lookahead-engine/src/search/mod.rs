//! Search functions.

mod alpha_beta;
mod builder;
mod ids;
mod metrics;
mod minimax;
mod primitives;

pub use alpha_beta::*;
pub use builder::*;
pub use metrics::*;
pub use primitives::*;

use std::fmt::{self, Debug, Display};
use std::time::Duration;

use crate::moveorder::ActionStore;

/// The results found from running a search on some root state.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// The best action to take in the root state.
    pub best_action: A,
    /// Value of the best action for the root player.
    pub score: f64,
    /// Depth limit of the last completed pass. `u32::MAX` for a search without depth limit.
    pub depth: u32,
    /// Root actions ranked by the values of the last completed pass.
    pub ranking: ActionStore<A>,
    /// Counters of the whole decision call.
    pub metrics: Metrics,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
    /// Flag that indicates this search was aborted.
    pub stopped: bool,
}

impl<A> SearchResult<A> {
    pub(crate) fn new(
        best_action: A,
        score: f64,
        depth: u32,
        ranking: ActionStore<A>,
        stopped: bool,
    ) -> Self {
        Self {
            best_action,
            score,
            depth,
            ranking,
            metrics: Metrics::default(),
            elapsed: Duration::ZERO,
            stopped,
        }
    }

    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.metrics.nodes_expanded as f64 / self.elapsed.as_secs_f64()).round()
    }
}

impl<A: Debug> Display for SearchResult<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    best     : {:?}\n", self.best_action));
        displayed.push_str(&format!("    score    : {}\n", self.score));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.metrics.nodes_expanded));
        displayed.push_str(&format!("    max_depth: {}\n", self.metrics.max_depth));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str(&format!("    stopped  : {}\n", self.stopped));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}
