//! Search statistics for a single decision call.

use std::fmt::{self, Display};

/// Name of the expanded node counter.
pub const METRICS_NODES_EXPANDED: &str = "nodesExpanded";
/// Name of the maximum depth counter.
pub const METRICS_MAX_DEPTH: &str = "maxDepth";

/// Counters recorded while searching.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Metrics {
    /// Number of evaluator calls, including terminal and depth limited nodes.
    pub nodes_expanded: u64,
    /// Greatest ply any evaluator call was made at.
    pub max_depth: u32,
}

impl Metrics {
    /// Record one node expansion at `ply`.
    pub(crate) fn record(&mut self, ply: u32) {
        self.nodes_expanded += 1;
        self.max_depth = self.max_depth.max(ply);
    }

    /// Look up a counter by name.
    pub fn get(&self, name: &str) -> Option<u64> {
        match name {
            METRICS_NODES_EXPANDED => Some(self.nodes_expanded),
            METRICS_MAX_DEPTH => Some(u64::from(self.max_depth)),
            _ => None,
        }
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}={} {}={}",
            METRICS_NODES_EXPANDED, self.nodes_expanded, METRICS_MAX_DEPTH, self.max_depth
        )
    }
}
