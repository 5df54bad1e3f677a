//! Depth limited Minimax with Alpha-Beta pruning.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::trace;

use crate::error::{self, ErrorKind};
use crate::game::Game;
use crate::search::{Metrics, Primitives, SearchBuilder, UtilityBounds};

/// Adversarial search over any `Game`.
///
/// Holds the game and the search configuration. Every decision call opens a
/// fresh `SearchSession`; the metrics of the most recent call are kept for
/// inspection afterwards.
pub struct AlphaBetaSearch<G: Game> {
    pub(crate) game: G,
    pub(crate) bounds: UtilityBounds,
    pub(crate) primitives: Primitives<G>,
    pub(crate) max_depth: u32,
    pub(crate) stopper: Option<Arc<AtomicBool>>,
    pub(crate) metrics: Metrics,
}

impl<G: Game + 'static> AlphaBetaSearch<G> {
    /// Search `game` with default primitives and a single depth limited pass.
    ///
    /// `util_min` and `util_max` are the worst and best utility values a state
    /// can have for the player searching.
    pub fn new(game: G, util_min: f64, util_max: f64) -> error::Result<Self> {
        SearchBuilder::new(game, util_min, util_max).build()
    }
}

impl<G: Game> AlphaBetaSearch<G> {
    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn bounds(&self) -> UtilityBounds {
        self.bounds
    }

    /// Depth limit at which iterative deepening stops.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Statistics of the most recent decision call.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Static evaluation of `state` for `player`.
    pub fn eval(&self, state: &G::State, player: &G::Player) -> f64 {
        (self.primitives.eval)(&self.game, state, player, self.bounds)
    }

    /// Open a session that searches to `depth_limit` plies.
    pub fn session(&self, depth_limit: u32) -> SearchSession<'_, G> {
        SearchSession {
            search: self,
            depth_limit,
            metrics: Metrics::default(),
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopper
            .as_ref()
            .map_or(false, |stopper| stopper.load(Ordering::Relaxed))
    }
}

/// State of one decision call: the active depth limit and its metrics.
///
/// Properties of Alpha-Beta pruning as implemented here:
/// * Alpha and Beta are passed down by value, each call owns its own bounds.
/// * The maxing node can only raise alpha, the minning node can only lower beta.
/// * A value returned without a cutoff is the exact depth limited minimax value.
/// * A value returned from a beta cutoff is a lower bound of the true value,
///   one from an alpha cutoff is an upper bound.
pub struct SearchSession<'s, G: Game> {
    pub(crate) search: &'s AlphaBetaSearch<G>,
    pub(crate) depth_limit: u32,
    pub(crate) metrics: Metrics,
}

impl<'s, G: Game> SearchSession<'s, G> {
    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub(crate) fn into_metrics(self) -> Metrics {
        self.metrics
    }

    /// Advance the depth limit with the increment primitive.
    pub(crate) fn increment_depth_limit(&mut self) -> error::Result<u32> {
        let next = (self.search.primitives.increment_depth_limit)(self.depth_limit);
        if next <= self.depth_limit {
            return Err((
                ErrorKind::DepthLimitNotIncreased,
                format!("{} -> {}", self.depth_limit, next),
            )
                .into());
        }
        self.depth_limit = next;
        Ok(next)
    }

    /// Value of `state` for `player` when `player` is the side choosing here.
    pub fn max_value(
        &mut self,
        state: &G::State,
        player: &G::Player,
        mut alpha: f64,
        beta: f64,
        ply: u32,
    ) -> error::Result<f64> {
        self.expand(ply)?;
        let Some(actions) = self.children(state, player, ply) else {
            return Ok(self.search.eval(state, player));
        };

        let mut value = f64::NEG_INFINITY;
        for action in &actions {
            let child = self.search.game.result(state, action)?;
            value = value.max(self.min_value(&child, player, alpha, beta, ply + 1)?);

            // Beta cutoff, the minning parent already has something better.
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    /// Value of `state` for `player` when the opponent is the side choosing here.
    pub fn min_value(
        &mut self,
        state: &G::State,
        player: &G::Player,
        alpha: f64,
        mut beta: f64,
        ply: u32,
    ) -> error::Result<f64> {
        self.expand(ply)?;
        let Some(actions) = self.children(state, player, ply) else {
            return Ok(self.search.eval(state, player));
        };

        let mut value = f64::INFINITY;
        for action in &actions {
            let child = self.search.game.result(state, action)?;
            value = value.min(self.max_value(&child, player, alpha, beta, ply + 1)?);

            // Alpha cutoff, the maxing parent already has something better.
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }

    /// Metrics are recorded for every node before anything else happens to it.
    pub(crate) fn expand(&mut self, ply: u32) -> error::Result<()> {
        self.metrics.record(ply);
        if self.search.is_stopped() {
            return Err(ErrorKind::SearchStopped.into());
        }
        Ok(())
    }

    /// Ordered actions to search from `state`, or None if `state` is evaluated statically.
    /// A non-terminal state without actions is treated as terminal.
    pub(crate) fn children(
        &self,
        state: &G::State,
        player: &G::Player,
        ply: u32,
    ) -> Option<Vec<G::Action>> {
        let game = &self.search.game;
        if game.is_terminal(state) || ply >= self.depth_limit {
            return None;
        }

        let actions = game.actions(state);
        if actions.is_empty() {
            trace!(ply, "no actions at non-terminal node");
            return None;
        }
        Some((self.search.primitives.order_actions)(game, state, actions, player, ply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    /// Complete binary tree of depth 2, leaves listed left to right.
    /// State is the node index in heap order, root is 0.
    struct Tree {
        leaves: [f64; 4],
    }

    impl Game for Tree {
        type State = usize;
        type Action = usize;
        type Player = ();

        fn current_player(&self, _: &usize) {}

        fn actions(&self, state: &usize) -> Vec<usize> {
            if *state < 3 {
                vec![2 * state + 1, 2 * state + 2]
            } else {
                Vec::new()
            }
        }

        fn result(&self, _: &usize, action: &usize) -> Result<usize> {
            Ok(*action)
        }

        fn is_terminal(&self, state: &usize) -> bool {
            *state >= 3
        }

        fn utility(&self, state: &usize, _: &()) -> f64 {
            self.leaves[state - 3]
        }
    }

    #[test]
    fn min_value_prunes_second_leaf() {
        // Min node with leaves [3, 5] searched in a window where alpha is already 4:
        // the first leaf, 3, is below alpha so the second is never visited.
        let tree = Tree {
            leaves: [3.0, 5.0, 0.0, 0.0],
        };
        let search = AlphaBetaSearch::new(tree, 0.0, 10.0).unwrap();
        let mut session = search.session(2);
        let value = session.min_value(&1, &(), 4.0, f64::INFINITY, 1).unwrap();

        assert_eq!(value, 3.0);
        assert_eq!(session.metrics().nodes_expanded, 2);
        assert_eq!(session.metrics().max_depth, 2);
    }

    #[test]
    fn max_value_full_tree() {
        // max(min(3, 5), min(2, 9)) = 3, second subtree is cut after leaf 2.
        let tree = Tree {
            leaves: [3.0, 5.0, 2.0, 9.0],
        };
        let search = AlphaBetaSearch::new(tree, 0.0, 10.0).unwrap();
        let mut session = search.session(2);
        let value = session
            .max_value(&0, &(), f64::NEG_INFINITY, f64::INFINITY, 0)
            .unwrap();

        assert_eq!(value, 3.0);
        // root, left min node and both its leaves, right min node and one leaf.
        assert_eq!(session.metrics().nodes_expanded, 6);
    }

    #[test]
    fn depth_limit_evaluates_statically() {
        let tree = Tree {
            leaves: [3.0, 5.0, 2.0, 9.0],
        };
        let search = AlphaBetaSearch::new(tree, 0.0, 10.0).unwrap();
        let mut session = search.session(1);
        let value = session
            .max_value(&0, &(), f64::NEG_INFINITY, f64::INFINITY, 0)
            .unwrap();

        // Both children are cut off by the limit and score the midpoint.
        assert_eq!(value, 5.0);
        assert_eq!(session.metrics().max_depth, 1);
    }

    #[test]
    fn increment_must_grow_limit() {
        let search = SearchBuilder::new(Tree { leaves: [0.0; 4] }, 0.0, 10.0)
            .increment_depth_limit(|limit| limit)
            .build()
            .unwrap();
        let mut session = search.session(0);
        let error = session.increment_depth_limit().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DepthLimitNotIncreased);
    }

    #[test]
    fn stopper_aborts_on_first_node() {
        let stopper = Arc::new(AtomicBool::new(true));
        let search = SearchBuilder::new(Tree { leaves: [0.0; 4] }, 0.0, 10.0)
            .stopper(Arc::clone(&stopper))
            .build()
            .unwrap();
        let mut session = search.session(2);
        let error = session
            .max_value(&0, &(), f64::NEG_INFINITY, f64::INFINITY, 0)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::SearchStopped);
        assert_eq!(session.metrics().nodes_expanded, 1);
    }
}
