//! Configuration of an `AlphaBetaSearch`.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error;
use crate::game::Game;
use crate::search::{AlphaBetaSearch, Metrics, Primitives, UtilityBounds};

/// SearchBuilder collects the parameters of a search and validates them once.
///
/// Default values:
///
/// * `primitives`: `Primitives::default()`
/// * `max_depth`: 1, a single depth limited pass per decision
/// * `stopper`: none
pub struct SearchBuilder<G: Game> {
    game: G,
    util_min: f64,
    util_max: f64,
    primitives: Primitives<G>,
    max_depth: u32,
    stopper: Option<Arc<AtomicBool>>,
}

impl<G: Game + 'static> SearchBuilder<G> {
    pub fn new(game: G, util_min: f64, util_max: f64) -> Self {
        Self {
            game,
            util_min,
            util_max,
            primitives: Primitives::default(),
            max_depth: 1,
            stopper: None,
        }
    }
}

impl<G: Game> SearchBuilder<G> {
    /// Create the search. Fails if the utility bounds are unusable.
    pub fn build(self) -> error::Result<AlphaBetaSearch<G>> {
        let bounds = UtilityBounds::new(self.util_min, self.util_max)?;

        Ok(AlphaBetaSearch {
            game: self.game,
            bounds,
            primitives: self.primitives,
            max_depth: self.max_depth,
            stopper: self.stopper,
            metrics: Metrics::default(),
        })
    }

    /// Keep deepening until the depth limit reaches `max_depth`. Values below 1 are raised to 1.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Abort the search as soon as `stopper` is set.
    pub fn stopper(mut self, stopper: Arc<AtomicBool>) -> Self {
        self.stopper = Some(stopper);
        self
    }

    /// Replace all primitive operations at once.
    pub fn primitives(mut self, primitives: Primitives<G>) -> Self {
        self.primitives = primitives;
        self
    }

    pub fn increment_depth_limit<F>(mut self, increment_depth_limit: F) -> Self
    where
        F: Fn(u32) -> u32 + 'static,
    {
        self.primitives.increment_depth_limit = Box::new(increment_depth_limit);
        self
    }

    pub fn eval<F>(mut self, eval: F) -> Self
    where
        F: Fn(&G, &G::State, &G::Player, UtilityBounds) -> f64 + 'static,
    {
        self.primitives.eval = Box::new(eval);
        self
    }

    pub fn order_actions<F>(mut self, order_actions: F) -> Self
    where
        F: Fn(&G, &G::State, Vec<G::Action>, &G::Player, u32) -> Vec<G::Action> + 'static,
    {
        self.primitives.order_actions = Box::new(order_actions);
        self
    }

    pub fn has_safe_winner<F>(mut self, has_safe_winner: F) -> Self
    where
        F: Fn(f64, UtilityBounds) -> bool + 'static,
    {
        self.primitives.has_safe_winner = Box::new(has_safe_winner);
        self
    }
}
