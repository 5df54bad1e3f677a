//! Primitive operations of the search.
//!
//! The driver and evaluator call out to four replaceable operations: how the
//! depth limit grows between passes, how a state is evaluated when recursion
//! stops, how actions are ordered before being searched, and when deepening
//! may stop early because the outcome is already decided. Each is a boxed
//! function so callers can swap any of them without touching the search.

use std::fmt;

use crate::error::{self, ErrorKind};
use crate::game::Game;

/// Worst and best utility values for the root player.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UtilityBounds {
    pub min: f64,
    pub max: f64,
}

impl UtilityBounds {
    /// Bounds must be finite with `min < max`.
    pub fn new(min: f64, max: f64) -> error::Result<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Self { min, max })
        } else {
            Err((ErrorKind::InvalidBounds, format!("min {min}, max {max}")).into())
        }
    }

    /// Neutral estimate for a state that is neither won nor lost.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

pub type IncrementDepthLimitFn = Box<dyn Fn(u32) -> u32>;
pub type EvalFn<G> =
    Box<dyn Fn(&G, &<G as Game>::State, &<G as Game>::Player, UtilityBounds) -> f64>;
pub type OrderActionsFn<G> = Box<
    dyn Fn(
        &G,
        &<G as Game>::State,
        Vec<<G as Game>::Action>,
        &<G as Game>::Player,
        u32,
    ) -> Vec<<G as Game>::Action>,
>;
pub type HasSafeWinnerFn = Box<dyn Fn(f64, UtilityBounds) -> bool>;

/// The replaceable operations used by `AlphaBetaSearch`.
pub struct Primitives<G: Game> {
    /// Called at the start of each depth limited pass with the current limit,
    /// returns the next limit. Must return a greater value.
    pub increment_depth_limit: IncrementDepthLimitFn,
    /// Estimates a state's value for the root player.
    pub eval: EvalFn<G>,
    /// Orders actions before they are searched. Receives the state, its actions,
    /// the root player and the ply of the node.
    pub order_actions: OrderActionsFn<G>,
    /// Returns true when the value of the preferred root action decides the game.
    pub has_safe_winner: HasSafeWinnerFn,
}

impl<G: Game + 'static> Default for Primitives<G> {
    fn default() -> Self {
        Self {
            increment_depth_limit: Box::new(increment_by_one),
            eval: Box::new(default_eval::<G>),
            order_actions: Box::new(preserve_order::<G>),
            has_safe_winner: Box::new(extreme_value),
        }
    }
}

impl<G: Game> fmt::Debug for Primitives<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Primitives").finish_non_exhaustive()
    }
}

/// Grows the depth limit by one ply.
pub fn increment_by_one(depth_limit: u32) -> u32 {
    depth_limit.saturating_add(1)
}

/// Terminal states are worth the game's improved utility for `player`.
/// Anything else is worth the midpoint of `bounds`.
///
/// Custom evaluators should defer to this for terminal states.
pub fn default_eval<G: Game>(
    game: &G,
    state: &G::State,
    player: &G::Player,
    bounds: UtilityBounds,
) -> f64 {
    if game.is_terminal(state) {
        game.improved_utility(state, player)
    } else {
        bounds.midpoint()
    }
}

/// Keeps the order the game produced.
pub fn preserve_order<G: Game>(
    _game: &G,
    _state: &G::State,
    actions: Vec<G::Action>,
    _player: &G::Player,
    _ply: u32,
) -> Vec<G::Action> {
    actions
}

/// A value at or beyond either bound cannot be improved on by searching deeper.
pub fn extreme_value(value: f64, bounds: UtilityBounds) -> bool {
    value <= bounds.min || value >= bounds.max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_validation() {
        assert!(UtilityBounds::new(0.0, 100.0).is_ok());

        for (min, max) in [(1.0, 1.0), (5.0, -5.0), (f64::NEG_INFINITY, 0.0), (0.0, f64::NAN)] {
            let error = UtilityBounds::new(min, max).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidBounds);
        }
    }

    #[test]
    fn midpoint_and_safe_winner() {
        let bounds = UtilityBounds::new(0.0, 100.0).unwrap();
        assert_eq!(bounds.midpoint(), 50.0);
        assert!(bounds.contains(0.0));
        assert!(!bounds.contains(100.5));

        assert!(extreme_value(0.0, bounds));
        assert!(extreme_value(120.0, bounds));
        assert!(!extreme_value(50.0, bounds));
    }

    #[test]
    fn increment_saturates() {
        assert_eq!(increment_by_one(0), 1);
        assert_eq!(increment_by_one(u32::MAX), u32::MAX);
    }
}
