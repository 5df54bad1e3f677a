//! The Game capability.
//!
//! Search never looks inside a state or an action. Everything it knows about a
//! game comes through this trait: who is to move, which actions exist, what
//! an action leads to, whether play is over, and how good a state is.

use crate::error;

/// A two-player, zero-sum, perfect-information game.
///
/// States are treated as immutable snapshots. `result` must produce a new
/// state and leave its input untouched; the player to move is part of the state
/// rather than of the implementing object.
pub trait Game {
    type State: Clone;
    type Action: Clone + PartialEq;
    type Player: Clone + PartialEq;

    /// Returns the player whose turn it is in `state`.
    fn current_player(&self, state: &Self::State) -> Self::Player;

    /// Returns the legal actions for `state` in the game's preferred order.
    /// Empty if there are none.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the state reached by applying `action` to `state`.
    /// Fails if `action` is not legal for `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> error::Result<Self::State>;

    /// True iff no further play is possible from `state`.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Raw score of `state` for `player`.
    fn utility(&self, state: &Self::State, player: &Self::Player) -> f64;

    /// Refined score of `state` for `player`, used when evaluating terminal states.
    fn improved_utility(&self, state: &Self::State, player: &Self::Player) -> f64 {
        self.utility(state, player)
    }
}
