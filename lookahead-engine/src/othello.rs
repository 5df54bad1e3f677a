//! Othello as a `Game`, plus search primitives tuned for it.

use std::cmp::Reverse;

use crate::coretypes::{Color, Move, Square};
use crate::error;
use crate::game::Game;
use crate::position::Position;
use crate::search::{default_eval, UtilityBounds};

pub const CORNER_WEIGHT: u32 = 10;
pub const EDGE_WEIGHT: u32 = 2;
pub const INTERIOR_WEIGHT: u32 = 1;

/// Lowest improved utility, a player without discs.
pub const UTIL_MIN: f64 = 0.0;
/// Highest improved utility, a player owning every square.
pub const UTIL_MAX: f64 = (4 * CORNER_WEIGHT + 24 * EDGE_WEIGHT + 36 * INTERIOR_WEIGHT) as f64;

/// Rules of Othello. Holds no state, the side to move lives in `Position`.
#[derive(Debug, Default, Copy, Clone)]
pub struct Othello;

impl Othello {
    /// Value of owning `square`.
    pub fn weight(square: Square) -> u32 {
        if square.is_corner() {
            CORNER_WEIGHT
        } else if square.is_edge() {
            EDGE_WEIGHT
        } else {
            INTERIOR_WEIGHT
        }
    }

    /// Sum of square weights over all discs of `color`.
    pub fn weighted_discs(position: &Position, color: Color) -> u32 {
        let discs = position.discs(color);
        Square::iter()
            .filter(|square| discs & square.bit() != 0)
            .map(Self::weight)
            .sum()
    }
}

impl Game for Othello {
    type State = Position;
    type Action = Move;
    type Player = Color;

    fn current_player(&self, state: &Position) -> Color {
        state.side_to_move()
    }

    fn actions(&self, state: &Position) -> Vec<Move> {
        state.legal_moves().to_vec()
    }

    fn result(&self, state: &Position, action: &Move) -> error::Result<Position> {
        state.do_move(*action)
    }

    fn is_terminal(&self, state: &Position) -> bool {
        state.is_game_over()
    }

    fn utility(&self, state: &Position, player: &Color) -> f64 {
        state.count(*player) as f64
    }

    fn improved_utility(&self, state: &Position, player: &Color) -> f64 {
        Self::weighted_discs(state, *player) as f64
    }
}

/// Evaluates unfinished games by the player's share of the weighted discs,
/// scaled into `bounds`. Finished games are scored as `default_eval` does.
pub fn heuristic_eval(
    game: &Othello,
    state: &Position,
    player: &Color,
    bounds: UtilityBounds,
) -> f64 {
    if game.is_terminal(state) {
        return default_eval(game, state, player, bounds);
    }

    let own = Othello::weighted_discs(state, *player) as f64;
    let opponent = Othello::weighted_discs(state, player.opposite()) as f64;
    if own + opponent == 0.0 {
        return bounds.midpoint();
    }
    bounds.min + (bounds.max - bounds.min) * own / (own + opponent)
}

/// Searches heavier squares first. Moves of equal weight keep their order.
pub fn order_corners_first(
    _game: &Othello,
    _state: &Position,
    mut actions: Vec<Move>,
    _player: &Color,
    _ply: u32,
) -> Vec<Move> {
    actions.sort_by_key(|action| match action {
        Move::Place(square) => Reverse(Othello::weight(*square)),
        Move::Pass => Reverse(0),
    });
    actions
}
