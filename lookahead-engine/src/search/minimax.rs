//! Minimax implementation.

use crate::error;
use crate::game::Game;
use crate::search::SearchSession;

impl<'s, G: Game> SearchSession<'s, G> {
    /// Full-width depth limited minimax without pruning.
    ///
    /// Visits every node alpha-beta would visit with an infinitely wide window,
    /// using the same evaluation and ordering primitives. `maxing` is true when
    /// the root player chooses at `state`. Useful as a reference for
    /// `max_value` and `min_value`, which must agree with it.
    pub fn minimax_value(
        &mut self,
        state: &G::State,
        player: &G::Player,
        ply: u32,
        maxing: bool,
    ) -> error::Result<f64> {
        self.expand(ply)?;
        let Some(actions) = self.children(state, player, ply) else {
            return Ok(self.search.eval(state, player));
        };

        let mut best = if maxing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for action in &actions {
            let child = self.search.game.result(state, action)?;
            let value = self.minimax_value(&child, player, ply + 1, !maxing)?;
            best = if maxing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        Ok(best)
    }
}
