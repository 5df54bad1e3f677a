//! Iterative Deepening Search.

use std::time::Instant;

use tracing::debug;

use crate::error::{self, ErrorKind};
use crate::game::Game;
use crate::moveorder::ActionStore;
use crate::search::{AlphaBetaSearch, SearchResult, SearchSession};

impl<G: Game> AlphaBetaSearch<G> {
    /// Pick the best action for the player to move in `state`.
    pub fn make_decision(&mut self, state: &G::State) -> error::Result<G::Action> {
        self.decide(state).map(|result| result.best_action)
    }

    /// Search `state` with iterative deepening and return the full result.
    ///
    /// Each pass raises the depth limit with the increment primitive, evaluates
    /// every root action with full-width bounds, and re-ranks the root actions by
    /// those values for the next pass. Deepening ends once the limit reaches
    /// `max_depth` or the best value is a safe winner. With the default
    /// `max_depth` of 1, exactly one pass is made.
    pub fn decide(&mut self, state: &G::State) -> error::Result<SearchResult<G::Action>> {
        let instant = Instant::now();
        let mut session = self.session(0);
        let outcome = session.deepen(state);
        let metrics = session.into_metrics();
        self.metrics = metrics;

        outcome.map(|mut result| {
            result.metrics = metrics;
            result.elapsed = instant.elapsed();
            result
        })
    }

    /// Pick the best action by searching every line to the end of the game.
    pub fn make_decision_without_depth(&mut self, state: &G::State) -> error::Result<G::Action> {
        self.decide_without_depth(state).map(|result| result.best_action)
    }

    /// Search `state` without a depth limit, with full-width bounds at the root.
    /// The first action with the greatest value is chosen.
    ///
    /// Only practical when the remaining game tree is small.
    pub fn decide_without_depth(
        &mut self,
        state: &G::State,
    ) -> error::Result<SearchResult<G::Action>> {
        let instant = Instant::now();
        let mut session = self.session(0);
        let outcome = session.solve(state);
        let metrics = session.into_metrics();
        self.metrics = metrics;

        outcome.map(|mut result| {
            result.metrics = metrics;
            result.elapsed = instant.elapsed();
            result
        })
    }
}

impl<'s, G: Game> SearchSession<'s, G> {
    fn deepen(&mut self, state: &G::State) -> error::Result<SearchResult<G::Action>> {
        let search = self.search;
        let game = &search.game;
        let player = game.current_player(state);
        self.reject_terminal_root(state, &player)?;

        let mut actions =
            (search.primitives.order_actions)(game, state, game.actions(state), &player, 0);
        if actions.is_empty() {
            return Err((ErrorKind::NoActions, "root state has no actions").into());
        }

        let mut ranking = ActionStore::new();
        let mut score = search.bounds.midpoint();
        let mut depth = 0;
        let mut stopped = false;

        loop {
            let depth_limit = self.increment_depth_limit()?;
            let store = match self.root_pass(state, &player, &actions) {
                Ok(store) => store,
                Err(error) if error.kind() == ErrorKind::SearchStopped => {
                    debug!(depth_limit, "search stopped, discarding partial pass");
                    stopped = true;
                    break;
                }
                Err(error) => return Err(error),
            };

            if let Some((_, value)) = store.first() {
                score = *value;
                actions = store.actions().cloned().collect();
            }
            ranking = store;
            depth = depth_limit;

            debug!(
                depth,
                score,
                nodes = self.metrics.nodes_expanded,
                "completed depth limited pass"
            );

            if depth_limit >= search.max_depth
                || (search.primitives.has_safe_winner)(score, search.bounds)
            {
                break;
            }
        }

        let best_action = actions
            .into_iter()
            .next()
            .ok_or(ErrorKind::NoActions)?;

        Ok(SearchResult::new(best_action, score, depth, ranking, stopped))
    }

    fn solve(&mut self, state: &G::State) -> error::Result<SearchResult<G::Action>> {
        let search = self.search;
        let game = &search.game;
        let player = game.current_player(state);
        self.reject_terminal_root(state, &player)?;
        self.depth_limit = u32::MAX;

        let mut ranking = ActionStore::new();
        for action in game.actions(state) {
            let child = game.result(state, &action)?;
            let value = self.min_value(&child, &player, f64::NEG_INFINITY, f64::INFINITY, 1)?;
            ranking.add(action, value);
        }

        let (best_action, score) = ranking
            .first()
            .cloned()
            .ok_or((ErrorKind::NoActions, "root state has no actions"))?;
        debug!(score, nodes = self.metrics.nodes_expanded, "solved to end of game");

        Ok(SearchResult::new(best_action, score, self.depth_limit, ranking, false))
    }

    /// Evaluate every root action at the current depth limit.
    fn root_pass(
        &mut self,
        state: &G::State,
        player: &G::Player,
        actions: &[G::Action],
    ) -> error::Result<ActionStore<G::Action>> {
        let mut store = ActionStore::with_capacity(actions.len());
        for action in actions {
            let child = self.search.game.result(state, action)?;
            let value = self.min_value(&child, player, f64::NEG_INFINITY, f64::INFINITY, 1)?;
            store.add(action.clone(), value);
        }
        Ok(store)
    }

    /// A terminal root is evaluated once, then rejected since it has no action to return.
    /// Expects the depth limit to still be 0.
    fn reject_terminal_root(&mut self, state: &G::State, player: &G::Player) -> error::Result<()> {
        if !self.search.game.is_terminal(state) {
            return Ok(());
        }

        let value = self.max_value(state, player, f64::NEG_INFINITY, f64::INFINITY, 0)?;
        Err((
            ErrorKind::TerminalState,
            format!("root state is terminal with value {value}"),
        )
            .into())
    }
}
