//! Decisions
//!
//! Root level behavior of the iterative deepening driver: which action is
//! chosen, how deepening ends, and how edge cases at the root are reported.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use common::{TreeGame, UTIL_MAX, UTIL_MIN};
use lookahead_engine::error::ErrorKind;
use lookahead_engine::search::{METRICS_MAX_DEPTH, METRICS_NODES_EXPANDED};
use lookahead_engine::*;

fn searcher(tree: TreeGame) -> AlphaBetaSearch<TreeGame> {
    AlphaBetaSearch::new(tree, UTIL_MIN, UTIL_MAX).unwrap()
}

/// Root with two interior children:
/// node 1 leads to leaves [10, 90], node 4 leads to leaves [40, 60].
fn two_replies() -> TreeGame {
    let mut tree = TreeGame::new();
    let a = tree.branch(0);
    tree.leaf(a, 10.0);
    tree.leaf(a, 90.0);
    let b = tree.branch(0);
    tree.leaf(b, 40.0);
    tree.leaf(b, 60.0);
    tree
}

#[test]
fn first_best_action_wins_ties() {
    // Actions A, B, C, D are nodes 1 to 4.
    let mut search = searcher(TreeGame::flat(&[10.0, 30.0, 20.0, 30.0]));
    let result = search.decide(&0).unwrap();

    assert_eq!(result.best_action, 2);
    assert_eq!(result.score, 30.0);
    assert_eq!(result.depth, 1);
    assert_eq!(result.ranking.len(), 4);
    assert_eq!(result.ranking.actions().copied().collect::<Vec<_>>(), [2, 4, 3, 1]);
    assert!(!result.stopped);

    assert_eq!(result.metrics.nodes_expanded, 4);
    assert_eq!(result.metrics.max_depth, 1);
    assert_eq!(search.metrics(), &result.metrics);
    assert_eq!(search.make_decision(&0).unwrap(), 2);
}

#[test]
fn metrics_by_name_reset_per_call() {
    let mut search = searcher(two_replies());
    search.decide(&0).unwrap();
    let first = *search.metrics();
    search.decide(&0).unwrap();

    assert_eq!(search.metrics(), &first);
    assert_eq!(search.metrics().get(METRICS_NODES_EXPANDED), Some(2));
    assert_eq!(search.metrics().get(METRICS_MAX_DEPTH), Some(1));
    assert_eq!(search.metrics().get("timeElapsed"), None);
}

#[test]
fn terminal_root_is_evaluated_once() {
    let mut tree = TreeGame::new();
    tree.nodes[0].value = Some(42.0);
    let mut search = searcher(tree);

    let error = search.make_decision(&0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TerminalState);
    assert_eq!(search.metrics().nodes_expanded, 1);
    assert_eq!(search.metrics().max_depth, 0);

    let error = search.make_decision_without_depth(&0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TerminalState);
    assert_eq!(search.metrics().nodes_expanded, 1);
}

#[test]
fn root_without_actions() {
    let mut search = searcher(TreeGame::new());

    let error = search.make_decision(&0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoActions);
    assert_eq!(search.metrics().nodes_expanded, 0);

    let error = search.make_decision_without_depth(&0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NoActions);
}

#[test]
fn interior_node_without_actions_scores_midpoint() {
    let mut tree = TreeGame::new();
    let stuck = tree.branch(0);
    tree.leaf(0, 20.0);
    let mut search = SearchBuilder::new(tree, UTIL_MIN, UTIL_MAX)
        .max_depth(3)
        .build()
        .unwrap();

    let result = search.decide(&0).unwrap();
    assert_eq!(result.best_action, stuck);
    assert_eq!(result.score, 50.0);
    assert_eq!(result.depth, 3);
}

#[test]
fn illegal_action_is_fatal() {
    let mut search = SearchBuilder::new(TreeGame::flat(&[1.0, 2.0]), UTIL_MIN, UTIL_MAX)
        .order_actions(|_, _, mut actions, _, _| {
            actions.push(999);
            actions
        })
        .build()
        .unwrap();

    let error = search.make_decision(&0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::IllegalAction);
}

#[test]
fn invalid_bounds_are_rejected() {
    for (min, max) in [(10.0, 10.0), (10.0, 0.0), (0.0, f64::INFINITY)] {
        let Err(error) = AlphaBetaSearch::new(TreeGame::new(), min, max) else {
            panic!("bounds {min}..{max} accepted");
        };
        assert_eq!(error.kind(), ErrorKind::InvalidBounds);
    }
}

#[test]
fn deepening_stops_at_max_depth() {
    let mut search = SearchBuilder::new(two_replies(), UTIL_MIN, UTIL_MAX)
        .max_depth(5)
        .increment_depth_limit(|limit| limit + 2)
        .build()
        .unwrap();

    // Passes at limits 2, 4 and 6.
    let result = search.decide(&0).unwrap();
    assert_eq!(result.depth, 6);
    assert_eq!(result.best_action, 4);
    assert_eq!(result.score, 40.0);
    assert_eq!(result.metrics.max_depth, 2);
}

#[test]
fn deeper_pass_changes_decision() {
    // At one ply both replies look equal, at two plies node 4 is better.
    let mut shallow = searcher(two_replies());
    assert_eq!(shallow.make_decision(&0).unwrap(), 1);

    let mut deep = SearchBuilder::new(two_replies(), UTIL_MIN, UTIL_MAX)
        .max_depth(2)
        .build()
        .unwrap();
    let result = deep.decide(&0).unwrap();
    assert_eq!(result.best_action, 4);
    assert_eq!(result.depth, 2);
}

#[test]
fn safe_winner_ends_deepening() {
    let mut tree = TreeGame::flat(&[20.0, UTIL_MAX]);
    let deeper = tree.branch(0);
    tree.leaf(deeper, 70.0);
    let mut search = SearchBuilder::new(tree, UTIL_MIN, UTIL_MAX)
        .max_depth(10)
        .build()
        .unwrap();

    let result = search.decide(&0).unwrap();
    assert_eq!(result.best_action, 2);
    assert_eq!(result.score, UTIL_MAX);
    assert_eq!(result.depth, 1);
}

#[test]
fn raised_stopper_returns_first_action() {
    let stopper = Arc::new(AtomicBool::new(true));
    let mut search = SearchBuilder::new(TreeGame::flat(&[10.0, 30.0]), UTIL_MIN, UTIL_MAX)
        .stopper(Arc::clone(&stopper))
        .build()
        .unwrap();

    let result = search.decide(&0).unwrap();
    assert!(result.stopped);
    assert_eq!(result.best_action, 1);
    assert_eq!(result.depth, 0);
    assert!(result.ranking.is_empty());
    assert_eq!(result.metrics.nodes_expanded, 1);
}

#[test]
fn stop_during_pass_keeps_previous_pass() {
    let stopper = Arc::new(AtomicBool::new(false));
    let trigger = Arc::clone(&stopper);
    let mut search = SearchBuilder::new(TreeGame::flat(&[10.0, 30.0]), UTIL_MIN, UTIL_MAX)
        .max_depth(3)
        .stopper(Arc::clone(&stopper))
        .increment_depth_limit(move |limit| {
            // Raise the stop signal as the second pass begins.
            if limit >= 1 {
                trigger.store(true, Ordering::Relaxed);
            }
            limit + 1
        })
        .build()
        .unwrap();

    let result = search.decide(&0).unwrap();
    assert!(result.stopped);
    assert_eq!(result.best_action, 2);
    assert_eq!(result.score, 30.0);
    assert_eq!(result.depth, 1);
    assert_eq!(result.ranking.len(), 2);
}

#[test]
fn stop_without_depth_is_an_error() {
    let stopper = Arc::new(AtomicBool::new(true));
    let mut search = SearchBuilder::new(two_replies(), UTIL_MIN, UTIL_MAX)
        .stopper(stopper)
        .build()
        .unwrap();

    let error = search.make_decision_without_depth(&0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::SearchStopped);
}

#[test]
fn decision_without_depth_reaches_leaves() {
    let mut search = searcher(two_replies());
    let result = search.decide_without_depth(&0).unwrap();

    assert_eq!(result.best_action, 4);
    assert_eq!(result.score, 40.0);
    assert_eq!(result.depth, u32::MAX);
    assert_eq!(result.ranking.values().collect::<Vec<_>>(), [40.0, 10.0]);
    assert_eq!(search.make_decision_without_depth(&0).unwrap(), 4);
}

#[test]
fn static_evaluation_is_idempotent() {
    let search = searcher(two_replies());
    for state in 0..search.game().nodes.len() {
        let first = search.eval(&state, &());
        assert_eq!(first, search.eval(&state, &()));
    }
    assert_eq!(search.eval(&0, &()), 50.0);
    assert_eq!(search.eval(&2, &()), 10.0);
}
