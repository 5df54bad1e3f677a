//! Explicit game trees for exercising the search.

#![allow(dead_code)]

use rand::Rng;

use lookahead_engine::error::{ErrorKind, Result};
use lookahead_engine::Game;

pub const UTIL_MIN: f64 = 0.0;
pub const UTIL_MAX: f64 = 100.0;

/// A node of a `TreeGame`.
#[derive(Debug, Clone)]
pub struct Node {
    pub children: Vec<usize>,
    /// Utility for the root player. Some exactly for terminal nodes.
    pub value: Option<f64>,
}

/// Game played on an explicit tree. States and actions are both node indices;
/// taking an action moves to that child. Root is node 0.
#[derive(Debug, Clone, Default)]
pub struct TreeGame {
    pub nodes: Vec<Node>,
}

impl TreeGame {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                children: Vec::new(),
                value: None,
            }],
        }
    }

    /// Add an interior child of `parent`, returning its index.
    pub fn branch(&mut self, parent: usize) -> usize {
        self.push(parent, None)
    }

    /// Add a terminal child of `parent` worth `value`, returning its index.
    pub fn leaf(&mut self, parent: usize, value: f64) -> usize {
        self.push(parent, Some(value))
    }

    fn push(&mut self, parent: usize, value: Option<f64>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            children: Vec::new(),
            value,
        });
        self.nodes[parent].children.push(index);
        index
    }

    /// Root with one terminal child per value.
    pub fn flat(values: &[f64]) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.leaf(0, *value);
        }
        tree
    }

    /// Random tree of exactly `depth` plies with 1 to `max_branching` children per
    /// interior node and integer leaf values within the utility bounds.
    pub fn random<R: Rng>(rng: &mut R, depth: u32, max_branching: usize) -> Self {
        let mut tree = Self::new();
        tree.grow(rng, 0, depth, max_branching);
        tree
    }

    fn grow<R: Rng>(&mut self, rng: &mut R, parent: usize, depth: u32, max_branching: usize) {
        for _ in 0..rng.gen_range(1..=max_branching) {
            if depth <= 1 {
                let value = rng.gen_range(UTIL_MIN as i32..=UTIL_MAX as i32);
                self.leaf(parent, value as f64);
            } else {
                let child = self.branch(parent);
                self.grow(rng, child, depth - 1, max_branching);
            }
        }
    }
}

impl Game for TreeGame {
    type State = usize;
    type Action = usize;
    type Player = ();

    fn current_player(&self, _state: &usize) {}

    fn actions(&self, state: &usize) -> Vec<usize> {
        self.nodes[*state].children.clone()
    }

    fn result(&self, state: &usize, action: &usize) -> Result<usize> {
        if self.nodes[*state].children.contains(action) {
            Ok(*action)
        } else {
            Err((ErrorKind::IllegalAction, format!("{action} is not a child of {state}")).into())
        }
    }

    fn is_terminal(&self, state: &usize) -> bool {
        self.nodes[*state].value.is_some()
    }

    fn utility(&self, state: &usize, _player: &()) -> f64 {
        self.nodes[*state].value.unwrap_or(f64::NAN)
    }
}
