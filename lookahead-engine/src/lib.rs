//! Lookahead: iterative deepening alpha-beta search over any two-player game,
//! with Othello as the bundled game.

pub mod coretypes;
pub mod error;
pub mod game;
pub mod movelist;
pub mod moveorder;
pub mod othello;
pub mod position;
pub mod search;

pub use game::Game;
pub use moveorder::ActionStore;
pub use othello::Othello;
pub use position::Position;
pub use search::{AlphaBetaSearch, SearchBuilder, SearchResult};
