//! MoveList types used by the Othello collaborator.
//!
//! The underlying type of MoveList may change at any time during
//! pre-1.0 development, so a MoveList type alias makes changes easy.

use arrayvec::ArrayVec;

use crate::coretypes::{Move, MAX_MOVES};

/// MoveList is a container that can hold at most `MAX_MOVES`,
/// the most number of moves per any Othello position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
