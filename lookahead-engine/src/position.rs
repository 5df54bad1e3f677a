//! Holds Position struct, the state of an Othello game.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::coretypes::{Color, Move, Square, NUM_FILES, NUM_SQUARES};
use crate::error::{self, ErrorKind};
use crate::movelist::MoveList;

/// The eight ray directions as (row, column) steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// struct Position
/// A complete data set that can represent any Othello position.
/// # Members:
/// * black - one bit per square holding a black disc, bit index is the square index.
/// * white - one bit per square holding a white disc.
/// * side_to_move - Color of player whose turn it is.
///
/// Positions are plain values. Applying a move returns a new Position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    black: u64,
    white: u64,
    side_to_move: Color,
}

impl Position {
    /// Standard Othello start position, black to move.
    pub fn start_position() -> Self {
        let square = |s: &str| s.parse::<Square>().map(|sq| sq.bit()).unwrap_or(0);
        Self {
            black: square("d5") | square("e4"),
            white: square("d4") | square("e5"),
            side_to_move: Color::Black,
        }
    }

    /// Position from disc masks. Fails if a square holds both colors.
    pub fn new(black: u64, white: u64, side_to_move: Color) -> error::Result<Self> {
        if black & white != 0 {
            return Err((
                ErrorKind::ParsePositionMalformed,
                format!("overlapping discs {:#018x}", black & white),
            )
                .into());
        }
        Ok(Self {
            black,
            white,
            side_to_move,
        })
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Mask of all discs of `color`.
    pub fn discs(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Mask of all empty squares.
    pub fn empties(&self) -> u64 {
        !(self.black | self.white)
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        if self.black & square.bit() != 0 {
            Some(Color::Black)
        } else if self.white & square.bit() != 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).count_ones()
    }

    pub fn empty_count(&self) -> u32 {
        self.empties().count_ones()
    }

    /// Mask of the discs flipped if `color` places on `square`.
    /// Zero if the square is occupied or the placement brackets nothing.
    pub fn flips(&self, square: Square, color: Color) -> u64 {
        if self.empties() & square.bit() == 0 {
            return 0;
        }
        let own = self.discs(color);
        let opponent = self.discs(color.opposite());

        let mut flips = 0;
        for (d_row, d_col) in DIRECTIONS {
            let mut line = 0;
            let mut next = Square::from_coords(square.row() + d_row, square.col() + d_col);

            while let Some(current) = next {
                if opponent & current.bit() != 0 {
                    line |= current.bit();
                } else {
                    // Line is bracketed only if it ends on an own disc.
                    if own & current.bit() != 0 {
                        flips |= line;
                    }
                    break;
                }
                next = Square::from_coords(current.row() + d_row, current.col() + d_col);
            }
        }
        flips
    }

    /// All squares `color` can legally place on, in square order.
    pub fn placements(&self, color: Color) -> MoveList {
        Square::iter()
            .filter(|square| self.flips(*square, color) != 0)
            .map(Move::Place)
            .collect()
    }

    pub fn has_placement(&self, color: Color) -> bool {
        Square::iter().any(|square| self.flips(square, color) != 0)
    }

    /// Legal moves for the side to move.
    /// A lone `Pass` if it has no placement while the game goes on, empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.placements(self.side_to_move);
        if moves.is_empty() && !self.is_game_over() {
            moves.push(Move::Pass);
        }
        moves
    }

    /// True when the board is full, a color has no discs left, or neither side can place.
    pub fn is_game_over(&self) -> bool {
        self.empty_count() == 0
            || self.count(Color::Black) == 0
            || self.count(Color::White) == 0
            || (!self.has_placement(Color::Black) && !self.has_placement(Color::White))
    }

    /// Returns the position after the side to move plays `move_`.
    pub fn do_move(&self, move_: Move) -> error::Result<Position> {
        let color = self.side_to_move;

        match move_ {
            Move::Place(square) => {
                let flips = self.flips(square, color);
                if flips == 0 {
                    return Err((
                        ErrorKind::IllegalAction,
                        format!("{color} cannot place on {square}"),
                    )
                        .into());
                }

                let own = self.discs(color) | flips | square.bit();
                let opponent = self.discs(color.opposite()) & !flips;
                let (black, white) = match color {
                    Color::Black => (own, opponent),
                    Color::White => (opponent, own),
                };

                Ok(Position {
                    black,
                    white,
                    side_to_move: color.opposite(),
                })
            }
            Move::Pass => {
                if self.is_game_over() || self.has_placement(color) {
                    return Err((ErrorKind::IllegalAction, format!("{color} cannot pass")).into());
                }
                Ok(Position {
                    side_to_move: color.opposite(),
                    ..*self
                })
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start_position()
    }
}

/// Board text: 64 cells row by row from a1 to h8 (`.` empty, `X` black, `O` white),
/// followed by the side to move (`X` or `O`). Whitespace is ignored.
impl FromStr for Position {
    type Err = error::Error;

    fn from_str(s: &str) -> error::Result<Self> {
        let cells: Vec<char> = s.chars().filter(|ch| !ch.is_whitespace()).collect();
        if cells.len() != NUM_SQUARES + 1 {
            return Err((
                ErrorKind::ParsePositionMalformed,
                format!("expected {} cells and a side to move, found {}", NUM_SQUARES, cells.len()),
            )
                .into());
        }

        let mut black = 0;
        let mut white = 0;
        for (square, ch) in Square::iter().zip(&cells) {
            match (*ch, Color::from_char(*ch)) {
                ('.', _) => (),
                (_, Some(Color::Black)) => black |= square.bit(),
                (_, Some(Color::White)) => white |= square.bit(),
                (_, None) => {
                    return Err((
                        ErrorKind::ParsePositionMalformed,
                        format!("unknown cell {ch:?} at {square}"),
                    )
                        .into())
                }
            }
        }

        let side_to_move = Color::from_char(cells[NUM_SQUARES]).ok_or_else(|| {
            error::Error::from((
                ErrorKind::ParsePositionMalformed,
                format!("unknown side to move {:?}", cells[NUM_SQUARES]),
            ))
        })?;

        Position::new(black, white, side_to_move)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut displayed = String::from("  a b c d e f g h\n");
        for square in Square::iter() {
            if square.col() == 0 {
                displayed.push_str(&format!("{} ", square.row() + 1));
            }
            displayed.push(self.color_at(square).map_or('.', |color| color.to_char()));
            displayed.push(if square.col() as usize == NUM_FILES - 1 {
                '\n'
            } else {
                ' '
            });
        }
        displayed.push_str(&format!(
            "X {} O {}, {} to move\n",
            self.count(Color::Black),
            self.count(Color::White),
            self.side_to_move
        ));

        write!(f, "{displayed}")
    }
}
