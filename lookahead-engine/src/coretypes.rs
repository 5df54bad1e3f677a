//! The fundamental and simple types of the Othello collaborator.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8; // a, b, c, d, e, f, g, h
pub const NUM_RANKS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_FILES * NUM_RANKS;

// Four squares are occupied from the start, so no position has more placements than this.
pub const MAX_MOVES: usize = NUM_SQUARES - 4;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Color of a disc, or a player. Black moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    White,
}

/// Square of the board, indexed row-major from a1 (top left) to h8 (bottom right).
/// Files a-h are columns, ranks 1-8 are rows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

/// An Othello move: place a disc on a square, or pass when no placement exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

/////////////////////
// Implementations //
/////////////////////

impl Color {
    pub const fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used for this color's discs in board text.
    pub const fn to_char(&self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Color::Black),
            'O' | 'o' => Some(Color::White),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err((ErrorKind::ParseColorMalformed, s).into()),
        }
    }
}

impl Square {
    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);
    pub const CORNERS: [Square; 4] = [Self::A1, Self::H1, Self::A8, Self::H8];

    /// Square from its row-major index, if in range.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SQUARES {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Square from zero-based row (rank) and column (file), if on the board.
    pub fn from_coords(row: i8, col: i8) -> Option<Self> {
        let in_range = |v: i8| (0..NUM_RANKS as i8).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Square((row * NUM_FILES as i8 + col) as u8))
        } else {
            None
        }
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn row(&self) -> i8 {
        (self.0 / NUM_FILES as u8) as i8
    }

    pub const fn col(&self) -> i8 {
        (self.0 % NUM_FILES as u8) as i8
    }

    /// Single bit mask of this square.
    pub const fn bit(&self) -> u64 {
        1u64 << self.0
    }

    pub fn is_corner(&self) -> bool {
        Self::CORNERS.contains(self)
    }

    /// True for every square on the border of the board, corners included.
    pub fn is_edge(&self) -> bool {
        let last = NUM_FILES as i8 - 1;
        self.row() == 0 || self.row() == last || self.col() == 0 || self.col() == last
    }

    /// All squares in index order.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'1' + self.row() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let mut chars = lowered.chars();

        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err((ErrorKind::ParseSquareMalformed, s).into());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err((ErrorKind::ParseSquareMalformed, s).into());
        }

        let col = file as i8 - 'a' as i8;
        let row = rank as i8 - '1' as i8;
        Square::from_coords(row, col).ok_or_else(|| (ErrorKind::ParseSquareMalformed, s).into())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Place(square) => write!(f, "{square}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        s.parse::<Square>()
            .map(Move::Place)
            .map_err(|_| (ErrorKind::ParseMoveMalformed, s).into())
    }
}

impl From<Square> for Move {
    fn from(square: Square) -> Self {
        Move::Place(square)
    }
}
