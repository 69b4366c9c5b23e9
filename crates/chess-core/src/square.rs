//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when building a square from untrusted coordinates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("square ({rank}, {file}) is off the board: rank and file must be in 0-7")]
    OutOfRange { rank: u8, file: u8 },

    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),
}

/// A square on the chess board, addressed by `(rank, file)`.
///
/// Rank 0 is black's back rank (the eighth rank in algebraic notation) and
/// rank 7 is white's back rank. File 0 is the a-file. Internally the square
/// is stored as `rank * 8 + file`:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a1 = 56, ..., h1 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from rank and file, failing on anything outside 0-7.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Result<Self, SquareError> {
        if rank < 8 && file < 8 {
            Ok(Square(rank * 8 + file))
        } else {
            Err(SquareError::OutOfRange { rank, file })
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square((b'8' - rank) * 8 + (file - b'a')))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank index (0 = black's back rank).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file index (0 = a-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square displaced by the given rank and file deltas, if it
    /// is still on the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank() as i8 + rank_delta;
        let file = self.file() as i8 + file_delta;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'8' - self.rank()) as char;
        format!("{}{}", file, rank)
    }

    /// Returns an iterator over all 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    // Back-rank squares
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_algebraic()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_algebraic(&s).ok_or(SquareError::InvalidAlgebraic(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(e4.rank(), 4);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.index(), 36);
        assert_eq!(e4.to_algebraic(), "e4");
    }

    #[test]
    fn square_new_rejects_off_board() {
        assert_eq!(
            Square::new(8, 0),
            Err(SquareError::OutOfRange { rank: 8, file: 0 })
        );
        assert_eq!(
            Square::new(3, 200),
            Err(SquareError::OutOfRange { rank: 3, file: 200 })
        );
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("E1"), Some(Square::E1));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn back_ranks_follow_board_orientation() {
        assert_eq!((Square::E1.rank(), Square::E1.file()), (7, 4));
        assert_eq!((Square::E8.rank(), Square::E8.file()), (0, 4));
        assert_eq!(Square::from_algebraic("e2").map(|s| s.rank()), Some(6));
    }

    #[test]
    fn square_offset() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.offset(-1, 0), Square::from_algebraic("e5"));
        assert_eq!(e4.offset(2, 1), Square::from_algebraic("f2"));
        assert_eq!(Square::A1.offset(1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
    }

    #[test]
    fn all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[63], Square::H1);
    }

    #[test]
    fn string_conversion() {
        assert_eq!(String::from(Square::C8), "c8");
        assert_eq!(Square::try_from("g1".to_string()), Ok(Square::G1));
        assert!(Square::try_from("z9".to_string()).is_err());
    }
}
