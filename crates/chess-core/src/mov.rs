//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sides a king can castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    /// Toward the h-file rook.
    Kingside,
    /// Toward the a-file rook.
    Queenside,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Returns the index (0 for kingside, 1 for queenside).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// File delta of one king step toward this side.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

/// What kind of move was played, as classified by the engine when it is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Plain move or capture.
    Normal,
    /// Pawn advance of two squares from its start rank.
    DoublePush,
    /// Pawn capture onto the en passant target.
    EnPassant,
    /// King moving two files, with its rook.
    Castle(CastleSide),
    /// Pawn reaching its farthest rank, replaced by a queen.
    Promotion,
}

/// A move from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_display() {
        let m = Move::new(Square::E1, Square::G1);
        assert_eq!(format!("{}", m), "e1-g1");
        assert_eq!(format!("{:?}", m), "Move(e1g1)");
    }

    #[test]
    fn castle_side_geometry() {
        assert_eq!(CastleSide::Kingside.direction(), 1);
        assert_eq!(CastleSide::Queenside.direction(), -1);
    }
}
