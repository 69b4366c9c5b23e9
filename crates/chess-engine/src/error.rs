//! Errors reported by the rules engine.

use chess_core::{Square, SquareError};
use thiserror::Error;

use crate::rules::GameStatus;

/// Error type for queries and moves.
///
/// Every variant is detected before the board is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate outside the 8x8 board.
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    /// A move or query named a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on `from` may not move to `to` right now.
    #[error("illegal move: {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    /// The game has already ended.
    #[error("game is over: {0}")]
    GameOver(GameStatus),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    #[test]
    fn messages() {
        assert_eq!(
            GameError::EmptySquare(Square::E1).to_string(),
            "no piece on e1"
        );
        assert_eq!(
            GameError::IllegalMove {
                from: Square::E1,
                to: Square::E8
            }
            .to_string(),
            "illegal move: e1-e8"
        );
        assert_eq!(
            GameError::GameOver(GameStatus::Checkmate(Color::White)).to_string(),
            "game is over: White is checkmated"
        );
    }

    #[test]
    fn square_errors_convert() {
        let err: GameError = Square::new(3, 9).unwrap_err().into();
        assert_eq!(
            err,
            GameError::InvalidSquare(SquareError::OutOfRange { rank: 3, file: 9 })
        );
    }
}
