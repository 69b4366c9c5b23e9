//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait which the [`Game`](crate::Game)
//! facade delegates to. The board and move generator know nothing about who
//! is driving them; the active rule set decides the starting board and how a
//! move is validated and committed.

mod standard;

pub use standard::StandardChess;

use crate::{AppliedMove, Bitboard, Board, GameError};
use chess_core::{Color, Move, Square};
use serde::Serialize;
use std::fmt;

/// Status of a game, evaluated for the side to move after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "color")]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    #[default]
    InProgress,
    /// The given color is in check and has no legal move.
    Checkmate(Color),
    /// The given color is not in check and has no legal move.
    Stalemate(Color),
}

impl GameStatus {
    /// Returns true once no further move may be played.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning color, if the game ended in checkmate.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate(color) => write!(f, "{} is checkmated", color),
            GameStatus::Stalemate(color) => write!(f, "{} is stalemated", color),
        }
    }
}

/// Trait for the rules a game is played under.
///
/// # Example
///
/// ```
/// use chess_engine::rules::RuleSet;
/// use chess_engine::StandardChess;
///
/// let board = StandardChess.initial_board();
/// let moves = StandardChess.all_legal_moves(&board);
/// assert_eq!(moves.len(), 20);
/// ```
pub trait RuleSet {
    /// Returns the board a fresh game starts from.
    fn initial_board(&self) -> Board;

    /// Returns the legal destinations of the piece on `from`.
    fn legal_moves(&self, board: &Board, from: Square) -> Result<Bitboard, GameError>;

    /// Returns every legal move of the side to move.
    fn all_legal_moves(&self, board: &Board) -> Vec<Move>;

    /// Returns true if the king of `color` is attacked.
    fn is_check(&self, board: &Board, color: Color) -> bool;

    /// Validates and commits a move, updating the board's status.
    fn apply_move(
        &self,
        board: &mut Board,
        from: Square,
        to: Square,
    ) -> Result<AppliedMove, GameError>;

    /// Re-evaluates the status of the board for its side to move.
    fn status(&self, board: &Board) -> GameStatus;

    /// Returns true if the side to move may play `from` to `to`.
    fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        board
            .piece_at(from)
            .is_some_and(|p| p.color == board.side_to_move())
            && self
                .legal_moves(board, from)
                .is_ok_and(|moves| moves.contains(to))
    }
}
