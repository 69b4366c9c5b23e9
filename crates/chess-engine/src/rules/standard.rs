//! Standard chess rules implementation.

use super::{GameStatus, RuleSet};
use crate::{apply, movegen, AppliedMove, Bitboard, Board, GameError};
use chess_core::{Color, Move, Square};

/// Standard chess rules.
///
/// - Standard piece movement
/// - Castling (kingside and queenside)
/// - En passant
/// - Pawn promotion, always to a queen
/// - Check, checkmate, and stalemate detection
///
/// Clocks, repetition and material draws are not part of this rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn legal_moves(&self, board: &Board, from: Square) -> Result<Bitboard, GameError> {
        movegen::legal_moves(board, from)
    }

    fn all_legal_moves(&self, board: &Board) -> Vec<Move> {
        movegen::all_legal_moves(board)
    }

    fn is_check(&self, board: &Board, color: Color) -> bool {
        movegen::is_in_check(board, color)
    }

    fn apply_move(
        &self,
        board: &mut Board,
        from: Square,
        to: Square,
    ) -> Result<AppliedMove, GameError> {
        apply::apply_move(board, from, to)
    }

    fn status(&self, board: &Board) -> GameStatus {
        let mut scratch = board.clone();
        apply::refresh_status(&mut scratch)
    }
}
