//! Move application.
//!
//! [`apply_move`] is the only path that changes a live board during play:
//! it validates the request, performs the move with all of its side effects
//! and re-evaluates the game status for the player who moves next.

use chess_core::{CastleSide, Move, MoveKind, Piece, PieceKind, Square};
use serde::Serialize;

use crate::board::{king_home, rook_home};
use crate::movegen::{has_legal_move, is_in_check, legal_moves};
use crate::rules::GameStatus;
use crate::{Board, GameError};

/// Description of a committed move, enough for a caller to animate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedMove {
    /// The squares the moving piece travelled between.
    pub mv: Move,
    /// The piece as it stood on the origin square.
    pub piece: Piece,
    /// Which special rule, if any, the move used.
    pub kind: MoveKind,
    /// The piece removed from the board, including an en passant victim.
    pub captured: Option<Piece>,
}

/// Validates and commits a move, then refreshes the game status.
///
/// On error the board is left untouched.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> Result<AppliedMove, GameError> {
    if board.status.is_over() {
        return Err(GameError::GameOver(board.status));
    }

    let piece = board.piece_at(from).ok_or(GameError::EmptySquare(from))?;
    if piece.color != board.side_to_move || !legal_moves(board, from)?.contains(to) {
        return Err(GameError::IllegalMove { from, to });
    }

    let applied = make_move(board, from, to)?;
    refresh_status(board);
    Ok(applied)
}

/// Performs a move without checking legality and without updating the
/// status.
///
/// The caller is responsible for passing a move taken from
/// [`legal_moves`]; anything else produces a board that could not arise in
/// play. Only an empty origin square is rejected.
pub fn make_move(board: &mut Board, from: Square, to: Square) -> Result<AppliedMove, GameError> {
    let piece = board.piece_at(from).ok_or(GameError::EmptySquare(from))?;
    let color = piece.color;
    let kind = classify(board, piece, from, to);

    let mut captured = None;
    if kind == MoveKind::EnPassant {
        let victim = Square::new(from.rank(), to.file())?;
        captured = board.take(victim);
    }

    board.en_passant = None;
    if kind == MoveKind::DoublePush {
        board.en_passant = from.offset(color.pawn_direction(), 0);
    }

    board.take(from);
    if let Some(taken) = board.take(to) {
        captured = Some(taken);
    }
    board.put(to, piece);

    if let MoveKind::Castle(side) = kind {
        let rook_from = rook_home(color, side);
        if let (Some(rook), Some(rook_to)) = (board.take(rook_from), from.offset(0, side.direction()))
        {
            board.put(rook_to, rook);
        }
        board.castling.mark_rook_moved(color, side);
    }

    match piece.kind {
        PieceKind::King if from == king_home(color) => board.castling.mark_king_moved(color),
        PieceKind::Rook => {
            for side in CastleSide::BOTH {
                if from == rook_home(color, side) {
                    board.castling.mark_rook_moved(color, side);
                }
            }
        }
        _ => {}
    }

    // A rook taken on its corner can never castle again.
    if captured.is_some() {
        let them = color.opposite();
        for side in CastleSide::BOTH {
            if to == rook_home(them, side) {
                board.castling.mark_rook_moved(them, side);
            }
        }
    }

    if kind == MoveKind::Promotion {
        board.put(to, Piece::new(PieceKind::Queen, color));
    }

    board.side_to_move = board.side_to_move.opposite();

    Ok(AppliedMove {
        mv: Move::new(from, to),
        piece,
        kind,
        captured,
    })
}

/// Evaluates the status for the side to move and stores it on the board.
pub fn refresh_status(board: &mut Board) -> GameStatus {
    let side = board.side_to_move;
    board.status = if has_legal_move(board, side) {
        GameStatus::InProgress
    } else if is_in_check(board, side) {
        GameStatus::Checkmate(side)
    } else {
        GameStatus::Stalemate(side)
    };
    board.status
}

fn classify(board: &Board, piece: Piece, from: Square, to: Square) -> MoveKind {
    match piece.kind {
        PieceKind::Pawn => {
            if to.rank() == piece.color.promotion_rank() {
                MoveKind::Promotion
            } else if from.rank().abs_diff(to.rank()) == 2 {
                MoveKind::DoublePush
            } else if Some(to) == board.en_passant
                && from.file() != to.file()
                && board.piece_at(to).is_none()
            {
                MoveKind::EnPassant
            } else {
                MoveKind::Normal
            }
        }
        PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
            if to.file() > from.file() {
                MoveKind::Castle(CastleSide::Kingside)
            } else {
                MoveKind::Castle(CastleSide::Queenside)
            }
        }
        _ => MoveKind::Normal,
    }
}
