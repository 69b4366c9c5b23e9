//! Move generation.
//!
//! Three views of what a piece can do are provided:
//! - [`attacks_from`]: the squares it threatens, used by the check oracle;
//! - [`pseudo_legal_moves`]: where it could move if its own king's safety
//!   were ignored (castling excluded);
//! - [`legal_moves`]: pseudo-legal moves plus castling, with every candidate
//!   that would leave the mover's king attacked removed.

mod attacks;
pub mod check;
pub mod perft;

use crate::{Bitboard, Board, GameError};
use chess_core::{CastleSide, Color, Move, Piece, PieceKind, Square};

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
pub use check::{is_attacked, is_in_check};

/// Returns the squares threatened by the piece on `from`.
pub fn attacks_from(board: &Board, from: Square) -> Result<Bitboard, GameError> {
    let piece = board.piece_at(from).ok_or(GameError::EmptySquare(from))?;
    Ok(piece_attacks(piece, from, board.occupied()))
}

/// Returns every destination of the piece on `from`, ignoring whether the
/// move would leave its own king in check.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Result<Bitboard, GameError> {
    let piece = board.piece_at(from).ok_or(GameError::EmptySquare(from))?;
    Ok(piece_moves(board, piece, from))
}

/// Returns the legal destinations of the piece on `from`.
///
/// The piece does not have to belong to the side to move; callers that only
/// want the mover's options check the color themselves.
pub fn legal_moves(board: &Board, from: Square) -> Result<Bitboard, GameError> {
    let piece = board.piece_at(from).ok_or(GameError::EmptySquare(from))?;

    let mut candidates = piece_moves(board, piece, from);
    if piece.kind == PieceKind::King {
        candidates |= castling_moves(board, piece.color, from);
    }

    Ok(candidates
        .into_iter()
        .filter(|&to| leaves_king_safe(board, piece, from, to))
        .collect())
}

/// Generates all legal moves for the side to move.
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces(board.side_to_move()) {
        if let Ok(targets) = legal_moves(board, from) {
            moves.extend(targets.into_iter().map(|to| Move::new(from, to)));
        }
    }
    moves
}

/// Returns true if any piece of `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| legal_moves(board, from).is_ok_and(|m| m.is_not_empty()))
}

/// Threatened squares, dispatched on piece kind.
pub(crate) fn piece_attacks(piece: Piece, from: Square, occupied: Bitboard) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupied),
        PieceKind::Rook => rook_attacks(from, occupied),
        PieceKind::Queen => queen_attacks(from, occupied),
        PieceKind::King => king_attacks(from),
    }
}

/// Pseudo-legal destinations. Pawns differ from their attack pattern; every
/// other kind moves where it attacks, minus squares held by its own side.
fn piece_moves(board: &Board, piece: Piece, from: Square) -> Bitboard {
    let occupied = board.occupied();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece.color, from, occupied),
        _ => piece_attacks(piece, from, occupied) & !board.occupied_by(piece.color),
    }
}

fn pawn_moves(board: &Board, color: Color, from: Square, occupied: Bitboard) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    let dir = color.pawn_direction();

    // Pushes
    if let Some(one) = from.offset(dir, 0).filter(|sq| !occupied.contains(*sq)) {
        moves.set(one);
        if from.rank() == color.pawn_start_rank() {
            if let Some(two) = one.offset(dir, 0).filter(|sq| !occupied.contains(*sq)) {
                moves.set(two);
            }
        }
    }

    // Captures
    let mut targets = board.occupied_by(color.opposite());
    if let Some(ep) = en_passant_target(board, color, from) {
        targets.set(ep);
    }
    moves | (pawn_attacks(from, color) & targets)
}

/// Returns the en passant target if the pawn of `color` on `from` is
/// positioned to take the pawn that just double-pushed.
fn en_passant_target(board: &Board, color: Color, from: Square) -> Option<Square> {
    let ep = board.en_passant()?;
    if color != board.side_to_move() {
        return None;
    }
    let victim = Square::new(from.rank(), ep.file()).ok()?;
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite());
    (board.piece_at(victim) == Some(enemy_pawn)).then_some(ep)
}

fn castling_moves(board: &Board, color: Color, from: Square) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    let home = crate::board::king_home(color);
    let them = color.opposite();

    if from != home || board.castling().king_moved(color) || is_attacked(board, home, them) {
        return moves;
    }

    for side in CastleSide::BOTH {
        if !board.castling().can_castle(color, side) {
            continue;
        }
        let rook_sq = crate::board::rook_home(color, side);
        if board.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let dir = side.direction();
        let mut between = Vec::new();
        let mut current = home;
        while let Some(next) = current.offset(0, dir) {
            if next == rook_sq {
                break;
            }
            between.push(next);
            current = next;
        }
        if between.iter().any(|sq| board.piece_at(*sq).is_some()) {
            continue;
        }

        // The king crosses one square and lands on the next.
        let (Some(&crossed), Some(&target)) = (between.first(), between.get(1)) else {
            continue;
        };
        if !is_attacked(board, crossed, them) && !is_attacked(board, target, them) {
            moves.set(target);
        }
    }

    moves
}

/// Plays the candidate on a snapshot and asks whether the mover's king is
/// still safe there. The live board is never touched.
fn leaves_king_safe(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let mut snapshot = board.clone();

    if piece.kind == PieceKind::Pawn && board.piece_at(to).is_none() && from.file() != to.file()
    {
        if let Ok(victim) = Square::new(from.rank(), to.file()) {
            snapshot.take(victim);
        }
    }

    snapshot.take(from);
    snapshot.put(to, piece);
    !is_in_check(&snapshot, piece.color)
}
