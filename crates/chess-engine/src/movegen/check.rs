//! Check detection.
//!
//! Both queries are pure reads: they work the same on the live board and on
//! the throwaway snapshots the legality filter builds.

use super::piece_attacks;
use crate::Board;
use chess_core::{Color, Square};

/// Returns true if any piece of `by_color` threatens `target`.
pub fn is_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    let occupied = board.occupied();
    board
        .pieces(by_color)
        .any(|(from, piece)| piece_attacks(piece, from, occupied).contains(target))
}

/// Returns true if the king of the given color is attacked.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked(board, king, color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn is_attacked_startpos() {
        let board = Board::startpos();
        assert!(is_attacked(&board, sq("e3"), Color::White));
        assert!(is_attacked(&board, sq("f3"), Color::White));
        assert!(!is_attacked(&board, sq("e4"), Color::White));
        assert!(is_attacked(&board, sq("c6"), Color::Black));
        assert!(!is_attacked(&board, sq("e5"), Color::Black));
    }

    #[test]
    fn no_check_at_start() {
        let board = Board::startpos();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn slider_check_is_blocked_by_any_piece() {
        let board = Board::from_fen("4k3/8/8/8/4r3/8/8/4K3 w - - 0 1").unwrap();
        assert!(is_in_check(&board, Color::White));

        let board = Board::from_fen("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_threatens_empty_diagonal() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4p3/K7 w - - 0 1").unwrap();
        assert!(is_attacked(&board, Square::F1, Color::Black));
        assert!(is_attacked(&board, Square::D1, Color::Black));
        assert!(!is_attacked(&board, Square::E1, Color::Black));
    }

    #[test]
    fn knight_and_king_attacks() {
        let board = Board::from_fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1").unwrap();
        assert!(is_in_check(&board, Color::White));
        assert!(is_attacked(&board, sq("d7"), Color::Black));
        assert!(is_attacked(&board, sq("d2"), Color::White));
    }
}
