//! Game management on top of a rule set.
//!
//! The [`Game`] struct is the interface collaborators use: a renderer reads
//! the board and the legal destinations of a selected piece, an input layer
//! turns a drag from one square to another into [`Game::apply_move`], and
//! a status display reads [`Game::status`].

use chess_core::{Color, FenError, Move, Square};
use tracing::{debug, info};

use crate::rules::{GameStatus, RuleSet, StandardChess};
use crate::{AppliedMove, Bitboard, Board, GameError};

/// A chess game played under a rule set.
///
/// All operations run to completion synchronously. A host that shares one
/// game between threads wraps it in a single mutex.
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = StandardChess> {
    /// Current board.
    board: Board,
    /// Rules used to validate and commit moves.
    rules: R,
    /// Half-moves played since the start or the last reset.
    plies: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::with_rules(StandardChess)
    }

    /// Creates a game from a FEN string.
    ///
    /// The status is evaluated on load, so a FEN describing a finished game
    /// yields a game that rejects every move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(fen)?;
        Ok(Game {
            board,
            rules: StandardChess,
            plies: 0,
        })
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a game under the given rules, starting from their initial
    /// board.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Game {
            board,
            rules,
            plies: 0,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Returns the status as of the last move.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.board.status().is_over()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.rules.is_check(&self.board, self.board.side_to_move())
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.plies
    }

    /// Returns the squares the piece on `from` may move to.
    ///
    /// A piece that does not belong to the side to move has no moves, and
    /// neither does anything once the game is over. An empty square is an
    /// error.
    pub fn legal_moves(&self, from: Square) -> Result<Bitboard, GameError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;
        if self.is_over() || piece.color != self.board.side_to_move() {
            return Ok(Bitboard::EMPTY);
        }
        self.rules.legal_moves(&self.board, from)
    }

    /// Like [`legal_moves`](Self::legal_moves), addressed by raw rank and
    /// file as a pointer-driven caller would supply them.
    pub fn legal_moves_at(&self, rank: u8, file: u8) -> Result<Bitboard, GameError> {
        self.legal_moves(Square::new(rank, file)?)
    }

    /// Returns every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.rules.all_legal_moves(&self.board)
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// On error the game is unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, GameError> {
        let applied = match self.rules.apply_move(&mut self.board, from, to) {
            Ok(applied) => applied,
            Err(err) => {
                debug!(%from, %to, error = %err, "move rejected");
                return Err(err);
            }
        };
        self.plies += 1;

        debug!(
            ply = self.plies,
            mv = %applied.mv,
            piece = %applied.piece,
            kind = ?applied.kind,
            captured = ?applied.captured,
            "move applied"
        );

        let status = self.board.status();
        if status.is_over() {
            info!(%status, winner = ?status.winner(), plies = self.plies, "game over");
        }

        Ok(applied)
    }

    /// Like [`apply_move`](Self::apply_move), addressed by raw `(rank, file)`
    /// pairs.
    pub fn apply_move_at(
        &mut self,
        from: (u8, u8),
        to: (u8, u8),
    ) -> Result<AppliedMove, GameError> {
        let from = Square::new(from.0, from.1)?;
        let to = Square::new(to.0, to.1)?;
        self.apply_move(from, to)
    }

    /// Restores the rule set's initial board and clears the ply count.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_board();
        self.plies = 0;
        debug!("game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind, SquareError};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.apply_move(sq(from), sq(to)).unwrap();
        }
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.all_legal_moves().len(), 20);
        assert!(!game.is_check());
    }

    #[test]
    fn only_side_to_move_has_moves() {
        let game = Game::new();
        assert_eq!(game.legal_moves(sq("e7")).unwrap(), Bitboard::EMPTY);
        assert_eq!(game.legal_moves(sq("b8")).unwrap(), Bitboard::EMPTY);
        assert_eq!(game.legal_moves(sq("e2")).unwrap().count(), 2);
        assert_eq!(
            game.legal_moves(sq("e4")),
            Err(GameError::EmptySquare(sq("e4")))
        );
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );

        assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
        assert_eq!(game.status().winner(), Some(Color::Black));
        assert!(game.is_check());
        assert!(game.all_legal_moves().is_empty());
        assert_eq!(game.legal_moves(sq("a2")).unwrap(), Bitboard::EMPTY);
        assert_eq!(game.ply_count(), 4);
    }

    #[test]
    fn moves_rejected_after_game_over() {
        let mut game = Game::new();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        let before = game.board().clone();

        assert_eq!(
            game.apply_move(sq("a2"), sq("a3")),
            Err(GameError::GameOver(GameStatus::Checkmate(Color::White)))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.ply_count(), 4);
    }

    #[test]
    fn stalemate() {
        let mut game = Game::from_fen("k7/8/1Q6/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        play(&mut game, &[("e1", "d2")]);
        // Black king on a8 is boxed in by the queen on b6 but not attacked.
        assert_eq!(game.status(), GameStatus::Stalemate(Color::Black));
        assert!(!game.is_check());
        assert_eq!(game.status().winner(), None);
    }

    #[test]
    fn illegal_move_leaves_game_unchanged() {
        let mut game = Game::new();
        let before = game.board().clone();

        assert_eq!(
            game.apply_move(sq("e2"), sq("d3")),
            Err(GameError::IllegalMove {
                from: sq("e2"),
                to: sq("d3")
            })
        );
        assert_eq!(
            game.apply_move(sq("d7"), sq("d5")),
            Err(GameError::IllegalMove {
                from: sq("d7"),
                to: sq("d5")
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn raw_coordinates_fail_fast() {
        let mut game = Game::new();
        assert_eq!(
            game.legal_moves_at(8, 0),
            Err(GameError::InvalidSquare(SquareError::OutOfRange {
                rank: 8,
                file: 0
            }))
        );
        assert!(matches!(
            game.apply_move_at((6, 4), (4, 9)),
            Err(GameError::InvalidSquare(_))
        ));

        // e2-e4 as (rank, file) pairs.
        let applied = game.apply_move_at((6, 4), (4, 4)).unwrap();
        assert_eq!(applied.mv, Move::new(sq("e2"), sq("e4")));
        assert_eq!(game.legal_moves_at(1, 3).unwrap().count(), 2);
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("e1", "e2")]);
        assert!(game.board().castling().king_moved(Color::White));

        game.reset();
        assert_eq!(game.board(), &Board::startpos());
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board().en_passant(), None);
        assert_eq!(
            game.board().piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn reset_after_game_over() {
        let mut game = Game::new();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        game.reset();
        assert!(game.apply_move(sq("e2"), sq("e4")).is_ok());
    }

    #[test]
    fn finished_fen_rejects_moves() {
        let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate(Color::Black));
        assert!(matches!(
            game.apply_move(sq("h8"), sq("h7")),
            Err(GameError::GameOver(_))
        ));
    }
}
