//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the authoritative board state: piece grid, side to move,
//!   castling rights, en passant target and game status
//! - [`Bitboard`] - square sets used for move destinations
//! - Move generation, with and without the king-safety filter
//! - Check detection
//! - [`apply_move`] - the move applier, including castling, en passant and
//!   promotion
//! - [`Game`] - the facade collaborators drive, generic over a [`RuleSet`]
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! println!("Legal moves from starting position: {}", game.all_legal_moves().len());
//! assert!(game.legal_moves(e2).unwrap().contains(e4));
//!
//! game.apply_move(e2, e4).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! println!("Position after 1.e4: {}", game.board().to_fen());
//! ```

pub mod apply;
mod bitboard;
pub mod board;
mod error;
mod game;
pub mod movegen;
pub mod rules;

pub use apply::{apply_move, make_move, AppliedMove};
pub use bitboard::Bitboard;
pub use board::{Board, CastlingRights};
pub use error::GameError;
pub use game::Game;
pub use movegen::{
    all_legal_moves, attacks_from, has_legal_move, is_attacked, is_in_check, legal_moves,
    pseudo_legal_moves,
};
pub use rules::{GameStatus, RuleSet, StandardChess};
