//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates, with fail-fast construction
//! - [`Move`], [`MoveKind`] and [`CastleSide`] for move representation
//! - FEN position parsing

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError, Placement};
pub use mov::{CastleSide, Move, MoveKind};
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareError};
