//! Board state: piece grid plus the rule state that travels with it.

use chess_core::{CastleSide, Color, Fen, FenError, Piece, PieceKind, Square};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

use crate::rules::GameStatus;
use crate::Bitboard;

/// Castling availability, tracked as monotone "has moved" flags.
///
/// Each king and each home-corner rook has its own flag. A flag is only ever
/// set, never cleared, so castling rights can only go from available to
/// unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved: every castle is still available.
    pub const ALL: CastlingRights = CastlingRights(0);
    /// Every king and rook flag is set: no castle is available.
    pub const NONE: CastlingRights = CastlingRights(0b11_1111);

    const fn king_bit(color: Color) -> u8 {
        1 << (color.index() * 3)
    }

    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        1 << (color.index() * 3 + 1 + side.index())
    }

    /// Returns true if this color's king has left its home square.
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    /// Returns true if the rook starting on this corner has moved or been
    /// captured there.
    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    /// Returns true if neither the king nor the rook of that side has moved.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl Serialize for CastlingRights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CastlingRights", 4)?;
        state.serialize_field(
            "white_kingside",
            &self.can_castle(Color::White, CastleSide::Kingside),
        )?;
        state.serialize_field(
            "white_queenside",
            &self.can_castle(Color::White, CastleSide::Queenside),
        )?;
        state.serialize_field(
            "black_kingside",
            &self.can_castle(Color::Black, CastleSide::Kingside),
        )?;
        state.serialize_field(
            "black_queenside",
            &self.can_castle(Color::Black, CastleSide::Queenside),
        )?;
        state.end()
    }
}

/// The square a king starts on.
#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// The corner a castling rook starts on.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => Square::H1,
        (Color::White, CastleSide::Queenside) => Square::A1,
        (Color::Black, CastleSide::Kingside) => Square::H8,
        (Color::Black, CastleSide::Queenside) => Square::A8,
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete board state.
///
/// The grid is indexed `[rank][file]` with rank 0 being black's back rank.
/// Fields are only writable inside the engine; collaborators read through
/// the accessors and change the board through the move applier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) status: GameStatus,
}

impl Board {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut grid = [[None; 8]; 8];
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            grid[Color::Black.back_rank() as usize][file] = Some(Piece::new(kind, Color::Black));
            grid[Color::White.back_rank() as usize][file] = Some(Piece::new(kind, Color::White));
        }
        for file in 0..8 {
            grid[Color::Black.pawn_start_rank() as usize][file] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            grid[Color::White.pawn_start_rank() as usize][file] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
        }

        Board {
            grid,
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            status: GameStatus::InProgress,
        }
    }

    /// Creates a board from a FEN string.
    ///
    /// Missing castling letters mark the matching rook as moved; a color with
    /// no castling letter at all has its king marked as moved. The status is
    /// evaluated for the side to move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;

        for color in Color::BOTH {
            let kings = parsed
                .placement
                .iter()
                .flatten()
                .filter(|p| **p == Some(Piece::new(PieceKind::King, color)))
                .count();
            if kings != 1 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "expected exactly one {} king, found {}",
                    color.to_string().to_lowercase(),
                    kings
                )));
            }
        }

        let mut castling = CastlingRights::ALL;
        for color in Color::BOTH {
            let rights = parsed.castling[color.index()];
            if !rights.contains(&true) {
                castling.mark_king_moved(color);
            }
            for side in CastleSide::BOTH {
                if !rights[side.index()] {
                    castling.mark_rook_moved(color, side);
                }
            }
        }

        let mut board = Board {
            grid: parsed.placement,
            side_to_move: parsed.side_to_move,
            castling,
            en_passant: parsed.en_passant,
            status: GameStatus::InProgress,
        };
        crate::apply::refresh_status(&mut board);
        Ok(board)
    }

    /// Converts the board to a FEN string. Move counters are always `0 1`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for (rank, row) in self.grid.iter().enumerate() {
            let mut empty_count = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let mut any = false;
        for (color, side, c) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if self.castling.can_castle(color, side) {
                fen.push(c);
                any = true;
            }
        }
        if !any {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank() as usize][sq.file() as usize]
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the castling rights.
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the square a pawn may capture into en passant this ply.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the game status as of the last applied move.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.iter().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Iterates over every occupied square.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.color == color)
    }

    /// Returns the squares occupied by either color.
    pub fn occupied(&self) -> Bitboard {
        self.iter().map(|(sq, _)| sq).collect()
    }

    /// Returns the squares occupied by one color.
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces(color).map(|(sq, _)| sq).collect()
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank() as usize][sq.file() as usize].take()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.grid.iter().enumerate() {
            write!(f, "{} ", 8 - rank)?;
            for square in row {
                match square {
                    Some(piece) => write!(f, "{} ", piece.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
