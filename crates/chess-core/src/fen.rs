//! FEN (Forsyth-Edwards Notation) position parsing.
//!
//! Only the fields that describe the position are interpreted: piece
//! placement, side to move, castling availability and the en passant target.
//! The halfmove clock and fullmove number may be present and must be
//! numeric, but they carry no meaning here.

use crate::{CastleSide, Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid move counter: {0}")]
    InvalidMoveCounter(String),
}

/// Piece placement indexed `[rank][file]`, rank 0 being the eighth rank.
pub type Placement = [[Option<Piece>; 8]; 8];

/// A parsed FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    pub placement: Placement,
    pub side_to_move: Color,
    /// Castling availability per `[color][side]`.
    pub castling: [[bool; 2]; 2],
    pub en_passant: Option<Square>,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        for counter in &parts[4..] {
            if counter.parse::<u32>().is_err() {
                return Err(FenError::InvalidMoveCounter(counter.to_string()));
            }
        }

        Ok(Fen {
            placement,
            side_to_move,
            castling,
            en_passant,
        })
    }

    fn parse_placement(placement: &str) -> Result<Placement, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut grid: Placement = [[None; 8]; 8];
        // FEN lists the eighth rank first, which is rank index 0.
        for (rank, row) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if file < 8 {
                        grid[rank][file] = Some(piece);
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - rank
                    )));
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - rank,
                    file
                )));
            }
        }

        Ok(grid)
    }

    fn parse_castling(castling: &str) -> Result<[[bool; 2]; 2], FenError> {
        let mut rights = [[false; 2]; 2];
        if castling == "-" {
            return Ok(rights);
        }

        for c in castling.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::Kingside),
                'Q' => (Color::White, CastleSide::Queenside),
                'k' => (Color::Black, CastleSide::Kingside),
                'q' => (Color::Black, CastleSide::Queenside),
                _ => {
                    return Err(FenError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            };
            rights[color.index()][side.index()] = true;
        }

        Ok(rights)
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            // Target squares only ever sit behind a double-pushed pawn.
            Some(sq) if sq.rank() == 2 || sq.rank() == 5 => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fen = Fen::parse(Fen::STARTPOS).unwrap();
        assert_eq!(fen.side_to_move, Color::White);
        assert_eq!(fen.castling, [[true; 2]; 2]);
        assert_eq!(fen.en_passant, None);
        assert_eq!(
            fen.placement[7][4],
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            fen.placement[0][3],
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(fen.placement[4], [None; 8]);
    }

    #[test]
    fn counters_are_optional() {
        let fen = Fen::parse("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
        assert_eq!(fen.side_to_move, Color::Black);
        assert_eq!(fen.castling, [[false; 2]; 2]);
    }

    #[test]
    fn partial_castling() {
        let fen = Fen::parse("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert_eq!(fen.castling[Color::White.index()], [true, false]);
        assert_eq!(fen.castling[Color::Black.index()], [false, true]);
    }

    #[test]
    fn en_passant_square() {
        let fen = Fen::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
        assert_eq!(fen.en_passant, Square::from_algebraic("e3"));
    }

    #[test]
    fn invalid_part_count() {
        assert_eq!(Fen::parse("invalid"), Err(FenError::InvalidPartCount(1)));
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        ));
    }

    #[test]
    fn invalid_active_color() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("9/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_castling_rights() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
    }

    #[test]
    fn invalid_en_passant() {
        for ep in ["abc", "x3", "e4"] {
            let fen = format!("8/8/8/8/8/8/8/8 w - {} 0 1", ep);
            assert_eq!(
                Fen::parse(&fen),
                Err(FenError::InvalidEnPassantSquare(ep.to_string()))
            );
        }
    }

    #[test]
    fn invalid_counters() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/8 w - - abc 1"),
            Err(FenError::InvalidMoveCounter(_))
        ));
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8/8 w - - 0 xyz"),
            Err(FenError::InvalidMoveCounter(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(3);
        assert!(format!("{}", err).contains('3'));

        let err = FenError::InvalidCastlingRights("XYZ".to_string());
        assert!(format!("{}", err).contains("XYZ"));
    }
}
