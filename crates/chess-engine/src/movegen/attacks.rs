//! Attack patterns for all piece kinds.

use crate::Bitboard;
use chess_core::{Color, Square};

/// Precomputed knight attack tables.
const KNIGHT_ATTACKS: [Bitboard; 64] = compute_leaper_attacks(&[
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
]);

/// Precomputed king attack tables.
const KING_ATTACKS: [Bitboard; 64] = compute_leaper_attacks(&[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
]);

/// Precomputed pawn attack tables [color][square].
const PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    compute_leaper_attacks(&[(-1, -1), (-1, 1)]),
    compute_leaper_attacks(&[(1, -1), (1, 1)]),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Returns knight attacks from the given square.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

/// Returns king attacks from the given square (castling excluded).
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

/// Returns the two forward diagonals a pawn of the given color threatens.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index() as usize]
}

/// Returns bishop attacks from the given square.
///
/// Each ray stops at the first occupied square, which is included.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &DIAGONALS)
}

/// Returns rook attacks from the given square.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, &ORTHOGONALS)
}

/// Returns queen attacks from the given square.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

fn slide(from: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(rank_delta, file_delta) in directions {
        let mut current = from;
        while let Some(next) = current.offset(rank_delta, file_delta) {
            attacks.set(next);
            if occupied.contains(next) {
                break;
            }
            current = next;
        }
    }
    attacks
}

/// Computes single-step attacks for every square at compile time.
const fn compute_leaper_attacks(offsets: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bb = 0u64;

        let mut i = 0;
        while i < offsets.len() {
            let (rank_delta, file_delta) = offsets[i];
            let r = rank + rank_delta;
            let f = file + file_delta;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                bb |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }

        attacks[sq as usize] = Bitboard(bb);
        sq += 1;
    }

    attacks
}
