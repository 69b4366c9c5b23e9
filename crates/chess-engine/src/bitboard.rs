//! Square sets.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! board. The move generator returns destination sets in this form, which
//! keeps membership tests and unions cheap for both the engine and callers
//! that highlight candidate squares.

use chess_core::Square;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of squares.
///
/// Bit `n` is the square with index `n`, so bit 0 = a8 and bit 63 = h1.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.index())
    }

    /// Returns true if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bitboard is not empty.
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Self::from_square(sq).0 != 0
    }

    /// Sets the given square.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        *self |= Self::from_square(sq);
    }

    /// Pops and returns the lowest-indexed square.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(sq)
        }
    }

    /// Returns the squares as a sorted vector.
    pub fn to_vec(self) -> Vec<Square> {
        self.into_iter().collect()
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.set(sq);
        }
        bb
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for rank in 0..8u8 {
            write!(f, "{} ", 8 - rank)?;
            for file in 0..8u8 {
                if (self.0 >> (rank * 8 + file)) & 1 == 1 {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Serialized as a list of algebraic squares, which is what a
/// highlighting front end wants.
impl Serialize for Bitboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq((*self).into_iter())
    }
}

/// Iterator over set squares in a bitboard.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn bitboard_from_square() {
        let bb = Bitboard::from_square(Square::A8);
        assert_eq!(bb.0, 1);
        assert!(bb.contains(Square::A8));
        assert!(!bb.contains(Square::B8));
    }

    #[test]
    fn bitboard_set() {
        let mut bb = Bitboard::EMPTY;
        bb.set(sq("e4"));
        bb.set(sq("d5"));
        bb.set(sq("e4"));
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(sq("d5")));
        assert!(!bb.contains(sq("d4")));
    }

    #[test]
    fn bitboard_count() {
        assert_eq!(Bitboard::EMPTY.count(), 0);
        assert_eq!((!Bitboard::EMPTY).count(), 64);
        assert_eq!((!Bitboard::from_square(Square::H1)).count(), 63);
    }

    #[test]
    fn bitboard_iterator_order() {
        let bb: Bitboard = [Square::H1, Square::A8, sq("e4")].into_iter().collect();
        assert_eq!(bb.to_vec(), vec![Square::A8, sq("e4"), Square::H1]);
        assert_eq!(bb.into_iter().len(), 3);
    }

    #[test]
    fn bitboard_pop_lsb() {
        let mut bb = Bitboard(0b1010);
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(1));
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(3));
        assert_eq!(bb.pop_lsb(), None);
    }
}
