//! 64-bit square-set value type.
//!
//! Bit `s` of a [`Bitboard`] is set when the condition it represents holds on
//! square `s` (`0 == a1`, `7 == h1`, `63 == h8`). Every operation returns a new
//! value; nothing mutates in place behind the caller's back.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Single-square set. Indices of 64 and above give [`Bitboard::EMPTY`].
    #[inline]
    pub const fn from_square(square: Square) -> Self {
        match 1u64.checked_shl(square as u32) {
            Some(bits) => Bitboard(bits),
            None => Bitboard::EMPTY,
        }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & Bitboard::from_square(square).0 != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn with(self, square: Square) -> Self {
        Bitboard(self.0 | Bitboard::from_square(square).0)
    }

    #[inline]
    pub const fn without(self, square: Square) -> Self {
        Bitboard(self.0 & !Bitboard::from_square(square).0)
    }

    /// Shift toward higher square indices. Shifting by 64 or more empties the set.
    #[inline]
    pub const fn shl(self, count: u32) -> Self {
        match self.0.checked_shl(count) {
            Some(bits) => Bitboard(bits),
            None => Bitboard::EMPTY,
        }
    }

    /// Shift toward lower square indices. Shifting by 64 or more empties the set.
    #[inline]
    pub const fn shr(self, count: u32) -> Self {
        match self.0.checked_shr(count) {
            Some(bits) => Bitboard(bits),
            None => Bitboard::EMPTY,
        }
    }

    /// Set squares in ascending order.
    #[inline]
    pub const fn squares(self) -> Squares {
        Squares { remaining: self.0 }
    }
}

/// Single-pass producer of the set squares of a bitboard, lowest first.
#[derive(Debug, Clone)]
pub struct Squares {
    remaining: u64,
}

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        let square = self.remaining.trailing_zeros() as Square;
        self.remaining &= self.remaining - 1;
        Some(square)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Squares {
        self.squares()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |acc, square| acc.with(square))
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

/// Eight rows of `1`/`.`, rank 8 on top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let mark = if self.contains(rank * 8 + file) { '1' } else { '.' };
                write!(f, "{mark}")?;
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
