use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

/// Set of squares, one bit per square index (`rank * size + file`).
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(pub u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bitboard({:#x})", self.0)
    }
}

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    #[inline(always)]
    pub const fn bit(index: u32) -> Self {
        Self(1 << index)
    }

    /// Every square of a `size` by `size` board.
    pub const fn board(size: usize) -> Self {
        let squares = size * size;
        Self(if squares == 64 { !0 } else { (1 << squares) - 1 })
    }

    pub const fn rank(rank: usize, size: usize) -> Self {
        Self(((1 << size) - 1) << rank * size)
    }

    pub const fn file(file: usize, size: usize) -> Self {
        let mut mask = 0;
        let mut rank = 0;
        while rank < size {
            mask |= 1 << file + rank * size;
            rank += 1;
        }
        Self(mask)
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub const fn contains(self, index: u32) -> bool {
        self.0 >> index & 1 != 0
    }

    #[inline(always)]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Squares orthogonally adjacent to any member, clipped to the board.
    #[inline(always)]
    pub const fn neighbors(self, size: usize) -> Self {
        let left_edge = Self::file(0, size).0;
        let right_edge = Self::file(size - 1, size).0;
        let b = self.0;

        Self(
            (b << 1 & !left_edge | b >> 1 & !right_edge | b << size | b >> size)
                & Self::board(size).0,
        )
    }

    /// Grows `self` through orthogonal neighbors inside `within` until it stops changing.
    pub fn flood(self, within: Self, size: usize) -> Self {
        let mut curr = self & within;
        loop {
            let next = (curr | curr.neighbors(size)) & within;
            if next == curr {
                return curr;
            }
            curr = next;
        }
    }

    #[inline(always)]
    pub fn iter(self) -> Bits {
        Bits(self.0)
    }
}

macro_rules! bitboard_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op for Bitboard {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                Self($Op::$op(self.0, rhs.0))
            }
        }

        impl $OpAssign for Bitboard {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                $OpAssign::$op_assign(&mut self.0, rhs.0)
            }
        }
    };
}

bitboard_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
bitboard_op!(BitOr, bitor, BitOrAssign, bitor_assign);
bitboard_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl Shl<usize> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: usize) -> Self {
        Self(self.0 << rhs)
    }
}

impl Shr<usize> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: usize) -> Self {
        Self(self.0 >> rhs)
    }
}

impl IntoIterator for Bitboard {
    type Item = u32;
    type IntoIter = Bits;

    #[inline(always)]
    fn into_iter(self) -> Bits {
        self.iter()
    }
}

/// Indices of the set bits, lowest first.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bits(u64);

impl Iterator for Bits {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        (self.0 != 0).then(|| (self.0.trailing_zeros(), self.0 &= self.0 - 1).0)
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let c = self.0.count_ones() as usize;
        (c, Some(c))
    }
}
