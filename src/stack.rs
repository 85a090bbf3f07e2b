use std::fmt;

use crate::color::Color;

/// Colors buried beneath the top stone of a square.
///
/// Bit 0 holds the most recently buried color, bit `height - 1` the bottom of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Stack {
    bits: u64,
    height: u8,
}

#[inline(always)]
fn low_bits(count: u32) -> u64 {
    u64::MAX.checked_shr(u64::BITS - count).unwrap_or(0)
}

impl Stack {
    pub const EMPTY: Self = Self { bits: 0, height: 0 };
    pub const CAPACITY: u32 = u64::BITS;

    #[inline(always)]
    pub fn from_raw(bits: u64, height: u32) -> Self {
        debug_assert!(height <= Self::CAPACITY);
        debug_assert_eq!(bits & !low_bits(height), 0);

        Self {
            bits,
            height: height as u8,
        }
    }

    #[inline(always)]
    pub fn raw(self) -> u64 {
        self.bits
    }

    #[inline(always)]
    pub fn height(self) -> u32 {
        self.height as u32
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.height == 0
    }

    /// Color of the most recently buried stone.
    #[inline(always)]
    pub fn top(self) -> Option<Color> {
        (!self.is_empty()).then(|| Color::from_bit(self.bits))
    }

    /// Buries one more stone.
    #[inline(always)]
    pub fn push(&mut self, color: Color) {
        assert!(self.height() < Self::CAPACITY, "stack overflow");

        self.bits = self.bits << 1 | color.bit();
        self.height += 1;
    }

    /// Buries a whole stack; `other`'s bottom ends up directly on top of `self`.
    #[inline(always)]
    pub fn push_stack(&mut self, other: Self) {
        if self.is_empty() {
            *self = other;
            return;
        }

        assert!(self.height() + other.height() <= Self::CAPACITY, "stack overflow");

        self.bits = self.bits << other.height | other.bits;
        self.height += other.height;
    }

    /// Removes the `count` most recently buried colors.
    #[inline(always)]
    pub fn take(&mut self, count: u32) -> Self {
        debug_assert!(count <= self.height(), "stack underflow");

        let taken = Self::from_raw(self.bits & low_bits(count), count);
        self.bits = self.bits.checked_shr(count).unwrap_or(0);
        self.height -= count as u8;
        taken
    }

    /// Removes the `count` colors at the bottom of the stack.
    #[inline(always)]
    pub fn take_back(&mut self, count: u32) -> Self {
        debug_assert!(count <= self.height(), "stack underflow");

        let rest = self.height() - count;
        let taken = Self::from_raw(self.bits.checked_shr(rest).unwrap_or(0), count);
        self.bits &= low_bits(rest);
        self.height = rest as u8;
        taken
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Color {
        debug_assert!(!self.is_empty(), "stack underflow");

        let color = Color::from_bit(self.bits);
        self.bits >>= 1;
        self.height -= 1;
        color
    }

    #[inline(always)]
    pub fn pop_back(&mut self) -> Color {
        debug_assert!(!self.is_empty(), "stack underflow");

        self.height -= 1;
        let color = Color::from_bit(self.bits >> self.height);
        self.bits &= low_bits(self.height());
        color
    }

    /// Buried colors from the bottom of the stack upwards.
    pub fn colors(self) -> impl DoubleEndedIterator<Item = Color> + ExactSizeIterator {
        (0..self.height())
            .rev()
            .map(move |i| Color::from_bit(self.bits >> i))
    }
}

/// Stones dropped on each square of a spread, in walk order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DropCounts(u32);

impl DropCounts {
    /// Decodes a held-count pattern where bit `hand - h` marks entering a square holding `h` stones.
    #[inline(always)]
    pub fn new(pattern: u32, hand: u32) -> Self {
        debug_assert!(pattern != 0 && pattern < 1 << hand);

        let bits = pattern | 1 << hand;
        Self(bits >> bits.trailing_zeros())
    }
}

impl fmt::Display for DropCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut counts = *self;
        counts.try_for_each(|count| write!(f, "{count}"))
    }
}

impl Iterator for DropCounts {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        (self.0 > 1).then(|| {
            let rest = self.0 & !1;
            let r = rest.trailing_zeros();
            self.0 = rest >> r;
            r
        })
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.0.count_ones() as usize - 1
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let c = self.count();
        (c, Some(c))
    }
}
