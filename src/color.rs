use std::{fmt, ops::Not};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// Bit stored in a [`Stack`](crate::stack::Stack) for a buried stone of this color.
    #[inline(always)]
    pub const fn bit(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    pub const fn from_bit(bit: u64) -> Self {
        if bit & 1 == 0 {
            Self::White
        } else {
            Self::Black
        }
    }

    /// Player number as written in position strings.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl From<takparse::Color> for Color {
    fn from(color: takparse::Color) -> Self {
        match color {
            takparse::Color::White => Self::White,
            takparse::Color::Black => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}
