use std::fmt;

use crate::color::Color;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Flat = 0b01,
    Wall = 0b10,
    Cap = 0b11,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "",
            Self::Wall => "S",
            Self::Cap => "C",
        })
    }
}

impl Piece {
    pub const ALL: [Self; 3] = [Self::Flat, Self::Wall, Self::Cap];

    #[inline(always)]
    pub const fn is_road(self) -> bool {
        self as u8 & 1 != 0
    }

    #[inline(always)]
    pub const fn is_block(self) -> bool {
        self as u8 & 2 != 0
    }

    /// Whether the piece is drawn from the regular stone reserve.
    #[inline(always)]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Self::Cap)
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl From<takparse::Piece> for Piece {
    fn from(piece: takparse::Piece) -> Self {
        match piece {
            takparse::Piece::Flat => Self::Flat,
            takparse::Piece::Wall => Self::Wall,
            takparse::Piece::Cap => Self::Cap,
        }
    }
}

impl From<Piece> for takparse::Piece {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Flat => Self::Flat,
            Piece::Wall => Self::Wall,
            Piece::Cap => Self::Cap,
        }
    }
}

/// A piece of a given color sitting on top of a square.
///
/// The discriminant is `piece << 1 | color`, so it is never zero and
/// `Option<Stone>` stays one byte wide with `None` for an empty square.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    WhiteFlat = 0b010,
    BlackFlat = 0b011,
    WhiteWall = 0b100,
    BlackWall = 0b101,
    WhiteCap = 0b110,
    BlackCap = 0b111,
}

impl Stone {
    #[inline(always)]
    pub const fn new(piece: Piece, color: Color) -> Self {
        match (piece, color) {
            (Piece::Flat, Color::White) => Self::WhiteFlat,
            (Piece::Flat, Color::Black) => Self::BlackFlat,
            (Piece::Wall, Color::White) => Self::WhiteWall,
            (Piece::Wall, Color::Black) => Self::BlackWall,
            (Piece::Cap, Color::White) => Self::WhiteCap,
            (Piece::Cap, Color::Black) => Self::BlackCap,
        }
    }

    #[inline(always)]
    pub const fn flat(color: Color) -> Self {
        Self::new(Piece::Flat, color)
    }

    #[inline(always)]
    pub const fn piece(self) -> Piece {
        match self as u8 >> 1 {
            0b01 => Piece::Flat,
            0b10 => Piece::Wall,
            _ => Piece::Cap,
        }
    }

    #[inline(always)]
    pub const fn color(self) -> Color {
        Color::from_bit(self as u64)
    }

    #[inline(always)]
    pub const fn is_road(self) -> bool {
        self.piece().is_road()
    }

    #[inline(always)]
    pub const fn is_block(self) -> bool {
        self.piece().is_block()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.color().number(), self.piece())
    }
}
