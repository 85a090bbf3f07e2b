use std::{fmt, mem::transmute, ops::Neg};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Right => ">",
            Self::Up => "+",
            Self::Left => "<",
            Self::Down => "-",
        })
    }
}

impl Neg for Direction {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        // Opposite directions differ in the second bit
        unsafe { transmute(self as u8 ^ 2) }
    }
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    #[inline(always)]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Self::Right,
            1 => Self::Up,
            2 => Self::Left,
            _ => Self::Down,
        }
    }
}

impl From<takparse::Direction> for Direction {
    fn from(direction: takparse::Direction) -> Self {
        match direction {
            takparse::Direction::Up => Self::Up,
            takparse::Direction::Down => Self::Down,
            takparse::Direction::Left => Self::Left,
            takparse::Direction::Right => Self::Right,
        }
    }
}

/// Iterates the directions whose bits are set in a 4-bit mask.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Directions(pub u8);

impl Iterator for Directions {
    type Item = Direction;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        (self.0 != 0).then(|| {
            let r = Direction::from_index(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            r
        })
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let c = self.0.count_ones() as usize;
        (c, Some(c))
    }
}
