use std::ops::{Index, IndexMut};

use crate::color::Color;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pair<T> {
    pub white: T,
    pub black: T,
}

impl<T> Index<Color> for Pair<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: Color) -> &T {
        match index {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl<T> IndexMut<Color> for Pair<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: Color) -> &mut T {
        match index {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

impl<T> Pair<T> {
    #[inline(always)]
    pub fn new(white: T, black: T) -> Self {
        Self { white, black }
    }

    /// Returns `(own, opponent)` from the point of view of `color`.
    #[inline(always)]
    pub fn get(self, color: Color) -> (T, T) {
        match color {
            Color::White => (self.white, self.black),
            Color::Black => (self.black, self.white),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair::new(f(self.white), f(self.black))
    }
}

impl<T: Copy> Pair<T> {
    #[inline(always)]
    pub fn both(value: T) -> Self {
        Self {
            white: value,
            black: value,
        }
    }
}
