use std::{fmt, str::FromStr};

use crate::{color::Color, error::Error, pair::Pair};

/// Starting reserves for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub start_stones: Pair<u32>,
    pub start_caps: Pair<u32>,
}

impl Options {
    pub fn default(size: usize) -> Option<Self> {
        let (stones, caps) = match size {
            3 => (10, 0),
            4 => (15, 0),
            5 => (21, 1),
            6 => (30, 1),
            7 => (40, 2),
            8 => (50, 2),
            _ => return None,
        };

        Some(Self {
            start_stones: Pair::both(stones),
            start_caps: Pair::both(caps),
        })
    }
}

/// Board size implied by a position string.
pub fn size_of_tps(tps: &str) -> usize {
    tps.split_whitespace()
        .next()
        .map_or(0, |rows| rows.bytes().filter(|&c| c == b'/').count() + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinKind {
    Road,
    Flats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Win { color: Color, kind: WinKind },
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != Self::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ongoing => f.write_str("ongoing"),
            Self::Win { color, kind } => write!(
                f,
                "{color} wins by {}",
                match kind {
                    WinKind::Road => "road",
                    WinKind::Flats => "flats",
                }
            ),
            Self::Draw => f.write_str("draw"),
        }
    }
}

/// Rules engine for one board size.
pub trait Game: Clone + PartialEq + fmt::Debug + fmt::Display {
    type Move: Copy + PartialEq + fmt::Debug + fmt::Display + FromStr<Err = Error>;

    /// Appends every legal move to `moves`.
    fn generate_moves(&self, moves: &mut Vec<Self::Move>);

    /// Applies a move produced by [`Game::generate_moves`] for this position.
    fn make_move(&mut self, mv: Self::Move);

    /// Reverts the most recent [`Game::make_move`], which must have been given `mv`.
    fn unmake_move(&mut self, mv: Self::Move);

    /// Whether either player has a road.
    fn road(&self) -> bool;

    fn status(&self) -> GameStatus;

    fn turn(&self) -> Color;

    fn movecount(&self) -> u32;
}
