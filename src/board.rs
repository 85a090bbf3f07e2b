//! Board types for every supported size, plus [`AnyBoard`] for picking one at runtime.

use std::fmt;

use log::debug;

use crate::{
    color::Color,
    error::{Error, Result},
    game::{size_of_tps, GameStatus, Options},
    perft::{AbortFlag, Aborted, Perft},
};

include!(concat!(env!("OUT_DIR"), "/board.rs"));

#[cfg(feature = "3")]
board!(size3 => Board3);

#[cfg(feature = "4")]
board!(size4 => Board4);

#[cfg(feature = "5")]
board!(size5 => Board5);

#[cfg(feature = "6")]
board!(size6 => Board6);

#[cfg(feature = "7")]
board!(size7 => Board7);

#[cfg(feature = "8")]
board!(size8 => Board8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyBoard {
    #[cfg(feature = "3")]
    Size3(Board3),
    #[cfg(feature = "4")]
    Size4(Board4),
    #[cfg(feature = "5")]
    Size5(Board5),
    #[cfg(feature = "6")]
    Size6(Board6),
    #[cfg(feature = "7")]
    Size7(Board7),
    #[cfg(feature = "8")]
    Size8(Board8),
}

macro_rules! dispatch {
    ($self:expr, $board:ident => $body:expr) => {
        match $self {
            #[cfg(feature = "3")]
            AnyBoard::Size3($board) => $body,
            #[cfg(feature = "4")]
            AnyBoard::Size4($board) => $body,
            #[cfg(feature = "5")]
            AnyBoard::Size5($board) => $body,
            #[cfg(feature = "6")]
            AnyBoard::Size6($board) => $body,
            #[cfg(feature = "7")]
            AnyBoard::Size7($board) => $body,
            #[cfg(feature = "8")]
            AnyBoard::Size8($board) => $body,
        }
    };
}

macro_rules! construct {
    ($size:expr, $ctor:ident => $body:expr) => {
        match $size {
            #[cfg(feature = "3")]
            3 => {
                use Board3 as $ctor;
                AnyBoard::Size3($body)
            }
            #[cfg(feature = "4")]
            4 => {
                use Board4 as $ctor;
                AnyBoard::Size4($body)
            }
            #[cfg(feature = "5")]
            5 => {
                use Board5 as $ctor;
                AnyBoard::Size5($body)
            }
            #[cfg(feature = "6")]
            6 => {
                use Board6 as $ctor;
                AnyBoard::Size6($body)
            }
            #[cfg(feature = "7")]
            7 => {
                use Board7 as $ctor;
                AnyBoard::Size7($body)
            }
            #[cfg(feature = "8")]
            8 => {
                use Board8 as $ctor;
                AnyBoard::Size8($body)
            }
            size => return Err(Error::UnsupportedSize(size)),
        }
    };
}

impl fmt::Display for AnyBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dispatch!(self, board => fmt::Display::fmt(board, f))
    }
}

impl AnyBoard {
    /// An empty board with the standard reserves for `size`.
    pub fn new(size: usize) -> Result<Self> {
        let opt = Options::default(size).ok_or(Error::UnsupportedSize(size))?;
        Self::with_options(size, &opt)
    }

    pub fn with_options(size: usize, opt: &Options) -> Result<Self> {
        debug!("creating {size}x{size} board");
        Ok(construct!(size, B => B::new(opt)))
    }

    pub fn from_tps(tps: &str) -> Result<Self> {
        let size = size_of_tps(tps);
        Ok(construct!(size, B => B::from_tps(tps)?))
    }

    pub fn size(&self) -> usize {
        dispatch!(self, board => board.size())
    }

    pub fn turn(&self) -> Color {
        dispatch!(self, board => board.turn())
    }

    pub fn movecount(&self) -> u32 {
        dispatch!(self, board => board.movecount())
    }

    pub fn road(&self) -> bool {
        dispatch!(self, board => board.road())
    }

    pub fn status(&self) -> GameStatus {
        dispatch!(self, board => board.status())
    }

    /// Every legal move in move notation.
    pub fn legal_moves(&self) -> Vec<String> {
        dispatch!(self, board => board.legal_moves().iter().map(ToString::to_string).collect())
    }

    /// Parses `mv` and plays it if it is legal.
    pub fn play(&mut self, mv: &str) -> Result<()> {
        dispatch!(self, board => board.play(mv.parse()?))
    }

    pub fn perft(&mut self, perft: &Perft) -> u64 {
        dispatch!(self, board => perft.run(board))
    }

    pub fn perft_abortable(&mut self, perft: &Perft, flag: &AbortFlag) -> Result<u64, Aborted> {
        dispatch!(self, board => perft.run_abortable(board, flag))
    }

    /// Per-move leaf counts, with moves in move notation.
    pub fn divide(&mut self, perft: &Perft) -> Vec<(String, u64)> {
        dispatch!(self, board => perft
            .divide(board)
            .into_iter()
            .map(|(mv, nodes)| (mv.to_string(), nodes))
            .collect())
    }
}
