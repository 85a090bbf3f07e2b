#![allow(
	clippy::precedence, // Personal opinion
	clippy::comparison_chain, // Required for optimal performance at the time of writing
)]

pub mod bitboard;
pub mod board;
pub mod color;
pub mod direction;
pub mod error;
pub mod game;
pub mod pair;
pub mod params;
pub mod perft;
pub mod piece;
pub mod stack;

pub use board::AnyBoard;
pub use error::{Error, Result};
