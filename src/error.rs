use crate::color::Color;

/// Errors caused by malformed or illegal external input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported board size {0}")]
    UnsupportedSize(usize),

    #[error("invalid position string: {0}")]
    InvalidTps(String),

    #[error("position is {found}x{found}, expected {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("position uses more pieces than {color} has in reserve")]
    ReserveExhausted { color: Color },

    #[error("stack is taller than {0} stones")]
    StackTooTall(u32),

    #[error("invalid move notation: {0}")]
    InvalidMove(String),

    #[error("move {0} leaves the board")]
    MoveOffBoard(String),

    #[error("move {0} is not legal in this position")]
    IllegalMove(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
