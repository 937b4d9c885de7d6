//! Game-state and win-detection engine for a 3D four-in-a-row game.
//!
//! Two players alternately drop pieces into an N×N×N cube through a movable
//! claw. A piece falls to the lowest empty cell of its column, and the first
//! player to line up four pieces along any of the 13 spatial directions wins.
//!
//! - [`core`] - Board geometry: [`Grid`], [`Cell`], [`Player`], [`Direction`]
//! - [`engine`] - Game rules: [`BoardState`], win detection, [`ClawState`],
//!   and the [`GameSession`] aggregate that ties them together

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when placing a piece directly into a column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PlaceError {
    #[display("column is full")]
    ColumnFull,
    #[display("game is already over")]
    GameOver,
    #[display("column ({x}, {z}) is outside a board of size {size}")]
    InvalidCoordinate { x: usize, z: usize, size: usize },
}

/// Error returned by the claw drop state machine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum DropError {
    #[display("column is full")]
    #[from(ignore)]
    ColumnFull,
    #[display("game is already over")]
    #[from(ignore)]
    GameOver,
    #[display("a piece is already dropping")]
    #[from(ignore)]
    NotIdle,
    #[display("no piece is dropping")]
    #[from(ignore)]
    NotDropping,
    #[display("failed to place dropped piece: {_0}")]
    Place(PlaceError),
}

/// Error returned when a board dimension is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size {size} is not between 1 and 32")]
pub struct InvalidBoardSizeError {
    pub size: usize,
}

/// Error returned when parsing a board size from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseBoardSizeError {
    #[display("invalid board size: {_0}")]
    NotANumber(std::num::ParseIntError),
    #[display("{_0}")]
    OutOfRange(InvalidBoardSizeError),
}

/// Error returned when decoding a cell or player from its numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value: {value}")]
pub struct InvalidCellValueError {
    pub value: u8,
}
