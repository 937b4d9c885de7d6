use serde::{Deserialize, Serialize};

use crate::InvalidCellValueError;

/// One of the two players. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    #[display("1")]
    One,
    #[display("2")]
    Two,
}

impl Player {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    #[must_use]
    pub const fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidCellValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(InvalidCellValueError { value }),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

/// Occupancy of a single grid cell.
///
/// Serialized as `0` for empty and the player number otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            _ => Player::try_from(value).map(Cell::Occupied),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.player().map_or(0, Player::number)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}
