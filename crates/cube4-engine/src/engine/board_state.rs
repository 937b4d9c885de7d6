use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    PlaceError,
    core::{BoardSize, Column, Coord, Grid, Player},
};

use super::win_detector::WinningLine;

pub const COLUMN_FULL_MESSAGE: &str = "Column is full!";
pub const DRAW_MESSAGE: &str = "It's a Draw!";

fn turn_message(player: Player) -> String {
    format!("Player {player}'s Turn")
}

fn win_message(player: Player) -> String {
    format!("Player {player} Wins!")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What happened when a piece was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementResult {
    /// Where the piece came to rest; `coord.y` is the landing row.
    pub coord: Coord,
    /// Who placed the piece.
    pub player: Player,
    pub outcome: Option<GameOutcome>,
    pub status: String,
}

impl PlacementResult {
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Grid occupancy plus the turn state machine.
///
/// The grid only changes through [`BoardState::place`] and [`BoardState::reset`].
/// Once a win or draw is recorded every further placement is rejected until
/// the next reset.
#[derive(Debug, Clone)]
pub struct BoardState {
    grid: Grid,
    current_player: Player,
    outcome: Option<GameOutcome>,
    status_message: String,
    last_placed: Option<Coord>,
    winning_line: Option<WinningLine>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

impl BoardState {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            grid: Grid::new(size),
            current_player: Player::One,
            outcome: None,
            status_message: turn_message(Player::One),
            last_placed: None,
            winning_line: None,
        }
    }

    /// Starts a new game on an empty board of `size`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: BoardSize) {
        if size == self.grid.size() {
            self.grid.clear();
        } else {
            self.grid = Grid::new(size);
        }
        self.current_player = Player::One;
        self.outcome = None;
        self.status_message = turn_message(Player::One);
        self.last_placed = None;
        self.winning_line = None;
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    #[must_use]
    pub fn last_placed(&self) -> Option<Coord> {
        self.last_placed
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Lowest empty row of `column`, without placing anything.
    pub fn landing_row(&self, column: Column) -> Result<usize, PlaceError> {
        self.check_column(column)?;
        self.grid.landing_row(column).ok_or(PlaceError::ColumnFull)
    }

    /// Drops the current player's piece into column `(x, z)`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, x: usize, z: usize) -> Result<PlacementResult, PlaceError> {
        let column = Column::new(x, z);
        self.check_column(column)?;
        if self.is_game_over() {
            return Err(PlaceError::GameOver);
        }
        let Some(y) = self.grid.landing_row(column) else {
            debug!(%column, "column is full");
            self.note_column_full();
            return Err(PlaceError::ColumnFull);
        };

        let player = self.current_player;
        let coord = column.at(y);
        self.grid.set(coord, player.to_cell());
        self.last_placed = Some(coord);
        debug!(%coord, "piece placed");

        if let Some(line) = self.grid.winning_line(coord, player) {
            info!(%player, direction = %line.direction, "four in a row");
            self.winning_line = Some(line);
            self.outcome = Some(GameOutcome::Winner(player));
            self.status_message = win_message(player);
        } else if self.grid.check_draw() {
            info!("board is full, game drawn");
            self.outcome = Some(GameOutcome::Draw);
            self.status_message = DRAW_MESSAGE.to_owned();
        } else {
            self.current_player = player.other();
            self.status_message = turn_message(self.current_player);
        }

        Ok(PlacementResult {
            coord,
            player,
            outcome: self.outcome,
            status: self.status_message.clone(),
        })
    }

    pub(crate) fn note_column_full(&mut self) {
        self.status_message = COLUMN_FULL_MESSAGE.to_owned();
    }

    fn check_column(&self, column: Column) -> Result<(), PlaceError> {
        if column.is_inside(self.grid.size()) {
            Ok(())
        } else {
            Err(PlaceError::InvalidCoordinate {
                x: column.x,
                z: column.z,
                size: self.grid.size().get(),
            })
        }
    }
}
