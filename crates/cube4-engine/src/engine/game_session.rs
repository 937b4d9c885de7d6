use tracing::{debug, instrument};

use crate::{
    DropError, PlaceError,
    core::{BoardSize, Column, Coord, Grid, Player},
};

use super::{
    board_state::{BoardState, GameOutcome, PlacementResult},
    claw::{ClawState, DropPhase, LandingPreview, MoveDirection},
    snapshot::Snapshot,
    win_detector::WinningLine,
};

/// One game from reset to win or draw, plus the claw that feeds it.
///
/// All mutation goes through `&mut self`; a session holds no shared state,
/// so any number of independent sessions can exist side by side.
///
/// # Drop cycle
///
/// 1. [`move_claw`](Self::move_claw) positions the claw (only while idle)
/// 2. [`initiate_drop`](Self::initiate_drop) locks the column and returns the
///    landing row for the front end to animate towards
/// 3. [`complete_drop`](Self::complete_drop) places the piece and spawns a
///    new centred claw, unless the game just ended
///
/// [`place`](Self::place) skips the claw entirely.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    claw: ClawState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

impl GameSession {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: BoardState::new(size),
            claw: ClawState::new(size),
        }
    }

    /// Starts a new game, discarding the board and any drop in progress.
    pub fn reset(&mut self, size: BoardSize) {
        self.board.reset(size);
        self.claw.respawn(size);
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.board.outcome()
    }

    #[must_use]
    pub fn status_message(&self) -> &str {
        self.board.status_message()
    }

    #[must_use]
    pub fn last_placed(&self) -> Option<Coord> {
        self.board.last_placed()
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.board.winning_line()
    }

    #[must_use]
    pub fn claw(&self) -> &ClawState {
        &self.claw
    }

    #[must_use]
    pub fn claw_position(&self) -> Column {
        self.claw.position()
    }

    #[must_use]
    pub fn drop_phase(&self) -> DropPhase {
        self.claw.phase()
    }

    /// Returns whether the claw currently accepts movement and drops.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.claw.phase().is_idle() && !self.is_game_over()
    }

    /// Places a piece directly, bypassing the claw.
    pub fn place(&mut self, x: usize, z: usize) -> Result<PlacementResult, PlaceError> {
        self.board.place(x, z)
    }

    /// Moves the claw one step, clamped to the board.
    ///
    /// Ignored while a piece is dropping or after the game has ended.
    pub fn move_claw(&mut self, direction: MoveDirection) -> Column {
        if self.is_game_over() {
            return self.claw.position();
        }
        let before = self.claw.position();
        let position = self.claw.shift(direction, self.size());
        if position != before {
            debug!(%direction, %position, "claw moved");
        }
        position
    }

    /// Starts dropping a piece into the column under the claw.
    #[instrument(skip(self), fields(column = %self.claw.position()))]
    pub fn initiate_drop(&mut self) -> Result<LandingPreview, DropError> {
        if self.is_game_over() {
            return Err(DropError::GameOver);
        }
        if !self.claw.phase().is_idle() {
            return Err(DropError::NotIdle);
        }
        let column = self.claw.position();
        let row = match self.board.landing_row(column) {
            Ok(row) => row,
            Err(PlaceError::ColumnFull) => {
                debug!("column is full, drop refused");
                self.board.note_column_full();
                return Err(DropError::ColumnFull);
            }
            Err(err) => return Err(err.into()),
        };
        self.claw.begin_drop();
        debug!(row, "drop started");
        Ok(LandingPreview { column, row })
    }

    /// Places the dropping piece once it has reached its landing row.
    ///
    /// A new idle claw is spawned afterwards unless the game is over, in which
    /// case the claw stays [`DropPhase::Landed`].
    #[instrument(skip(self))]
    pub fn complete_drop(&mut self) -> Result<PlacementResult, DropError> {
        if !self.claw.phase().is_dropping() {
            return Err(DropError::NotDropping);
        }
        let Some(column) = self.claw.land() else {
            return Err(DropError::NotDropping);
        };
        let result = self.board.place(column.x, column.z);
        if !self.is_game_over() {
            self.claw.respawn(self.size());
        }
        Ok(result?)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self)
    }
}
