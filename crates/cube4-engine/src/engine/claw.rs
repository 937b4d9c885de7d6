use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, Column};

/// Where the claw is in its drop cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPhase {
    /// Holding a piece above the grid; may move and drop.
    #[default]
    Idle,
    /// A piece is falling. The front end animates it and then completes the drop.
    Dropping,
    /// The piece has been placed and the game ended; no new piece is spawned.
    Landed,
}

/// Horizontal claw movement. Left/right move along x, up/down along z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("up")]
    Up,
    #[display("down")]
    Down,
}

impl MoveDirection {
    /// Change of `(x, z)` for one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Up => (0, -1),
            MoveDirection::Down => (0, 1),
        }
    }
}

/// Landing target handed to the front end when a drop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPreview {
    pub column: Column,
    /// Row the piece will come to rest in.
    pub row: usize,
}

/// Position and drop phase of the claw above the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawState {
    position: Column,
    phase: DropPhase,
    pending_column: Option<Column>,
}

impl ClawState {
    /// An idle claw over the centre column.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            position: Column::center(size),
            phase: DropPhase::Idle,
            pending_column: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Column {
        self.position
    }

    #[must_use]
    pub fn phase(&self) -> DropPhase {
        self.phase
    }

    /// Column captured when the current drop started.
    #[must_use]
    pub fn pending_column(&self) -> Option<Column> {
        self.pending_column
    }

    /// Moves one step in `direction`, pinned to the board edges.
    ///
    /// Does nothing unless the claw is idle.
    pub(crate) fn shift(&mut self, direction: MoveDirection, size: BoardSize) -> Column {
        if self.phase.is_idle() {
            let (dx, dz) = direction.delta();
            self.position = Column::new(
                size.offset_clamped(self.position.x, dx),
                size.offset_clamped(self.position.z, dz),
            );
        }
        self.position
    }

    pub(crate) fn begin_drop(&mut self) -> Column {
        debug_assert!(self.phase.is_idle());
        self.phase = DropPhase::Dropping;
        self.pending_column = Some(self.position);
        self.position
    }

    /// Takes the captured column and marks the piece as landed.
    pub(crate) fn land(&mut self) -> Option<Column> {
        debug_assert!(self.phase.is_dropping());
        self.phase = DropPhase::Landed;
        self.pending_column.take()
    }

    /// Replaces the claw with a fresh idle one over the centre column.
    pub(crate) fn respawn(&mut self, size: BoardSize) {
        *self = Self::new(size);
    }
}
