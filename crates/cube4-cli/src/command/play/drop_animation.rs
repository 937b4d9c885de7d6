use cube4_engine::{BoardSize, Coord, LandingPreview, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropProgress {
    Falling,
    Landed,
}

/// A piece on its way down between `initiate_drop` and `complete_drop`.
///
/// The piece enters one row above the cube and moves down one row per step.
/// Once it has been shown in the landing row, the next step reports
/// [`DropProgress::Landed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropAnimation {
    target: LandingPreview,
    player: Player,
    size: BoardSize,
    height: usize,
}

impl DropAnimation {
    pub fn new(target: LandingPreview, player: Player, size: BoardSize) -> Self {
        Self {
            target,
            player,
            size,
            height: size.get(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn target(&self) -> LandingPreview {
        self.target
    }

    /// Cell the piece is drawn in, or `None` while it is still above the cube.
    pub fn position(&self) -> Option<Coord> {
        self.size
            .contains(self.height)
            .then(|| self.target.column.at(self.height))
    }

    pub fn step(&mut self) -> DropProgress {
        if self.height > self.target.row {
            self.height -= 1;
            DropProgress::Falling
        } else {
            DropProgress::Landed
        }
    }
}
