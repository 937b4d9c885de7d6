use serde::{Deserialize, Serialize};

use super::{board_size::BoardSize, direction::Direction};

/// A vertical column of the cube, addressed by its horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[derive(Serialize, Deserialize)]
#[display("({x}, {z})")]
pub struct Column {
    pub x: usize,
    pub z: usize,
}

impl Column {
    #[must_use]
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }

    /// The column in the middle of the board.
    #[must_use]
    pub const fn center(size: BoardSize) -> Self {
        Self::new(size.center(), size.center())
    }

    #[must_use]
    pub const fn is_inside(self, size: BoardSize) -> bool {
        size.contains(self.x) && size.contains(self.z)
    }

    #[must_use]
    pub const fn at(self, y: usize) -> Coord {
        Coord::new(self.x, y, self.z)
    }
}

/// A single cell position. `y` is the height, with `0` at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[derive(Serialize, Deserialize)]
#[display("({x}, {y}, {z})")]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn column(self) -> Column {
        Column::new(self.x, self.z)
    }

    #[must_use]
    pub const fn is_inside(self, size: BoardSize) -> bool {
        size.contains(self.x) && size.contains(self.y) && size.contains(self.z)
    }

    /// Walks `steps` cells along `direction` (negative steps walk backwards).
    ///
    /// Returns `None` as soon as any axis leaves the board.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: isize, size: BoardSize) -> Option<Self> {
        Some(Self {
            x: size.offset(self.x, direction.dx * steps)?,
            y: size.offset(self.y, direction.dy * steps)?,
            z: size.offset(self.z, direction.dz * steps)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_walks_both_ways() {
        let size = BoardSize::DEFAULT;
        let dir = Direction::new(1, -1, 0);
        let origin = Coord::new(2, 2, 2);
        assert_eq!(origin.offset(dir, 2, size), Some(Coord::new(4, 0, 2)));
        assert_eq!(origin.offset(dir, -2, size), Some(Coord::new(0, 4, 2)));
        assert_eq!(origin.offset(dir, 3, size), None);
    }

    #[test]
    fn test_column_center_and_bounds() {
        let size = BoardSize::DEFAULT;
        assert_eq!(Column::center(size), Column::new(2, 2));
        assert!(Column::new(4, 0).is_inside(size));
        assert!(!Column::new(5, 0).is_inside(size));
        assert_eq!(Column::new(1, 3).at(4), Coord::new(1, 4, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Column::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Coord::new(1, 0, 2).to_string(), "(1, 0, 2)");
    }
}
