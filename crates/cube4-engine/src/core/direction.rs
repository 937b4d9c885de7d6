use serde::{Deserialize, Serialize};

/// A line direction through the cube.
///
/// Only one of each opposite pair is listed in [`DIRECTIONS`]; line checks
/// walk both ways from the origin, so `(-1, 0, 0)` is covered by `(1, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[derive(Serialize, Deserialize)]
#[display("({dx}, {dy}, {dz})")]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
    pub dz: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum DirectionKind {
    /// Parallel to a single axis.
    #[display("axial")]
    Axial,
    /// Diagonal within one of the xy, xz or yz planes.
    #[display("planar diagonal")]
    Planar,
    /// Diagonal through all three axes.
    #[display("space diagonal")]
    Space,
}

/// The 13 canonical directions: 3 axial, 6 planar diagonals, 4 space diagonals.
pub const DIRECTIONS: [Direction; 13] = [
    // axial
    Direction::new(1, 0, 0),
    Direction::new(0, 1, 0),
    Direction::new(0, 0, 1),
    // planar
    Direction::new(1, 1, 0),
    Direction::new(1, -1, 0),
    Direction::new(1, 0, 1),
    Direction::new(1, 0, -1),
    Direction::new(0, 1, 1),
    Direction::new(0, 1, -1),
    // space
    Direction::new(1, 1, 1),
    Direction::new(1, 1, -1),
    Direction::new(1, -1, 1),
    Direction::new(1, -1, -1),
];

impl Direction {
    #[must_use]
    pub const fn new(dx: isize, dy: isize, dz: isize) -> Self {
        Self { dx, dy, dz }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(-self.dx, -self.dy, -self.dz)
    }

    #[must_use]
    pub const fn kind(self) -> DirectionKind {
        let non_zero = (self.dx != 0) as u8 + (self.dy != 0) as u8 + (self.dz != 0) as u8;
        match non_zero {
            1 => DirectionKind::Axial,
            2 => DirectionKind::Planar,
            _ => DirectionKind::Space,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_direction_counts_by_kind() {
        let count = |kind: DirectionKind| DIRECTIONS.iter().filter(|d| d.kind() == kind).count();
        assert_eq!(count(DirectionKind::Axial), 3);
        assert_eq!(count(DirectionKind::Planar), 6);
        assert_eq!(count(DirectionKind::Space), 4);
    }

    #[test]
    fn test_directions_cover_every_line_once() {
        let mut seen = HashSet::new();
        for dir in DIRECTIONS {
            assert_ne!(dir, Direction::new(0, 0, 0));
            assert!(seen.insert(dir), "duplicate direction {dir}");
            assert!(
                !seen.contains(&dir.reversed()),
                "{dir} listed together with its reverse"
            );
        }

        // Every non-zero vector in {-1, 0, 1}^3 is a listed direction or its reverse.
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let dir = Direction::new(dx, dy, dz);
                    if dir == Direction::new(0, 0, 0) {
                        continue;
                    }
                    assert!(seen.contains(&dir) || seen.contains(&dir.reversed()));
                }
            }
        }
    }

    #[test]
    fn test_leading_component_is_positive() {
        for dir in DIRECTIONS {
            let leading = [dir.dx, dir.dy, dir.dz]
                .into_iter()
                .find(|&c| c != 0)
                .unwrap();
            assert_eq!(leading, 1, "{dir}");
        }
    }
}
