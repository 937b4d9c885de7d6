use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InvalidBoardSizeError, ParseBoardSizeError};

/// Edge length of the cubic board.
///
/// Every axis of the grid spans `0..size`. Sizes below 4 are accepted but can
/// never produce a win, since no line of four fits inside the cube.
///
/// The rules work for any size; [`BoardSize::MAX`] only keeps the N³ cell
/// count small and lets the terminal front end lay a layer out in `u16`
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}")]
pub struct BoardSize(usize);

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BoardSize {
    pub const MIN: usize = 1;
    pub const MAX: usize = 32;
    pub const DEFAULT: Self = Self(5);

    pub fn new(size: usize) -> Result<Self, InvalidBoardSizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(InvalidBoardSizeError { size })
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Index of the middle column on each horizontal axis, where new claws spawn.
    #[must_use]
    pub const fn center(self) -> usize {
        self.0 / 2
    }

    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < self.0
    }

    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0 * self.0
    }

    /// Moves `index` by `delta`, returning `None` if the result leaves the board.
    #[must_use]
    pub fn offset(self, index: usize, delta: isize) -> Option<usize> {
        index.checked_add_signed(delta).filter(|&i| self.contains(i))
    }

    /// Moves `index` by `delta`, pinning the result to `0..size`.
    #[must_use]
    pub fn offset_clamped(self, index: usize, delta: isize) -> usize {
        index.saturating_add_signed(delta).min(self.0 - 1)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = InvalidBoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s.trim().parse::<usize>()?;
        Ok(Self::new(size)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_supported_range() {
        assert_eq!(BoardSize::new(1).unwrap().get(), 1);
        assert_eq!(BoardSize::new(5).unwrap().get(), 5);
        assert_eq!(BoardSize::new(BoardSize::MAX).unwrap().get(), BoardSize::MAX);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(BoardSize::new(0), Err(InvalidBoardSizeError { size: 0 }));
        assert_eq!(BoardSize::new(33), Err(InvalidBoardSizeError { size: 33 }));
    }

    #[test]
    fn test_center() {
        assert_eq!(BoardSize::new(5).unwrap().center(), 2);
        assert_eq!(BoardSize::new(4).unwrap().center(), 2);
        assert_eq!(BoardSize::new(1).unwrap().center(), 0);
    }

    #[test]
    fn test_offset_stays_inside() {
        let size = BoardSize::DEFAULT;
        assert_eq!(size.offset(0, -1), None);
        assert_eq!(size.offset(4, 1), None);
        assert_eq!(size.offset(2, 2), Some(4));
        assert_eq!(size.offset(2, -2), Some(0));
    }

    #[test]
    fn test_offset_clamped_pins_to_edges() {
        let size = BoardSize::DEFAULT;
        assert_eq!(size.offset_clamped(0, -1), 0);
        assert_eq!(size.offset_clamped(4, 1), 4);
        assert_eq!(size.offset_clamped(1, 1), 2);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("6".parse::<BoardSize>().unwrap().get(), 6);
        assert!(matches!(
            "abc".parse::<BoardSize>(),
            Err(ParseBoardSizeError::NotANumber(_))
        ));
        assert_eq!(
            "0".parse::<BoardSize>(),
            Err(ParseBoardSizeError::OutOfRange(InvalidBoardSizeError { size: 0 }))
        );
    }

    #[test]
    fn test_serde_rejects_invalid_size() {
        assert_eq!(serde_json::to_string(&BoardSize::DEFAULT).unwrap(), "5");
        assert!(serde_json::from_str::<BoardSize>("0").is_err());
        assert_eq!(serde_json::from_str::<BoardSize>("7").unwrap().get(), 7);
    }
}
