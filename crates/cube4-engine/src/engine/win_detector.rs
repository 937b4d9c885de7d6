use arrayvec::ArrayVec;
use serde::Serialize;

use crate::core::{Coord, DIRECTIONS, Direction, Grid, Player};

/// Number of same-player cells in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Longest possible run through one cell: three on each side plus the cell itself.
const MAX_LINE_CELLS: usize = 2 * (WIN_LENGTH - 1) + 1;

/// Cells of a completed line, ordered from the backward end to the forward end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    pub direction: Direction,
    pub cells: ArrayVec<Coord, MAX_LINE_CELLS>,
}

impl WinningLine {
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Line detection.
///
/// Any line completed by a move has to pass through the cell just filled, so
/// checks only ever start from that cell and walk at most three steps each way
/// along the 13 directions.
impl Grid {
    /// Returns whether `player` owns a run of [`WIN_LENGTH`] cells through `origin`.
    #[must_use]
    pub fn check_win(&self, origin: Coord, player: Player) -> bool {
        DIRECTIONS
            .iter()
            .any(|&direction| self.check_line(origin, direction, player))
    }

    /// Returns whether `player` owns a run of [`WIN_LENGTH`] cells through
    /// `origin` along `direction` (in either sense).
    ///
    /// The origin must itself belong to `player`.
    #[must_use]
    pub fn check_line(&self, origin: Coord, direction: Direction, player: Player) -> bool {
        if self.get(origin) != Some(player.to_cell()) {
            return false;
        }
        let forward = self.run_length(origin, direction, 1, player);
        let backward = self.run_length(origin, direction, -1, player);
        1 + forward + backward >= WIN_LENGTH
    }

    /// Like [`Grid::check_win`] but returns the cells of the first completed line.
    #[must_use]
    pub fn winning_line(&self, origin: Coord, player: Player) -> Option<WinningLine> {
        if self.get(origin) != Some(player.to_cell()) {
            return None;
        }
        DIRECTIONS.iter().find_map(|&direction| {
            let forward = self.run_length(origin, direction, 1, player);
            let backward = self.run_length(origin, direction, -1, player);
            if 1 + forward + backward < WIN_LENGTH {
                return None;
            }
            #[expect(clippy::cast_possible_wrap)]
            let cells = (-(backward as isize)..=forward as isize)
                .filter_map(|step| origin.offset(direction, step, self.size()))
                .collect();
            Some(WinningLine { direction, cells })
        })
    }

    /// Returns whether every cell of the board is occupied.
    #[must_use]
    pub fn check_draw(&self) -> bool {
        self.cells().all(|(_, cell)| !cell.is_empty())
    }

    /// Counts consecutive `player` cells after `origin`, walking in `sign`
    /// direction, up to `WIN_LENGTH - 1` steps.
    fn run_length(&self, origin: Coord, direction: Direction, sign: isize, player: Player) -> usize {
        let cell = player.to_cell();
        #[expect(clippy::cast_possible_wrap)]
        let max_steps = (WIN_LENGTH - 1) as isize;
        (1..=max_steps)
            .map_while(|step| origin.offset(direction, sign * step, self.size()))
            .take_while(|&coord| self.get(coord) == Some(cell))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{BoardSize, Cell};

    use super::*;

    fn grid_with(player: Player, coords: &[(usize, usize, usize)]) -> Grid {
        let mut grid = Grid::new(BoardSize::DEFAULT);
        for &(x, y, z) in coords {
            grid.set(Coord::new(x, y, z), player.to_cell());
        }
        grid
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let grid = grid_with(Player::One, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
        assert!(!grid.check_win(Coord::new(2, 0, 0), Player::One));
    }

    #[test]
    fn test_fourth_piece_completes_x_axis() {
        let grid = grid_with(Player::One, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]);
        assert!(grid.check_win(Coord::new(3, 0, 0), Player::One));
    }

    #[test]
    fn test_win_detected_from_middle_of_line() {
        let grid = grid_with(Player::Two, &[(1, 1, 1), (2, 2, 2), (3, 3, 3), (4, 4, 4)]);
        assert!(grid.check_win(Coord::new(2, 2, 2), Player::Two));
        assert!(grid.check_win(Coord::new(3, 3, 3), Player::Two));
    }

    #[test]
    fn test_every_direction_wins() {
        for direction in DIRECTIONS {
            // Negative components start at 3 so the line walks down to 0.
            let start = |d: isize| if d < 0 { 3 } else { 0 };
            let base = Coord::new(start(direction.dx), start(direction.dy), start(direction.dz));
            let mut grid = Grid::new(BoardSize::DEFAULT);
            let line: Vec<_> = (0..4)
                .map(|i| base.offset(direction, i, grid.size()).unwrap())
                .collect();
            for &coord in &line {
                grid.set(coord, Player::One.to_cell());
            }
            for &coord in &line {
                assert!(grid.check_win(coord, Player::One), "{direction} from {coord}");
                assert!(grid.check_line(coord, direction, Player::One));
                assert!(!grid.check_win(coord, Player::Two));
            }
        }
    }

    #[test]
    fn test_line_interrupted_by_opponent() {
        let mut grid = grid_with(Player::One, &[(0, 0, 0), (1, 0, 0), (3, 0, 0), (4, 0, 0)]);
        grid.set(Coord::new(2, 0, 0), Player::Two.to_cell());
        assert!(!grid.check_win(Coord::new(1, 0, 0), Player::One));
        assert!(!grid.check_win(Coord::new(3, 0, 0), Player::One));
    }

    #[test]
    fn test_line_interrupted_by_gap() {
        let grid = grid_with(Player::One, &[(0, 0, 0), (1, 0, 0), (3, 0, 0), (4, 0, 0)]);
        assert!(!grid.check_win(Coord::new(4, 0, 0), Player::One));
    }

    #[test]
    fn test_origin_must_belong_to_player() {
        let grid = grid_with(Player::One, &[(0, 0, 0), (1, 0, 0), (3, 0, 0), (4, 0, 0)]);
        assert!(!grid.check_line(Coord::new(2, 0, 0), Direction::new(1, 0, 0), Player::One));
        assert!(!grid.check_win(Coord::new(2, 0, 0), Player::One));
    }

    #[test]
    fn test_small_board_never_wins() {
        let mut grid = Grid::new(BoardSize::new(3).unwrap());
        for (coord, _) in grid.clone().cells() {
            grid.set(coord, Player::One.to_cell());
        }
        assert!(grid.cells().all(|(coord, _)| !grid.check_win(coord, Player::One)));
        assert!(grid.check_draw());
    }

    #[test]
    fn test_winning_line_cells() {
        let grid = grid_with(Player::One, &[(0, 3, 0), (1, 2, 0), (2, 1, 0), (3, 0, 0)]);
        let line = grid.winning_line(Coord::new(3, 0, 0), Player::One).unwrap();
        assert_eq!(line.direction, Direction::new(1, -1, 0));
        assert_eq!(
            line.cells.as_slice(),
            &[
                Coord::new(0, 3, 0),
                Coord::new(1, 2, 0),
                Coord::new(2, 1, 0),
                Coord::new(3, 0, 0),
            ]
        );
        assert!(grid.winning_line(Coord::new(3, 0, 0), Player::Two).is_none());
    }

    #[test]
    fn test_winning_line_of_five() {
        let grid = grid_with(
            Player::Two,
            &[(2, 0, 0), (2, 0, 1), (2, 0, 2), (2, 0, 3), (2, 0, 4)],
        );
        let line = grid.winning_line(Coord::new(2, 0, 2), Player::Two).unwrap();
        assert_eq!(line.cells.len(), 5);
        assert!(line.contains(Coord::new(2, 0, 0)));
        assert!(line.contains(Coord::new(2, 0, 4)));
    }

    #[test]
    fn test_checkerboard_fill_is_a_draw() {
        let mut grid = Grid::new(BoardSize::DEFAULT);
        for (coord, _) in grid.clone().cells() {
            let player = if (coord.x + coord.y + coord.z) % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            grid.set(coord, player.to_cell());
        }
        assert!(grid.check_draw());

        grid.set(Coord::new(0, 0, 0), Cell::Empty);
        assert!(!grid.check_draw());
    }

    #[test]
    fn test_empty_board_is_not_a_draw() {
        assert!(!Grid::new(BoardSize::DEFAULT).check_draw());
    }
}
