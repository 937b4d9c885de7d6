use super::{
    board_size::BoardSize,
    cell::Cell,
    coord::{Column, Coord},
};

/// The N×N×N occupancy grid, indexed `[x][y][z]` with `y = 0` at the bottom.
///
/// Cells are stored flat; `(x, y, z)` lives at `(x * N + y) * N + z`.
///
/// Win and draw detection live in [`crate::engine`] as further methods on
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    fn index(&self, coord: Coord) -> usize {
        let n = self.size.get();
        (coord.x * n + coord.y) * n + coord.z
    }

    /// Returns the cell at `coord`, or `None` if it is outside the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord
            .is_inside(self.size)
            .then(|| self.cells[self.index(coord)])
    }

    /// Overwrites a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(
            coord.is_inside(self.size),
            "{coord} is outside a board of size {}",
            self.size
        );
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Lowest empty `y` in `column`, or `None` if the column is full or off the board.
    #[must_use]
    pub fn landing_row(&self, column: Column) -> Option<usize> {
        if !column.is_inside(self.size) {
            return None;
        }
        (0..self.size.get()).find(|&y| self.cells[self.index(column.at(y))].is_empty())
    }

    /// Number of occupied cells in `column`.
    #[must_use]
    pub fn column_height(&self, column: Column) -> usize {
        if !column.is_inside(self.size) {
            return 0;
        }
        (0..self.size.get())
            .filter(|&y| !self.cells[self.index(column.at(y))].is_empty())
            .count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterates over every cell in `[x][y][z]` order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let n = self.size.get();
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let coord = Coord::new(i / (n * n), (i / n) % n, i % n);
            (coord, cell)
        })
    }

    /// Copies the grid into nested `[x][y][z]` vectors.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<Vec<Cell>>> {
        let n = self.size.get();
        self.cells
            .chunks(n * n)
            .map(|plane| plane.chunks(n).map(<[Cell]>::to_vec).collect())
            .collect()
    }
}
