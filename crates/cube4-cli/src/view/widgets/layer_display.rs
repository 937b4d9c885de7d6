use std::iter;

use cube4_engine::{Column, Coord, Grid, Player, WinningLine};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::{CellDisplay, board_extent, style};

/// One horizontal slice of the cube at height `y`.
///
/// Columns run along x from left to right and rows along z from top to
/// bottom, matching the claw's left/right and up/down moves.
#[derive(Debug)]
pub struct LayerDisplay<'a> {
    grid: &'a Grid,
    y: usize,
    claw: Option<Column>,
    falling_piece: Option<(Coord, Player)>,
    ghost: Option<Coord>,
    winning_line: Option<&'a WinningLine>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> LayerDisplay<'a> {
    pub fn new(grid: &'a Grid, y: usize) -> Self {
        Self {
            grid,
            y,
            claw: None,
            falling_piece: None,
            ghost: None,
            winning_line: None,
            block: None,
        }
    }

    pub fn claw(self, column: Column) -> Self {
        Self {
            claw: Some(column),
            ..self
        }
    }

    pub fn falling_piece(self, coord: Coord, player: Player) -> Self {
        Self {
            falling_piece: Some((coord, player)),
            ..self
        }
    }

    pub fn ghost(self, coord: Coord) -> Self {
        Self {
            ghost: Some(coord),
            ..self
        }
    }

    pub fn winning_line(self, line: &'a WinningLine) -> Self {
        Self {
            winning_line: Some(line),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        board_extent(self.grid.size()) * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        board_extent(self.grid.size()) * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_display(&self, coord: Coord) -> CellDisplay {
        let display = match self.falling_piece {
            Some((falling, player)) if falling == coord => CellDisplay::falling(player),
            _ if self.ghost == Some(coord) => CellDisplay::ghost(),
            _ => CellDisplay::from_cell(self.grid.get(coord).unwrap_or_default()),
        };
        if self.winning_line.is_some_and(|line| line.contains(coord)) {
            display.background(style::WIN_BG)
        } else if self.claw == Some(coord.column()) {
            display.background(style::CLAW_BG)
        } else {
            display
        }
    }
}

impl Widget for LayerDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &LayerDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let n = self.grid.size().get();
        let horizontal = Layout::horizontal(iter::repeat_n(
            Constraint::Length(CellDisplay::width()),
            n,
        ))
        .flex(Flex::Center);
        let vertical = Layout::vertical(iter::repeat_n(
            Constraint::Length(CellDisplay::height()),
            n,
        ));

        for (z, row) in vertical.split(area).iter().enumerate() {
            for (x, cell_area) in horizontal.split(*row).iter().enumerate() {
                self.cell_display(Coord::new(x, self.y, z))
                    .render(*cell_area, buf);
            }
        }
    }
}
